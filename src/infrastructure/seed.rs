//! Startup seeding from a JSON file of `{ "title", "content" }` objects.
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::Article;
use crate::infrastructure::repositories::InMemoryArticleStore;

#[derive(Debug, Deserialize)]
struct SeedArticle {
    title: String,
    content: String,
}

/// Parse seed JSON into validated articles. One invalid entry fails the
/// whole document.
pub fn parse_seed(json: &str, now: DateTime<Utc>) -> ApplicationResult<Vec<Article>> {
    let entries: Vec<SeedArticle> = serde_json::from_str(json)
        .map_err(|e| ApplicationError::infrastructure(format!("invalid seed document: {e}")))?;

    entries
        .into_iter()
        .map(|entry| {
            Article::create(entry.title, entry.content, now).map_err(ApplicationError::from)
        })
        .collect()
}

pub fn load_seed_file(
    store: &InMemoryArticleStore,
    path: &Path,
    now: DateTime<Utc>,
) -> ApplicationResult<usize> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ApplicationError::infrastructure(format!("cannot read {}: {e}", path.display()))
    })?;
    let articles = parse_seed(&raw, now)?;
    let count = store.fill(articles)?;
    tracing::info!(count, path = %path.display(), "seeded article store");
    Ok(count)
}
