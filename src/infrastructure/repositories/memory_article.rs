//! Process-local article storage.
//!
//! Articles live in a `HashMap` behind a single `RwLock`: `save` and `fill`
//! take the write lock for their whole mutation, lookups take the read lock
//! before touching anything. Guards never outlive the method that took them.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::context::RequestContext;
use crate::domain::article::{Article, ArticleFinder, ArticleId, ArticleSaver};
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Default)]
pub struct InMemoryArticleStore {
    articles: RwLock<HashMap<ArticleId, Article>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a batch of articles under one write lock.
    ///
    /// An empty batch is a no-op. If any article is empty the whole batch is
    /// rejected and nothing is stored. Returns the number of articles written.
    pub fn fill<I>(&self, articles: I) -> DomainResult<usize>
    where
        I: IntoIterator<Item = Article>,
    {
        let articles: Vec<Article> = articles.into_iter().collect();
        if articles.is_empty() {
            return Ok(0);
        }
        if articles.iter().any(Article::is_empty) {
            return Err(empty_article_error());
        }

        let count = articles.len();
        let mut guard = self.write()?;
        for article in articles {
            guard.insert(article.id(), article);
        }
        drop(guard);

        tracing::debug!(count, "bulk loaded articles");
        Ok(count)
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, HashMap<ArticleId, Article>>> {
        self.articles
            .read()
            .map_err(|e| DomainError::Persistence(format!("article store lock poisoned: {e}")))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, HashMap<ArticleId, Article>>> {
        self.articles
            .write()
            .map_err(|e| DomainError::Persistence(format!("article store lock poisoned: {e}")))
    }
}

fn empty_article_error() -> DomainError {
    DomainError::InvalidArgument("cannot store an empty article".into())
}

#[async_trait]
impl ArticleFinder for InMemoryArticleStore {
    async fn find_by_id(&self, _ctx: &RequestContext, id: ArticleId) -> DomainResult<Article> {
        self.read()?
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }
}

#[async_trait]
impl ArticleSaver for InMemoryArticleStore {
    async fn save(&self, ctx: &RequestContext, article: &Article) -> DomainResult<()> {
        if article.is_empty() {
            tracing::warn!(request_id = %ctx.request_id(), "refused to save an empty article");
            return Err(empty_article_error());
        }

        self.write()?.insert(article.id(), article.clone());
        tracing::debug!(request_id = %ctx.request_id(), article_id = %article.id(), "article saved");
        Ok(())
    }
}
