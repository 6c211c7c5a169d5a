use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id().into(),
            created_at: article.created_at(),
            updated_at: article.updated_at(),
            title: article.title().as_str().to_owned(),
            content: article.body().as_str().to_owned(),
        }
    }
}

/// What a client gets back after creating an article.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedArticleDto {
    pub id: Uuid,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<&Article> for CreatedArticleDto {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id().into(),
            created_at: article.created_at(),
        }
    }
}
