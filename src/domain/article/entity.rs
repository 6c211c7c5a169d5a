// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};

/// An article with identity, validated text and timestamps.
///
/// Fields are private: new articles only come out of [`Article::create`] and
/// content only changes through [`Article::edit`], both of which validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    title: ArticleTitle,
    body: ArticleBody,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Article {
    pub fn create(
        title: impl Into<String>,
        body: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let title = ArticleTitle::new(title)?;
        let body = ArticleBody::new(body)?;

        Ok(Self {
            id: ArticleId::generate(),
            title,
            body,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate an article from parts that were validated elsewhere.
    ///
    /// A nil `id` yields the empty article, which stores refuse to persist.
    pub fn restore(
        id: ArticleId,
        title: ArticleTitle,
        body: ArticleBody,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            body,
            created_at,
            updated_at,
        }
    }

    /// Replace title and body. Both values are validated before anything is
    /// touched, so a failed edit leaves the article as it was.
    pub fn edit(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let title = ArticleTitle::new(title)?;
        let body = ArticleBody::new(body)?;

        self.title = title;
        self.body = body;
        self.updated_at = now;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_nil()
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &ArticleTitle {
        &self.title
    }

    pub fn body(&self) -> &ArticleBody {
        &self.body
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
