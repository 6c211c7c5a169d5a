use crate::domain::context::RequestContext;
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleFinder: Send + Sync {
    /// Fails with `DomainError::NotFound` when no article has this id.
    async fn find_by_id(&self, ctx: &RequestContext, id: ArticleId) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleSaver: Send + Sync {
    /// Insert or overwrite by id. Fails with `DomainError::InvalidArgument`
    /// for the empty article.
    async fn save(&self, ctx: &RequestContext, article: &Article) -> DomainResult<()>;
}

/// Anything that can both look up and persist articles.
pub trait ArticleStore: ArticleFinder + ArticleSaver {}

impl<T> ArticleStore for T where T: ArticleFinder + ArticleSaver + ?Sized {}
