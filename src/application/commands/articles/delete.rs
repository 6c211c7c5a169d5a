use super::ArticleUseCase;
use crate::{
    application::error::ApplicationResult,
    domain::{article::ArticleId, context::RequestContext, errors::DomainError},
};
use tracing::instrument;

impl ArticleUseCase {
    /// Articles cannot be deleted; callers get an explicit error.
    #[instrument(skip_all, fields(request_id = %ctx.request_id(), article_id = %id))]
    pub async fn delete_article(
        &self,
        ctx: &RequestContext,
        id: ArticleId,
    ) -> ApplicationResult<()> {
        tracing::warn!("delete requested");
        Err(DomainError::NotImplemented("article deletion is not supported".into()).into())
    }
}
