use super::ArticleUseCase;
use crate::{
    application::error::ApplicationResult,
    domain::{
        article::{Article, ArticleId},
        context::RequestContext,
    },
};
use tracing::instrument;

impl ArticleUseCase {
    #[instrument(skip_all, fields(request_id = %ctx.request_id(), article_id = %id))]
    pub async fn find_article(
        &self,
        ctx: &RequestContext,
        id: ArticleId,
    ) -> ApplicationResult<Article> {
        Ok(self.finder.find_by_id(ctx, id).await?)
    }
}
