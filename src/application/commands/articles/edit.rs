use super::ArticleUseCase;
use crate::{
    application::error::ApplicationResult,
    domain::{article::ArticleId, context::RequestContext},
};
use tracing::instrument;

impl ArticleUseCase {
    /// Read-modify-write of a stored article. Not isolated: a concurrent edit
    /// between the read and the write is overwritten.
    #[instrument(skip_all, fields(request_id = %ctx.request_id(), article_id = %id))]
    pub async fn edit_article(
        &self,
        ctx: &RequestContext,
        id: ArticleId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> ApplicationResult<()> {
        let mut article = self.finder.find_by_id(ctx, id).await?;
        article.edit(title, body, self.clock.now())?;
        self.saver.save(ctx, &article).await?;

        tracing::info!("article edited");
        Ok(())
    }
}
