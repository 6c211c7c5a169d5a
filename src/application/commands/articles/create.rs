// src/application/commands/articles/create.rs
use super::ArticleUseCase;
use crate::{
    application::error::ApplicationResult,
    domain::{article::Article, context::RequestContext},
};
use tracing::{Span, field, instrument};

impl ArticleUseCase {
    #[instrument(skip_all, fields(request_id = %ctx.request_id(), article_id = field::Empty))]
    pub async fn create_article(
        &self,
        ctx: &RequestContext,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> ApplicationResult<Article> {
        let article = Article::create(title, body, self.clock.now()).inspect_err(|err| {
            tracing::debug!(error = %err, "rejected new article");
        })?;
        Span::current().record("article_id", field::display(article.id()));

        self.saver.save(ctx, &article).await?;
        tracing::info!("article created");
        Ok(article)
    }
}
