// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use blog_engine::domain::RequestContext;
use blog_engine::domain::article::{Article, ArticleFinder, ArticleId, ArticleSaver};
use blog_engine::domain::errors::{DomainError, DomainResult};
use blog_engine::infrastructure::repositories::InMemoryArticleStore;
use std::sync::Mutex;

/* -------------------------------- RecordingStore -------------------------------- */

/// 呼び出し回数を記録するストア（中身はインメモリストア）
#[derive(Default)]
pub struct RecordingStore {
    inner: InMemoryArticleStore,
    finds: Mutex<usize>,
    saves: Mutex<Vec<Article>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        let store = Self::default();
        store.inner.fill(articles).expect("seed recording store");
        store
    }

    pub fn find_calls(&self) -> usize {
        *self.finds.lock().unwrap()
    }

    pub fn saved(&self) -> Vec<Article> {
        self.saves.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.len().unwrap()
    }
}

#[async_trait]
impl ArticleFinder for RecordingStore {
    async fn find_by_id(&self, ctx: &RequestContext, id: ArticleId) -> DomainResult<Article> {
        *self.finds.lock().unwrap() += 1;
        self.inner.find_by_id(ctx, id).await
    }
}

#[async_trait]
impl ArticleSaver for RecordingStore {
    async fn save(&self, ctx: &RequestContext, article: &Article) -> DomainResult<()> {
        self.saves.lock().unwrap().push(article.clone());
        self.inner.save(ctx, article).await
    }
}

/* -------------------------------- FailingSaver -------------------------------- */

/// 常に永続化エラーを返すセーバー
pub struct FailingSaver;

pub const FAILING_SAVER_MESSAGE: &str = "disk on fire";

#[async_trait]
impl ArticleSaver for FailingSaver {
    async fn save(&self, _ctx: &RequestContext, _article: &Article) -> DomainResult<()> {
        Err(DomainError::Persistence(FAILING_SAVER_MESSAGE.into()))
    }
}
