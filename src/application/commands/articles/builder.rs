use std::sync::Arc;

use super::ArticleUseCase;
use crate::{
    application::ports::time::Clock,
    domain::{
        article::{ArticleFinder, ArticleSaver, ArticleStore},
        errors::{DomainError, DomainResult},
    },
    infrastructure::time::SystemClock,
};

#[derive(Default)]
pub struct ArticleUseCaseBuilder {
    finder: Option<Arc<dyn ArticleFinder>>,
    saver: Option<Arc<dyn ArticleSaver>>,
    clock: Option<Arc<dyn Clock>>,
}

impl ArticleUseCaseBuilder {
    /// Use one store for both the finder and the saver role.
    pub fn store<S>(mut self, store: Arc<S>) -> Self
    where
        S: ArticleStore + 'static,
    {
        let finder: Arc<dyn ArticleFinder> = store.clone();
        let saver: Arc<dyn ArticleSaver> = store;
        self.finder = Some(finder);
        self.saver = Some(saver);
        self
    }

    pub fn finder(mut self, finder: Arc<dyn ArticleFinder>) -> Self {
        self.finder = Some(finder);
        self
    }

    pub fn saver(mut self, saver: Arc<dyn ArticleSaver>) -> Self {
        self.saver = Some(saver);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> DomainResult<ArticleUseCase> {
        let (Some(finder), Some(saver)) = (self.finder, self.saver) else {
            return Err(DomainError::InvalidArgument("store cannot be nil".into()));
        };
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>);

        Ok(ArticleUseCase::from_parts(finder, saver, clock))
    }
}
