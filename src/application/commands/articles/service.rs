// src/application/commands/articles/service.rs
use std::sync::Arc;

use super::ArticleUseCaseBuilder;
use crate::{
    application::ports::time::Clock,
    domain::article::{ArticleFinder, ArticleSaver, ArticleStore},
    infrastructure::time::SystemClock,
};

/// Coordinates article creation and edits against a store that is only known
/// through its finder and saver roles.
///
/// `edit_article` reads, mutates and writes back in two separate store calls.
/// Two concurrent edits of the same article race and the later write wins.
pub struct ArticleUseCase {
    pub(super) finder: Arc<dyn ArticleFinder>,
    pub(super) saver: Arc<dyn ArticleSaver>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleUseCase {
    /// Wire both store roles to the same store using the system clock.
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: ArticleStore + 'static,
    {
        let finder: Arc<dyn ArticleFinder> = store.clone();
        let saver: Arc<dyn ArticleSaver> = store;
        Self::from_parts(finder, saver, Arc::new(SystemClock))
    }

    pub fn builder() -> ArticleUseCaseBuilder {
        ArticleUseCaseBuilder::default()
    }

    pub(super) fn from_parts(
        finder: Arc<dyn ArticleFinder>,
        saver: Arc<dyn ArticleSaver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            finder,
            saver,
            clock,
        }
    }
}
