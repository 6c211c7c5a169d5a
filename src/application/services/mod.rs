// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{commands::articles::ArticleUseCase, ports::time::Clock},
    domain::{
        article::{ArticleFinder, ArticleSaver},
        errors::DomainResult,
    },
};

pub struct ApplicationServices {
    pub articles: Arc<ArticleUseCase>,
}

impl ApplicationServices {
    pub fn new(
        finder: Arc<dyn ArticleFinder>,
        saver: Arc<dyn ArticleSaver>,
        clock: Arc<dyn Clock>,
    ) -> DomainResult<Self> {
        let articles = ArticleUseCase::builder()
            .finder(finder)
            .saver(saver)
            .clock(clock)
            .build()?;

        Ok(Self {
            articles: Arc::new(articles),
        })
    }
}
