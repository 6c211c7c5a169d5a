// src/application/commands/articles/mod.rs
mod builder;
mod create;
mod delete;
mod edit;
mod find;
mod service;

pub use builder::ArticleUseCaseBuilder;
pub use service::ArticleUseCase;
