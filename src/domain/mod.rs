pub mod article;
pub mod context;
pub mod errors;

pub use context::RequestContext;
pub use errors::{DomainError, DomainResult};
