pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod services;

pub use crate::domain::context::RequestContext;
pub use error::ApplicationResult;
