// src/domain/context.rs
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Request-scoped context handed to every use case and store call.
///
/// It carries no business logic; it identifies the request in traces and
/// records when it arrived so deadlines can be derived from it later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: String,
    received_at: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>, received_at: DateTime<Utc>) -> Self {
        Self {
            request_id: request_id.into(),
            received_at,
        }
    }

    /// Context for work that does not originate from a client request
    /// (startup seeding, tests).
    pub fn background() -> Self {
        Self::new(Uuid::new_v4().to_string(), Utc::now())
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::background()
    }
}
