// src/presentation/http/extractors.rs
use crate::domain::context::RequestContext;
use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::Utc;
use std::convert::Infallible;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds a [`RequestContext`] from the incoming request, reusing the
/// `x-request-id` header when the client or a layer already set one.
#[derive(Debug, Clone)]
pub struct RequestCtx(pub RequestContext);

impl<S> FromRequestParts<S> for RequestCtx
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Ok(Self(RequestContext::new(request_id, Utc::now())))
    }
}
