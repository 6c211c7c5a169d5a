// src/presentation/http/controllers/articles.rs
use crate::application::dto::{ArticleDto, CreatedArticleDto};
use crate::domain::article::ArticleId;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequestCtx;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ArticleRequest {
    pub title: String,
    pub content: String,
}

fn invalid_payload(rejection: JsonRejection) -> HttpError {
    tracing::debug!(error = %rejection, "rejected request payload");
    HttpError::bad_request("invalid request payload")
}

fn parse_id(raw: &str) -> HttpResult<ArticleId> {
    raw.parse()
        .map_err(|_| HttpError::bad_request(format!("invalid article id: {raw}")))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = CreatedArticleDto),
        (status = 400, description = "Malformed payload.", body = ErrorResponse),
        (status = 422, description = "Title or content rejected.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    RequestCtx(ctx): RequestCtx,
    payload: Result<Json<ArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<CreatedArticleDto>)> {
    let Json(payload) = payload.map_err(invalid_payload)?;

    let article = state
        .services
        .articles
        .create_article(&ctx, payload.title, payload.content)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(CreatedArticleDto::from(&article))))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article identifier (UUID)")),
    responses(
        (status = 200, description = "The stored article.", body = ArticleDto),
        (status = 400, description = "Malformed identifier.", body = ErrorResponse),
        (status = 404, description = "No article with this identifier.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    RequestCtx(ctx): RequestCtx,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    let id = parse_id(&id)?;

    state
        .services
        .articles
        .find_article(&ctx, id)
        .await
        .into_http()
        .map(|article| Json(article.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article identifier (UUID)")),
    request_body = ArticleRequest,
    responses(
        (status = 204, description = "Article updated."),
        (status = 400, description = "Malformed identifier or payload.", body = ErrorResponse),
        (status = 404, description = "No article with this identifier.", body = ErrorResponse),
        (status = 422, description = "Title or content rejected.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn edit_article(
    Extension(state): Extension<HttpState>,
    RequestCtx(ctx): RequestCtx,
    Path(id): Path<String>,
    payload: Result<Json<ArticleRequest>, JsonRejection>,
) -> HttpResult<StatusCode> {
    let id = parse_id(&id)?;
    let Json(payload) = payload.map_err(invalid_payload)?;

    state
        .services
        .articles
        .edit_article(&ctx, id, payload.title, payload.content)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article identifier (UUID)")),
    responses(
        (status = 501, description = "Deleting articles is not supported.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    RequestCtx(ctx): RequestCtx,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = parse_id(&id)?;

    state
        .services
        .articles
        .delete_article(&ctx, id)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
