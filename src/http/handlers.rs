use askama::Template;
use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::index::IndexPage;
use crate::app::post::{requested_post_id, CommentForm, PostPage};
use crate::domain::post::NewPost;
use crate::http::{effects, AppError};
use crate::view::layout::{IndexLayout, PostLayout};
use crate::view::links::{liked_post_page_url, post_page_url};
use crate::AppState;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
}

#[derive(Deserialize)]
pub struct IndexQuery {
    pub notice: Option<String>,
}

#[derive(Deserialize)]
pub struct PostQuery {
    pub id: Option<String>,
    pub notice: Option<String>,
    /// Count returned by a like, shown instead of the fetched one.
    pub likes: Option<i64>,
}

fn render<T: Template>(page: askama::Result<T>) -> Result<Html<String>, AppError> {
    let html = page.and_then(|page| page.render()).map_err(|err| {
        tracing::error!(error = ?err, "failed to render page");
        AppError::internal("failed to render page")
    })?;

    Ok(Html(html))
}

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn index_page(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let mut doc = IndexPage::document();
    state.index.load(&mut doc).await;

    render(IndexLayout::from_document(&doc, query.notice.as_deref()))
}

pub async fn post_page(
    State(state): State<AppState>,
    Query(query): Query<PostQuery>,
) -> Result<Html<String>, AppError> {
    let mut doc = PostPage::document();
    let post_id = requested_post_id(query.id.as_deref());

    match post_id {
        Some(post_id) => {
            state.post.load(&mut doc, post_id).await;
            if let Some(likes) = query.likes {
                state.post.show_likes(&mut doc, likes);
            }
        }
        None => tracing::error!("post id not provided in url"),
    }

    render(PostLayout::from_document(
        &doc,
        post_id,
        query.notice.as_deref(),
    ))
}

pub async fn create_post(
    State(state): State<AppState>,
    Form(post): Form<NewPost>,
) -> Response {
    let mut doc = IndexPage::document();
    state.index.submit_create_post(&mut doc, post).await;

    effects::into_response(&doc, "/")
}

pub async fn add_comment(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Form(form): Form<CommentForm>,
) -> Response {
    let mut doc = PostPage::document();
    if let Err(err) = state.post.submit_comment(&mut doc, &post_id, form).await {
        tracing::error!(error = %err, post_id = %post_id, "error adding comment");
    }

    effects::into_response(&doc, &post_page_url(&post_id))
}

/// Likes the post, then sends the browser back to the post page carrying the
/// new count. A failed like stays on the page.
pub async fn like_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Response {
    let mut doc = PostPage::document();
    match state.post.like(&mut doc, &post_id).await {
        Some(count) => Redirect::to(&liked_post_page_url(&post_id, count.likes)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Response {
    let mut doc = IndexPage::document();
    state.index.delete_post(&mut doc, &post_id).await;

    effects::into_response(&doc, "/")
}
