use axum::{routing::get, routing::post, Router};

use crate::http::handlers;
use crate::AppState;

pub fn health() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health))
}

pub fn pages() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index_page))
        .route("/static/post.html", get(handlers::post_page))
}

pub fn forms() -> Router<AppState> {
    Router::new()
        .route("/forms/posts", post(handlers::create_post))
        .route("/forms/posts/:id/comments", post(handlers::add_comment))
        .route("/forms/posts/:id/like", post(handlers::like_post))
        .route("/forms/posts/:id/delete", post(handlers::delete_post))
}
