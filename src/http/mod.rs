use axum::Router;

use crate::AppState;

mod effects;
mod error;
mod handlers;
mod routes;

pub use error::AppError;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health())
        .merge(routes::pages())
        .merge(routes::forms())
        .with_state(state)
}
