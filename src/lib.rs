pub mod api;
pub mod app;
pub mod config;
pub mod dom;
pub mod domain;
pub mod http;
pub mod view;

use crate::api::BlogClient;
use crate::app::{index::IndexPage, post::PostPage};
use crate::dom::{COMMENTS_CONTAINER, LIKE_COUNT, POST_DETAILS, POST_LIST};
use crate::view::{IndexView, PostView};

#[derive(Clone)]
pub struct AppState {
    pub index: IndexPage,
    pub post: PostPage,
}

impl AppState {
    pub fn new(client: BlogClient) -> Self {
        Self {
            index: IndexPage::new(client.clone(), IndexView::new(POST_LIST)),
            post: PostPage::new(
                client,
                PostView::new(POST_DETAILS, COMMENTS_CONTAINER, LIKE_COUNT),
            ),
        }
    }
}
