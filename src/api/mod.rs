//! HTTP client for the blog API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use url::Url;

mod error;
mod reply;

pub use error::ApiError;
pub use reply::Created;

use crate::domain::engagement::{Comment, LikeCount, NewComment};
use crate::domain::post::{NewPost, Post};
use reply::{CommentList, PostList};

#[derive(Clone, Debug)]
pub struct BlogClient {
    base_url: Url,
    client: Client,
}

impl BlogClient {
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()
            .map_err(|source| ApiError::Client { source })?;

        Ok(Self { base_url, client })
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = self.endpoint(&["posts", ""])?;
        let list: PostList = self.send("list posts", self.client.get(url)).await?;
        Ok(list.into_posts())
    }

    pub async fn get_post(&self, post_id: &str) -> Result<Post, ApiError> {
        let url = self.endpoint(&["posts", post_id])?;
        self.send("fetch post", self.client.get(url)).await
    }

    pub async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        let url = self.endpoint(&["posts", post_id, "comments"])?;
        let list: CommentList = self.send("fetch comments", self.client.get(url)).await?;
        Ok(list.into_comments())
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<Created, ApiError> {
        let url = self.endpoint(&["posts", ""])?;
        self.send("create post", self.client.post(url).json(post))
            .await
    }

    pub async fn add_comment(
        &self,
        post_id: &str,
        comment: &NewComment,
    ) -> Result<Created, ApiError> {
        let url = self.endpoint(&["comments", post_id])?;
        self.send("create comment", self.client.post(url).json(comment))
            .await
    }

    pub async fn like_post(&self, post_id: &str) -> Result<LikeCount, ApiError> {
        let url = self.endpoint(&["posts", post_id, "like"])?;
        self.send("like post", self.client.put(url)).await
    }

    pub async fn delete_post(&self, post_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["posts", post_id])?;
        let _: IgnoredAny = self.send("delete post", self.client.delete(url)).await?;
        Ok(())
    }

    /// Appends percent-encoded segments to the base path. A trailing `""`
    /// keeps the trailing slash the API routes expect (`/posts/`).
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        action: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { action, source })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| ApiError::Transport { action, source })?;

        tracing::debug!(action, %status, "blog api responded");

        if !status.is_success() {
            return Err(ApiError::Status {
                action,
                status,
                body: text,
            });
        }

        reply::decode(action, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> BlogClient {
        BlogClient::new(base.parse().unwrap()).unwrap()
    }

    #[test]
    fn endpoint_keeps_trailing_slash_for_collections() {
        let url = client("http://localhost:8000").endpoint(&["posts", ""]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/posts/");
    }

    #[test]
    fn endpoint_extends_a_base_path() {
        let url = client("http://example.test/api/")
            .endpoint(&["posts", "42", "comments"])
            .unwrap();
        assert_eq!(url.as_str(), "http://example.test/api/posts/42/comments");
    }

    #[test]
    fn endpoint_encodes_ids() {
        let url = client("http://localhost:8000")
            .endpoint(&["posts", "a/b?c"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/posts/a%2Fb%3Fc");
    }

    #[test]
    fn rejects_base_urls_without_a_path() {
        let err = BlogClient::new("mailto:someone@example.test".parse().unwrap()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }
}
