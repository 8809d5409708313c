//! Reply envelope shared by every endpoint.
//!
//! The blog API answers in several shapes: bare objects, arrays wrapped in
//! a named field, empty bodies, and error documents that arrive with a
//! success status (`{"error": ...}` or `[{"error": ...}, 500]`). Each body
//! goes through [`decode`] so callers only ever see a payload or an
//! [`ApiError`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::api::ApiError;
use crate::domain::engagement::Comment;
use crate::domain::post::Post;

/// Acknowledgement of a create call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Created {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostList {
    #[serde(default)]
    posts: Option<Vec<Post>>,
}

impl PostList {
    pub(crate) fn into_posts(self) -> Vec<Post> {
        self.posts.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentList {
    #[serde(default)]
    comments: Option<Vec<Comment>>,
}

impl CommentList {
    pub(crate) fn into_comments(self) -> Vec<Comment> {
        self.comments.unwrap_or_default()
    }
}

pub(crate) fn decode<T: DeserializeOwned>(action: &'static str, body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };

    let value: Value =
        serde_json::from_str(body).map_err(|source| ApiError::Decode { action, source })?;

    if let Some(message) = error_message(&value) {
        return Err(ApiError::Rejected { action, message });
    }

    serde_json::from_value(value).map_err(|source| ApiError::Decode { action, source })
}

/// Message of an error document: an object with a string `error` or
/// `detail`, alone or as the first item of an `[object, status]` pair.
fn error_message(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => map
            .get("error")
            .or_else(|| map.get("detail"))
            .and_then(Value::as_str)
            .map(str::to_string),
        Value::Array(items) => match items.as_slice() {
            [document @ Value::Object(_), Value::Number(_)] => error_message(document),
            _ => None,
        },
        _ => None,
    }
}
