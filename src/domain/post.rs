use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub likes: i64,
}

impl Post {
    /// Identifier used in links, empty when the API did not send one.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

/// Body of a create or update request. Field names are the wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_entries_carry_the_store_id() {
        let post: Post = serde_json::from_value(json!({
            "_id": "1",
            "title": "A",
            "content": "c",
            "author": "x",
            "comments": [],
            "likes": 3,
            "dislikes": 0
        }))
        .unwrap();

        assert_eq!(post.id.as_deref(), Some("1"));
        assert_eq!(post.likes, 3);
    }

    #[test]
    fn detail_payload_has_no_id_and_may_omit_likes() {
        let post: Post =
            serde_json::from_value(json!({ "title": "A", "content": "c", "author": "x" })).unwrap();

        assert_eq!(post.id, None);
        assert_eq!(post.likes, 0);
    }
}
