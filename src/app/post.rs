use serde::Deserialize;

use crate::api::{ApiError, BlogClient, Created};
use crate::dom::{Document, ElementId, ADD_COMMENT_FORM, LIKE_BUTTON, LIKE_COUNT, POST_DETAILS};
use crate::domain::engagement::{LikeCount, NewComment};
use crate::view::PostView;

const ELEMENTS: &[ElementId] = &[POST_DETAILS, LIKE_COUNT, LIKE_BUTTON, ADD_COMMENT_FORM];

/// Fields of the add-comment form.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentForm {
    pub comment: String,
    #[serde(rename = "comment-author")]
    pub author: String,
}

impl From<CommentForm> for NewComment {
    fn from(form: CommentForm) -> Self {
        Self {
            content: form.comment,
            author: form.author,
        }
    }
}

/// The `id` query parameter, ignoring an empty value.
pub fn requested_post_id(id: Option<&str>) -> Option<&str> {
    id.map(str::trim).filter(|id| !id.is_empty())
}

/// Handlers behind the post detail page.
#[derive(Clone, Debug)]
pub struct PostPage {
    client: BlogClient,
    view: PostView,
}

impl PostPage {
    pub fn new(client: BlogClient, view: PostView) -> Self {
        Self { client, view }
    }

    /// Empty document with the elements the post page declares. The
    /// comments container is not among them; it is appended on first use.
    pub fn document() -> Document {
        Document::new(ELEMENTS)
    }

    /// Renders the post, then its comments. Comments are only fetched once
    /// the post itself has been fetched.
    pub async fn load(&self, doc: &mut Document, post_id: &str) {
        let post = match self.client.get_post(post_id).await {
            Ok(post) => post,
            Err(err) => {
                tracing::error!(error = %err, post_id, "error displaying post details");
                return;
            }
        };

        if let Err(err) = self.view.render_post(doc, &post) {
            tracing::error!(error = ?err, post_id, "failed to render post");
            return;
        }

        let comments = match self.client.list_comments(post_id).await {
            Ok(comments) => comments,
            Err(err) => {
                tracing::error!(error = %err, post_id, "error fetching comments");
                return;
            }
        };

        if let Err(err) = self.view.render_comments(doc, &comments) {
            tracing::error!(error = ?err, post_id, "failed to render comments");
        }
    }

    pub async fn submit_comment(
        &self,
        doc: &mut Document,
        post_id: &str,
        form: CommentForm,
    ) -> Result<Created, ApiError> {
        tracing::info!(post_id, "adding comment to post");

        let created = self
            .client
            .add_comment(post_id, &form.into())
            .await
            .map_err(|err| {
                tracing::error!(error = %err, post_id, "error adding comment");
                err
            })?;

        tracing::info!(post_id, comment_id = ?created.id, "comment created");
        doc.reload();

        Ok(created)
    }

    /// Likes the post and writes the returned count into the counter.
    pub async fn like(&self, doc: &mut Document, post_id: &str) -> Option<LikeCount> {
        match self.client.like_post(post_id).await {
            Ok(count) => {
                self.show_likes(doc, count.likes);
                Some(count)
            }
            Err(err) => {
                tracing::error!(error = %err, post_id, "error liking post");
                None
            }
        }
    }

    /// Overrides the counter with a count already known to the caller.
    pub fn show_likes(&self, doc: &mut Document, likes: i64) {
        if !self.view.render_like_count(doc, likes) {
            tracing::warn!(likes, "page has no like counter");
        }
    }
}
