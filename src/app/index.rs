use crate::api::BlogClient;
use crate::dom::{Document, ElementId, CREATE_POST_FORM, POST_LIST};
use crate::domain::post::NewPost;
use crate::view::IndexView;

pub const POST_CREATED: &str = "Post created successfully!";
pub const POST_DELETED: &str = "Post deleted successfully!";

const ELEMENTS: &[ElementId] = &[POST_LIST, CREATE_POST_FORM];

/// Handlers behind the post list page.
#[derive(Clone, Debug)]
pub struct IndexPage {
    client: BlogClient,
    view: IndexView,
}

impl IndexPage {
    pub fn new(client: BlogClient, view: IndexView) -> Self {
        Self { client, view }
    }

    /// Empty document with the elements the index page declares.
    pub fn document() -> Document {
        Document::new(ELEMENTS)
    }

    pub async fn load(&self, doc: &mut Document) {
        let posts = match self.client.list_posts().await {
            Ok(posts) => posts,
            Err(err) => {
                tracing::error!(error = %err, "error fetching posts");
                return;
            }
        };

        if let Err(err) = self.view.render_posts(doc, &posts) {
            tracing::error!(error = ?err, "failed to render posts");
        }
    }

    pub async fn submit_create_post(&self, doc: &mut Document, post: NewPost) {
        match self.client.create_post(&post).await {
            Ok(created) => {
                tracing::info!(post_id = ?created.id, "post created");
                doc.alert(POST_CREATED);
                doc.navigate("/");
            }
            Err(err) => tracing::error!(error = %err, "error creating post"),
        }
    }

    pub async fn delete_post(&self, doc: &mut Document, post_id: &str) {
        match self.client.delete_post(post_id).await {
            Ok(()) => {
                tracing::info!(post_id, "post deleted");
                doc.alert(POST_DELETED);
                doc.reload();
            }
            Err(err) => tracing::error!(error = %err, post_id, "error deleting post"),
        }
    }
}
