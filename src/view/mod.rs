//! Markup for the elements the page handlers fill in.
//!
//! Each view is built with the element handles it writes to, so a handler
//! never looks an element up by a hard-coded id.

use askama::Template;

use crate::dom::{Content, Document, Element, ElementId};
use crate::domain::engagement::Comment;
use crate::domain::post::Post;

pub mod layout;
pub mod links;

#[derive(Template)]
#[template(path = "post_list.html")]
struct PostListTemplate<'a> {
    posts: Vec<PostItem<'a>>,
}

struct PostItem<'a> {
    post: &'a Post,
    href: String,
    delete_action: String,
}

impl<'a> PostItem<'a> {
    fn new(post: &'a Post) -> Self {
        Self {
            post,
            href: links::post_page_link(post.key()),
            delete_action: links::post_form_action(post.key(), "delete"),
        }
    }
}

#[derive(Template)]
#[template(path = "post_details.html")]
struct PostDetailsTemplate<'a> {
    post: &'a Post,
}

#[derive(Template)]
#[template(path = "comments.html")]
struct CommentsTemplate<'a> {
    comments: &'a [Comment],
}

#[derive(Template)]
#[template(source = "{{ text }}", ext = "html")]
struct EscapedText<'a> {
    text: &'a str,
}

pub fn like_count_text(likes: i64) -> String {
    format!("Likes: {}", likes)
}

/// Serialized element content, with text escaped.
pub fn markup(element: &Element) -> askama::Result<String> {
    match &element.content {
        Content::Empty => Ok(String::new()),
        Content::Html(html) => Ok(html.clone()),
        Content::Text(text) => EscapedText { text }.render(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IndexView {
    post_list: ElementId,
}

impl IndexView {
    pub fn new(post_list: ElementId) -> Self {
        Self { post_list }
    }

    pub fn render_posts(&self, doc: &mut Document, posts: &[Post]) -> askama::Result<()> {
        if !doc.contains(self.post_list) {
            tracing::error!(element = %self.post_list, "element not found");
            return Ok(());
        }

        tracing::debug!(count = posts.len(), "rendering posts");
        let posts = posts.iter().map(PostItem::new).collect();
        let html = PostListTemplate { posts }.render()?;
        doc.set_inner_html(self.post_list, html);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PostView {
    details: ElementId,
    comments: ElementId,
    like_count: ElementId,
}

impl PostView {
    pub fn new(details: ElementId, comments: ElementId, like_count: ElementId) -> Self {
        Self {
            details,
            comments,
            like_count,
        }
    }

    pub fn render_post(&self, doc: &mut Document, post: &Post) -> askama::Result<()> {
        let html = PostDetailsTemplate { post }.render()?;
        if !doc.set_inner_html(self.details, html) {
            tracing::error!(element = %self.details, "element not found");
        }
        self.render_like_count(doc, post.likes);
        Ok(())
    }

    /// The comments container is appended to the page when it is missing.
    pub fn render_comments(&self, doc: &mut Document, comments: &[Comment]) -> askama::Result<()> {
        let html = CommentsTemplate { comments }.render()?;
        doc.ensure(self.comments).content = Content::Html(html);
        Ok(())
    }

    /// Returns false when the page has no like counter.
    pub fn render_like_count(&self, doc: &mut Document, likes: i64) -> bool {
        doc.set_text(self.like_count, like_count_text(likes))
    }
}
