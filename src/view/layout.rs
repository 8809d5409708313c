//! Full pages assembled from a rendered [`Document`].

use askama::Template;

use crate::dom::{Document, ElementId, LIKE_COUNT, POST_DETAILS, POST_LIST};
use crate::view::{links, markup};

/// Form targets on the post page, present only when a post was requested.
pub struct PostActions {
    pub like: String,
    pub comment: String,
}

impl PostActions {
    pub fn new(post_id: &str) -> Self {
        Self {
            like: links::post_form_action(post_id, "like"),
            comment: links::post_form_action(post_id, "comments"),
        }
    }
}

pub struct AppendedElement {
    pub id: ElementId,
    pub markup: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexLayout<'a> {
    pub notice: Option<&'a str>,
    pub post_list: String,
    pub appended: Vec<AppendedElement>,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostLayout<'a> {
    pub notice: Option<&'a str>,
    pub actions: Option<PostActions>,
    pub post_details: String,
    pub like_count: String,
    pub appended: Vec<AppendedElement>,
}

impl<'a> IndexLayout<'a> {
    pub fn from_document(doc: &Document, notice: Option<&'a str>) -> askama::Result<Self> {
        Ok(Self {
            notice,
            post_list: element_markup(doc, POST_LIST)?,
            appended: appended(doc)?,
        })
    }
}

impl<'a> PostLayout<'a> {
    pub fn from_document(
        doc: &Document,
        post_id: Option<&str>,
        notice: Option<&'a str>,
    ) -> askama::Result<Self> {
        Ok(Self {
            notice,
            actions: post_id.map(PostActions::new),
            post_details: element_markup(doc, POST_DETAILS)?,
            like_count: element_markup(doc, LIKE_COUNT)?,
            appended: appended(doc)?,
        })
    }
}

fn element_markup(doc: &Document, id: ElementId) -> askama::Result<String> {
    match doc.element(id) {
        Some(element) => markup(element),
        None => Ok(String::new()),
    }
}

fn appended(doc: &Document) -> askama::Result<Vec<AppendedElement>> {
    doc.appended()
        .map(|element| {
            Ok(AppendedElement {
                id: element.id,
                markup: markup(element)?,
            })
        })
        .collect()
}
