//! URLs the pages link and post to. Post ids are encoded here, so templates
//! only ever HTML-escape finished URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::form_urlencoded;

/// Characters that must be percent-encoded inside one path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn post_page_url(post_id: &str) -> String {
    format!("/{}", post_page_link(post_id))
}

/// Relative link used by the post list.
pub fn post_page_link(post_id: &str) -> String {
    format!("static/post.html?{}", query(&[("id", post_id)]))
}

/// Post page showing the count returned by a like.
pub fn liked_post_page_url(post_id: &str, likes: i64) -> String {
    format!(
        "/static/post.html?{}",
        query(&[("id", post_id), ("likes", &likes.to_string())])
    )
}

/// Form target for an action on one post, e.g. `/forms/posts/42/delete`.
pub fn post_form_action(post_id: &str, action: &str) -> String {
    format!(
        "/forms/posts/{}/{}",
        utf8_percent_encode(post_id, SEGMENT),
        action
    )
}

fn query(pairs: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
