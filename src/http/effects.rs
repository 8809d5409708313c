//! Turns the side effects recorded in a document into an HTTP response.
//!
//! Navigation and reloads become `303 See Other`; the last alert rides
//! along as the `notice` query parameter so the next page can show it. A
//! handler that asked for nothing gets `204 No Content`, which leaves the
//! browser on its current page.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use url::form_urlencoded;

use crate::dom::{Document, Effect};

/// `current` is the page the form was submitted from, the target of a
/// reload.
pub(crate) fn into_response(doc: &Document, current: &str) -> Response {
    let mut notice = None;
    let mut target = None;

    for effect in doc.effects() {
        match effect {
            Effect::Alert(message) => notice = Some(message.as_str()),
            Effect::Navigate(url) => target = Some(url.as_str()),
            Effect::Reload => target = Some(current),
        }
    }

    match target {
        Some(target) => Redirect::to(&with_notice(target, notice)).into_response(),
        None => {
            if let Some(notice) = notice {
                tracing::warn!(notice, "alert dropped without navigation");
            }
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

fn with_notice(target: &str, notice: Option<&str>) -> String {
    let Some(notice) = notice else {
        return target.to_string();
    };

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("notice", notice)
        .finish();
    let separator = if target.contains('?') { '&' } else { '?' };
    format!("{}{}{}", target, separator, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::links::post_page_url;
    use axum::http::header::LOCATION;

    fn location(response: &Response) -> &str {
        response.headers()[LOCATION].to_str().unwrap()
    }

    #[test]
    fn navigation_carries_the_alert() {
        let mut doc = Document::default();
        doc.alert("Post created successfully!");
        doc.navigate("/");

        let response = into_response(&doc, "/");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/?notice=Post+created+successfully%21");
    }

    #[test]
    fn reload_returns_to_the_current_page() {
        let mut doc = Document::default();
        doc.reload();

        let response = into_response(&doc, &post_page_url("42"));
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/static/post.html?id=42");
    }

    #[test]
    fn reload_with_alert_extends_an_existing_query() {
        let mut doc = Document::default();
        doc.alert("done");
        doc.reload();

        let response = into_response(&doc, &post_page_url("42"));
        assert_eq!(location(&response), "/static/post.html?id=42&notice=done");
    }

    #[test]
    fn no_effects_means_no_content() {
        let response = into_response(&Document::default(), "/");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
