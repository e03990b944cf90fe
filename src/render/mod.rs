use actix_web::{HttpResponse, http::{header::ContentType, StatusCode}};
use chrono::{DateTime, Utc};
use html_escape::encode_text;

use crate::data::ThreadOrPreview;

pub use self::thread_list_item::{render_thread_list_item, ThreadListItemContext};

mod actor;
mod format;
mod labels;
mod link;
mod state_icon;
mod thread_list_item;

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const THREAD_LIST_HTML: &str = include_str!("../../assets/element/thread-list.html");
const THREAD_LIST_EMPTY_HTML: &str = include_str!("../../assets/element/thread-list-empty.html");
const SELECT_ALL_HTML: &str = include_str!("../../assets/element/select-all.html");

/// Substitutes `{{key}}` placeholders in a single pass, so values are never
/// scanned for placeholders themselves. Unknown keys are left untouched.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

pub fn render_page<R>(status: StatusCode, title: &str, render_content: R) -> HttpResponse
    where R: FnOnce() -> String {
    let html = fill_template(INDEX_HTML, &[
        ("title", encode_text(title).as_ref()),
        ("content", render_content().as_str()),
    ]);
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(html)
}

pub fn render_fragment(html: String) -> HttpResponse {
    HttpResponse::build(StatusCode::OK)
        .content_type(ContentType::html())
        .body(html)
}

pub fn render_thread_list(threads: &[&ThreadOrPreview], context: &ThreadListItemContext, now: &DateTime<Utc>) -> String {
    if threads.is_empty() {
        return THREAD_LIST_EMPTY_HTML.to_string();
    }
    let items = threads.iter()
        .map(|x| render_thread_list_item(x, context, "", now))
        .collect::<Vec<_>>()
        .join("");
    let count = match threads.len() {
        1 => "1 thread".to_string(),
        n => format!("{} threads", n),
    };
    fill_template(THREAD_LIST_HTML, &[
        ("select-all", if context.item_checkboxes { SELECT_ALL_HTML.trim_end() } else { "" }),
        ("count", count.as_str()),
        ("items", items.as_str()),
    ])
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::data::{Repository, ThreadKind, ThreadPreview};

    #[test]
    fn fill_template_is_single_pass() {
        let html = fill_template("<p>{{a}} {{b}} {{c}}</p>", &[("a", "{{b}}"), ("b", "two")]);
        assert_eq!(html, "<p>{{b}} two {{c}}</p>");
    }

    #[test]
    fn fill_template_keeps_unclosed_braces() {
        assert_eq!(fill_template("a {{b", &[("b", "x")]), "a {{b");
    }

    #[test]
    fn empty_list() {
        let now = Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap();
        let html = render_thread_list(&[], &ThreadListItemContext::default(), &now);
        assert!(html.contains("No threads."));
    }

    #[test]
    fn list_counts_rows_and_adds_select_all() {
        let now = Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap();
        let preview = ThreadOrPreview::Preview(ThreadPreview {
            title: "Draft".to_string(),
            kind: ThreadKind::Discussion,
            repository: Repository { name: "a/b".to_string(), url: "/a/b".to_string() },
        });
        let context = ThreadListItemContext { show_repository: false, item_checkboxes: true };
        let html = render_thread_list(&[&preview, &preview], &context, &now);
        assert!(html.contains("2 threads"));
        assert!(html.contains("aria-label=\"Select all\""));
        assert_eq!(html.matches("aria-label=\"Select item\"").count(), 2);
        assert_eq!(html.matches("<li class=\"list-group-item \">").count(), 2);
    }
}
