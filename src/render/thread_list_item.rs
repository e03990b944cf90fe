use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::data::{ThreadOrPreview, ThreadState};

use super::{
    actor::render_actor_link,
    fill_template,
    format::{display_repo_name, render_timestamp},
    labels::render_labels,
    link::link_or_span,
    state_icon::render_state_icon,
};

const ITEM_HTML: &str = include_str!("../../assets/element/thread-list-item/item.html");
const CHECKBOX_HTML: &str = include_str!("../../assets/element/thread-list-item/checkbox.html");
const CREATED_HTML: &str = include_str!("../../assets/element/thread-list-item/created.html");
const COMMENTS_HTML: &str = include_str!("../../assets/element/thread-list-item/comments.html");

/// How each row of a thread list is displayed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThreadListItemContext {
    /// Show the repository next to the thread number.
    pub show_repository: bool,
    /// Prefix every row with a selection checkbox.
    pub item_checkboxes: bool,
}

fn render_repository_link(thread: &ThreadOrPreview, class: &str) -> String {
    let repository = thread.repository();
    format!(
        "<a href=\"{}\"{}>{}</a>",
        encode_double_quoted_attribute(&repository.url),
        if class.is_empty() { "".to_string() } else { format!(" class=\"{}\"", class) },
        encode_text(&display_repo_name(&repository.name)),
    )
}

fn render_reference(thread: &ThreadOrPreview, context: &ThreadListItemContext) -> String {
    match thread.number() {
        Some(number) => format!(
            "<span class=\"text-muted mr-2\">{}#{}</span>",
            if context.show_repository { render_repository_link(thread, "text-muted") } else { "".to_string() },
            number,
        ),
        None => format!(
            "<span class=\"text-muted mr-2\">New {} in {}:</span>",
            thread.kind().as_str().to_lowercase(),
            render_repository_link(thread, ""),
        ),
    }
}

/// Renders one row of a thread list.
///
/// Previews only show what a draft has: its title, kind and repository.
/// `now` anchors relative timestamps, so equal inputs give equal output.
pub fn render_thread_list_item(
    thread: &ThreadOrPreview,
    context: &ThreadListItemContext,
    class_name: &str,
    now: &DateTime<Utc>,
) -> String {
    let persisted = thread.as_thread();
    let title = link_or_span(thread.url(), "text-decoration-none text-body", &encode_text(thread.title()));
    let state_icon = render_state_icon(thread.kind(), thread.state().unwrap_or(ThreadState::Open), "mr-2");
    let labels = persisted
        .map(|t| render_labels(&t.labels, false, "mr-2"))
        .unwrap_or_default();
    let created = persisted
        .map(|t| fill_template(CREATED_HTML.trim_end(), &[
            ("timestamp", render_timestamp(&t.created, now).as_str()),
            ("author", render_actor_link(&t.author).as_str()),
        ]))
        .unwrap_or_default();
    let comments = persisted
        .filter(|t| t.comments > 0)
        .map(|t| fill_template(COMMENTS_HTML.trim_end(), &[("count", t.comments.to_string().as_str())]))
        .unwrap_or_default();
    let checkbox = if context.item_checkboxes { CHECKBOX_HTML.trim_end() } else { "" };
    fill_template(ITEM_HTML, &[
        ("class-name", encode_double_quoted_attribute(class_name).as_ref()),
        ("checkbox", checkbox),
        ("state-icon", state_icon.as_str()),
        ("title", title.as_str()),
        ("labels", labels.as_str()),
        ("reference", render_reference(thread, context).as_str()),
        ("created", created.as_str()),
        ("comments", comments.as_str()),
    ])
}
