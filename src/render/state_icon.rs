use html_escape::encode_double_quoted_attribute;

use crate::data::{ThreadKind, ThreadState};

pub struct StateIcon {
    pub icon: &'static str,
    pub color: &'static str,
}

pub fn state_icon(kind: ThreadKind, state: ThreadState) -> StateIcon {
    let color = match state {
        ThreadState::Open => "text-success",
        ThreadState::Merged => "text-purple",
        ThreadState::Closed => "text-danger",
    };
    let icon = match (kind, state) {
        (ThreadKind::Discussion, ThreadState::Open) => "comment-text-multiple",
        (ThreadKind::Discussion, ThreadState::Merged) => "comment-check",
        (ThreadKind::Discussion, ThreadState::Closed) => "comment-remove",
        (ThreadKind::Issue, ThreadState::Open) => "issue-opened",
        (ThreadKind::Issue, _) => "issue-closed",
        (ThreadKind::Changeset, ThreadState::Merged) => "source-merge",
        (ThreadKind::Changeset, _) => "source-pull",
    };
    StateIcon { icon, color }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

pub fn render_state_icon(kind: ThreadKind, state: ThreadState, class: &str) -> String {
    let StateIcon { icon, color } = state_icon(kind, state);
    let tooltip = format!("{} {}", capitalize(state.as_str()), kind.as_str().to_lowercase());
    format!(
        "<span class=\"thread-state-icon icon-inline {} {}\" data-icon=\"{}\" title=\"{}\" aria-label=\"{}\"></span>",
        color,
        encode_double_quoted_attribute(class),
        icon,
        tooltip,
        tooltip,
    )
}
