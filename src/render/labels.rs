use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::data::Label;

/// Parses `#rrggbb` (or `rrggbb`) into its channels.
fn parse_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Black on light backgrounds, white on dark ones.
fn contrasting_foreground((r, g, b): (u8, u8, u8)) -> &'static str {
    let luminance = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0;
    if luminance > 0.5 { "#000" } else { "#fff" }
}

fn render_label(label: &Label, item_class: &str) -> String {
    let title = label.description.as_deref()
        .map(|x| format!(" title=\"{}\"", encode_double_quoted_attribute(x)))
        .unwrap_or_default();
    match parse_color(&label.color) {
        Some(rgb) => format!(
            "<span class=\"badge label {}\" style=\"background-color: #{:02x}{:02x}{:02x}; color: {}\"{}>{}</span>",
            encode_double_quoted_attribute(item_class),
            rgb.0, rgb.1, rgb.2,
            contrasting_foreground(rgb),
            title,
            encode_text(&label.name),
        ),
        None => format!(
            "<span class=\"badge badge-secondary label {}\"{}>{}</span>",
            encode_double_quoted_attribute(item_class),
            title,
            encode_text(&label.name),
        ),
    }
}

pub fn render_labels(labels: &[Label], show_no_labels: bool, item_class: &str) -> String {
    if labels.is_empty() {
        return if show_no_labels {
            "<span class=\"text-muted labels-empty\">No labels</span>".to_string()
        } else {
            "".to_string()
        };
    }
    let items = labels.iter()
        .map(|x| render_label(x, item_class))
        .collect::<Vec<_>>()
        .join("");
    format!("<div class=\"labels d-flex align-items-center\">{}</div>", items)
}
