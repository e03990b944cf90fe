use html_escape::encode_double_quoted_attribute;

/// A link when there is somewhere to go, a plain span otherwise.
/// `inner_html` must already be escaped.
pub fn link_or_span(url: Option<&str>, class: &str, inner_html: &str) -> String {
    let class = encode_double_quoted_attribute(class);
    match url {
        Some(url) => format!(
            "<a href=\"{}\" class=\"{}\">{}</a>",
            encode_double_quoted_attribute(url),
            class,
            inner_html,
        ),
        None => format!("<span class=\"{}\">{}</span>", class, inner_html),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_with_url() {
        assert_eq!(
            link_or_span(Some("/t/1?a=\"b\""), "text-body", "Hi"),
            "<a href=\"/t/1?a=&quot;b&quot;\" class=\"text-body\">Hi</a>",
        );
    }

    #[test]
    fn span_without_url() {
        assert_eq!(link_or_span(None, "text-body", "Hi"), "<span class=\"text-body\">Hi</span>");
    }
}
