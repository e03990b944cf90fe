use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};

pub fn format_date_time(datetime: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let d = now.signed_duration_since(*datetime);
    if d.num_days() > 365 {
        datetime.format("%b %d %Y").to_string()
    } else if d.num_days() > 0 {
        datetime.format("%b %d").to_string()
    } else if d.num_hours() > 0 {
        format!("{}h ago", d.num_hours())
    } else if d.num_minutes() > 0 {
        format!("{}m ago", d.num_minutes())
    } else {
        "just now".to_string()
    }
}

pub fn render_timestamp(datetime: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    format!(
        "<time class=\"timestamp\" datetime=\"{}\" title=\"{}\">{}</time>",
        encode_double_quoted_attribute(&datetime.to_rfc3339()),
        encode_double_quoted_attribute(&datetime.format("%Y-%m-%d %H:%M UTC").to_string()),
        encode_text(&format_date_time(datetime, now)),
    )
}

/// Drops the code host from names like `github.com/owner/repo`.
pub fn display_repo_name(name: &str) -> String {
    let parts = name.split('/').collect::<Vec<_>>();
    match parts.as_slice() {
        [host, rest @ ..] if rest.len() >= 2 && host.contains('.') => rest.join("/"),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn relative_times() {
        let now = now();
        assert_eq!(format_date_time(&(now - Duration::seconds(20)), &now), "just now");
        assert_eq!(format_date_time(&(now - Duration::minutes(5)), &now), "5m ago");
        assert_eq!(format_date_time(&(now - Duration::hours(3)), &now), "3h ago");
        assert_eq!(format_date_time(&(now - Duration::days(2)), &now), "Jun 13");
        assert_eq!(format_date_time(&(now - Duration::days(400)), &now), "May 11 2022");
        assert_eq!(format_date_time(&(now + Duration::hours(1)), &now), "just now");
    }

    #[test]
    fn timestamp_carries_machine_readable_date() {
        let now = now();
        let html = render_timestamp(&(now - Duration::hours(2)), &now);
        assert!(html.contains("datetime=\"2023-06-15T10:00:00+00:00\""));
        assert!(html.contains(">2h ago</time>"));
    }

    #[test]
    fn repo_names() {
        assert_eq!(display_repo_name("github.com/owner/repo"), "owner/repo");
        assert_eq!(display_repo_name("owner/repo"), "owner/repo");
        assert_eq!(display_repo_name("github.com/repo"), "github.com/repo");
        assert_eq!(display_repo_name("host/owner/repo"), "host/owner/repo");
        assert_eq!(display_repo_name("repo"), "repo");
    }
}
