use std::{fs::{read_dir, read_to_string}, path::Path};

use chrono::{DateTime, Utc};
use json::JsonValue;

use crate::data::{Actor, Label, Repository, Thread, ThreadID, ThreadPreview};

pub(super) const THREADS_DIR: &str = "threads";
pub(super) const PREVIEWS_DIR: &str = "previews";

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Could not read {0}: {1}")]
    Io(String, #[source] std::io::Error),
    #[error("Invalid JSON in {0}: {1}")]
    Json(String, #[source] json::Error),
    #[error("Missing or invalid field \"{0}\"")]
    Field(&'static str),
    #[error(transparent)]
    Enum(#[from] crate::data::ParseEnumError),
}

fn string(json: &JsonValue, field: &'static str) -> Result<String, StoreError> {
    json[field].as_str().map(|x| x.to_string()).ok_or(StoreError::Field(field))
}

fn optional_string(json: &JsonValue, field: &'static str) -> Option<String> {
    json[field].as_str().map(|x| x.to_string())
}

fn parse_repository(json: &JsonValue) -> Result<Repository, StoreError> {
    let repository = &json["repository"];
    if !repository.is_object() {
        return Err(StoreError::Field("repository"));
    }
    Ok(Repository {
        name: string(repository, "name")?,
        url: string(repository, "url")?,
    })
}

fn parse_actor(json: &JsonValue) -> Result<Actor, StoreError> {
    let author = &json["author"];
    match author["type"].as_str() {
        Some("user") => Ok(Actor::User { username: string(author, "username")?, url: string(author, "url")? }),
        Some("org") => Ok(Actor::Org { name: string(author, "name")?, url: string(author, "url")? }),
        Some("external") => Ok(Actor::External {
            username: string(author, "username")?,
            url: optional_string(author, "url"),
        }),
        _ => Err(StoreError::Field("author")),
    }
}

fn parse_labels(json: &JsonValue) -> Result<Vec<Label>, StoreError> {
    match &json["labels"] {
        JsonValue::Array(labels) => labels.iter()
            .map(|x| -> Result<Label, StoreError> {
                Ok(Label {
                    name: string(x, "name")?,
                    color: string(x, "color")?,
                    description: optional_string(x, "description"),
                })
            })
            .collect(),
        JsonValue::Null => Ok(vec![]),
        _ => Err(StoreError::Field("labels")),
    }
}

pub(super) fn parse_thread(json: &JsonValue) -> Result<Thread, StoreError> {
    let created = json["created"].as_str()
        .and_then(|x| x.parse::<DateTime<Utc>>().ok())
        .ok_or(StoreError::Field("created"))?;
    Ok(Thread {
        id: ThreadID(string(json, "id")?),
        number: json["number"].as_u64().ok_or(StoreError::Field("number"))?,
        title: string(json, "title")?,
        kind: string(json, "kind")?.parse()?,
        state: string(json, "state")?.parse()?,
        url: string(json, "url")?,
        created,
        author: parse_actor(json)?,
        comments: match &json["comments"] {
            JsonValue::Null => 0,
            x => x.as_u64().ok_or(StoreError::Field("comments"))?,
        },
        labels: parse_labels(json)?,
        repository: parse_repository(json)?,
    })
}

pub(super) fn parse_preview(json: &JsonValue) -> Result<ThreadPreview, StoreError> {
    Ok(ThreadPreview {
        title: string(json, "title")?,
        kind: string(json, "kind")?.parse()?,
        repository: parse_repository(json)?,
    })
}

fn load_json(path: &Path) -> Result<JsonValue, StoreError> {
    let text = read_to_string(path).map_err(|e| StoreError::Io(path.display().to_string(), e))?;
    json::parse(&text).map_err(|e| StoreError::Json(path.display().to_string(), e))
}

/// Parses every `*.json` file in `dir`. Files that fail are logged and skipped.
pub(super) fn load_dir<T, P>(dir: &Path, parse: P) -> Vec<T>
    where P: Fn(&JsonValue) -> Result<T, StoreError> {
    let entries = match read_dir(dir) {
        Ok(x) => x,
        Err(e) => {
            log::warn!("Skipping {}: {}", dir.display(), e);
            return vec![];
        }
    };
    let mut paths = entries
        .filter_map(|x| x.ok().map(|x| x.path()))
        .filter(|x| x.extension().map_or(false, |e| e == "json"))
        .collect::<Vec<_>>();
    paths.sort();
    paths.into_iter()
        .filter_map(|path| match load_json(&path).and_then(|json| parse(&json)) {
            Ok(x) => Some(x),
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use json::object;

    use super::*;
    use crate::data::{ThreadKind, ThreadState};

    fn thread_json() -> JsonValue {
        object! {
            id: "VGhyZWFkOjE=",
            number: 1,
            title: "Crash on start",
            kind: "ISSUE",
            state: "CLOSED",
            url: "/github.com/acme/rocket/-/threads/1",
            created: "2023-05-01T10:00:00Z",
            author: { "type": "external", username: "bot" },
            comments: 4,
            labels: [{ name: "bug", color: "#d73a4a" }],
            repository: { name: "github.com/acme/rocket", url: "/github.com/acme/rocket" },
        }
    }

    #[test]
    fn parses_thread() {
        let thread = parse_thread(&thread_json()).unwrap();
        assert_eq!(thread.number, 1);
        assert_eq!(thread.kind, ThreadKind::Issue);
        assert_eq!(thread.state, ThreadState::Closed);
        assert_eq!(thread.author, Actor::External { username: "bot".to_string(), url: None });
        assert_eq!(thread.comments, 4);
        assert_eq!(thread.labels.len(), 1);
    }

    #[test]
    fn missing_comments_and_labels_default_to_empty() {
        let mut json = thread_json();
        json.remove("comments");
        json.remove("labels");
        let thread = parse_thread(&json).unwrap();
        assert_eq!(thread.comments, 0);
        assert!(thread.labels.is_empty());
    }

    #[test]
    fn rejects_bad_fields() {
        let mut json = thread_json();
        json["state"] = "PENDING".into();
        assert!(matches!(parse_thread(&json), Err(StoreError::Enum(_))));
        let mut json = thread_json();
        json.remove("created");
        assert!(matches!(parse_thread(&json), Err(StoreError::Field("created"))));
    }

    #[test]
    fn parses_preview() {
        let preview = parse_preview(&object! {
            title: "Draft",
            kind: "changeset",
            repository: { name: "a/b", url: "/a/b" },
        }).unwrap();
        assert_eq!(preview.kind, ThreadKind::Changeset);
        assert_eq!(preview.repository.name, "a/b");
    }
}
