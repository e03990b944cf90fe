use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::{Actor, Label, Repository, ThreadID};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreadKind {
    Discussion,
    Issue,
    Changeset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreadState {
    Open,
    Merged,
    Closed,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown {what} \"{value}\"")]
pub struct ParseEnumError {
    what: &'static str,
    value: String,
}

impl ThreadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadKind::Discussion => "DISCUSSION",
            ThreadKind::Issue => "ISSUE",
            ThreadKind::Changeset => "CHANGESET",
        }
    }
}

impl FromStr for ThreadKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DISCUSSION" => Ok(ThreadKind::Discussion),
            "ISSUE" => Ok(ThreadKind::Issue),
            "CHANGESET" => Ok(ThreadKind::Changeset),
            _ => Err(ParseEnumError { what: "thread kind", value: s.to_string() }),
        }
    }
}

impl ThreadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadState::Open => "OPEN",
            ThreadState::Merged => "MERGED",
            ThreadState::Closed => "CLOSED",
        }
    }
}

impl FromStr for ThreadState {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OPEN" => Ok(ThreadState::Open),
            "MERGED" => Ok(ThreadState::Merged),
            "CLOSED" => Ok(ThreadState::Closed),
            _ => Err(ParseEnumError { what: "thread state", value: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: ThreadID,
    pub number: u64,
    pub title: String,
    pub kind: ThreadKind,
    pub state: ThreadState,
    pub url: String,
    pub created: DateTime<Utc>,
    pub author: Actor,
    pub comments: u64,
    pub labels: Vec<Label>,
    pub repository: Repository,
}

/// A draft that has not been saved yet, so it has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadPreview {
    pub title: String,
    pub kind: ThreadKind,
    pub repository: Repository,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadOrPreview {
    Thread(Thread),
    Preview(ThreadPreview),
}

impl ThreadOrPreview {
    pub fn title(&self) -> &str {
        match self {
            ThreadOrPreview::Thread(t) => &t.title,
            ThreadOrPreview::Preview(p) => &p.title,
        }
    }

    pub fn kind(&self) -> ThreadKind {
        match self {
            ThreadOrPreview::Thread(t) => t.kind,
            ThreadOrPreview::Preview(p) => p.kind,
        }
    }

    pub fn repository(&self) -> &Repository {
        match self {
            ThreadOrPreview::Thread(t) => &t.repository,
            ThreadOrPreview::Preview(p) => &p.repository,
        }
    }

    pub fn id(&self) -> Option<&ThreadID> {
        self.as_thread().map(|t| &t.id)
    }

    pub fn number(&self) -> Option<u64> {
        self.as_thread().map(|t| t.number)
    }

    pub fn state(&self) -> Option<ThreadState> {
        self.as_thread().map(|t| t.state)
    }

    pub fn url(&self) -> Option<&str> {
        self.as_thread().map(|t| t.url.as_str())
    }

    pub fn as_thread(&self) -> Option<&Thread> {
        match self {
            ThreadOrPreview::Thread(t) => Some(t),
            ThreadOrPreview::Preview(_) => None,
        }
    }
}

impl From<Thread> for ThreadOrPreview {
    fn from(thread: Thread) -> Self {
        ThreadOrPreview::Thread(thread)
    }
}

impl From<ThreadPreview> for ThreadOrPreview {
    fn from(preview: ThreadPreview) -> Self {
        ThreadOrPreview::Preview(preview)
    }
}
