/// Whoever performed an action, such as creating a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    User { username: String, url: String },
    Org { name: String, url: String },
    External { username: String, url: Option<String> },
}

impl Actor {
    pub fn display_name(&self) -> &str {
        match self {
            Actor::User { username, .. } => username,
            Actor::Org { name, .. } => name,
            Actor::External { username, .. } => username,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Actor::User { url, .. } | Actor::Org { url, .. } => Some(url),
            Actor::External { url, .. } => url.as_deref(),
        }
    }
}
