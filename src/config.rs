use std::{env, path::PathBuf};

pub const ENV_BIND: &str = "THREAD_LIST_BIND";
pub const ENV_STORE: &str = "THREAD_LIST_STORE";
pub const ENV_ASSETS: &str = "THREAD_LIST_ASSETS";
pub const ENV_LOG: &str = "THREAD_LIST_LOG";

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_STORE: &str = "store";
const DEFAULT_ASSETS: &str = "assets";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: String,
    pub store: PathBuf,
    /// Static files served as-is, such as the stylesheet.
    pub assets: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self where F: Fn(&str) -> Option<String> {
        let non_empty = |key: &str| lookup(key).filter(|x: &String| !x.trim().is_empty());
        Self {
            bind: non_empty(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string()),
            store: non_empty(ENV_STORE).map_or_else(|| PathBuf::from(DEFAULT_STORE), PathBuf::from),
            assets: non_empty(ENV_ASSETS).map_or_else(|| PathBuf::from(DEFAULT_ASSETS), PathBuf::from),
        }
    }
}
