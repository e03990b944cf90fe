mod actor;
mod label;
mod repository;
mod thread;

pub use actor::*;
pub use label::*;
pub use repository::*;
pub use thread::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThreadID(pub String);
