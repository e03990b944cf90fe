mod page;
mod resources;

pub use page::*;
pub use resources::*;
