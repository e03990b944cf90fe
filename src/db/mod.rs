use std::path::Path;

use crate::data::{ThreadID, ThreadOrPreview};

pub mod search;
pub mod store;

#[derive(Default)]
pub struct DB {
    threads: Vec<ThreadOrPreview>,
}

impl DB {
    pub fn load(root: &Path) -> Self {
        let threads = store::load_dir(&root.join(store::THREADS_DIR), store::parse_thread);
        let previews = store::load_dir(&root.join(store::PREVIEWS_DIR), store::parse_preview);
        log::info!("Loaded {} threads and {} previews from {}", threads.len(), previews.len(), root.display());
        Self::from_threads(
            previews.into_iter().map(ThreadOrPreview::from)
                .chain(threads.into_iter().map(ThreadOrPreview::from))
                .collect()
        )
    }

    pub fn from_threads(mut threads: Vec<ThreadOrPreview>) -> Self {
        sort_threads(&mut threads);
        Self { threads }
    }

    pub fn get_thread(&self, id: &ThreadID) -> Option<&ThreadOrPreview> {
        self.threads.iter().find(|x| x.id() == Some(id))
    }

    /// Previews first, then newest first.
    pub fn list(&self) -> Vec<&ThreadOrPreview> {
        self.threads.iter().collect()
    }
}

fn sort_threads(threads: &mut [ThreadOrPreview]) {
    threads.sort_by(|a, b| match (a.as_thread(), b.as_thread()) {
        (None, None) => a.title().cmp(b.title()),
        (None, Some(_)) => std::cmp::Ordering::Less,
        (Some(_), None) => std::cmp::Ordering::Greater,
        (Some(a), Some(b)) => b.created.cmp(&a.created).then(a.number.cmp(&b.number)),
    });
}
