use crate::data::ThreadOrPreview;

use super::DB;

impl DB {
    pub fn search_threads(&self, query: &str) -> Vec<&ThreadOrPreview> {
        self.threads.iter()
            .filter(|thread| Self::match_title_to_query(thread.title(), query))
            .collect()
    }

    pub fn filter_repository<'a>(threads: Vec<&'a ThreadOrPreview>, repository: &str) -> Vec<&'a ThreadOrPreview> {
        threads.into_iter()
            .filter(|thread| thread.repository().name == repository)
            .collect()
    }

    fn match_title_to_query(title: &str, query: &str) -> bool {
        title.to_lowercase().contains(query.trim().to_lowercase().as_str())
    }
}
