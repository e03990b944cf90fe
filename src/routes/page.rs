use actix_web::{get, HttpResponse, http::{StatusCode, header::LOCATION}, web::{Data, Path, Query}};
use chrono::Utc;
use html_escape::encode_double_quoted_attribute;
use serde::Deserialize;

use crate::{
    data::ThreadID,
    db::DB,
    render::{fill_template, render_fragment, render_page, render_thread_list, render_thread_list_item, ThreadListItemContext},
};

const THREADS_HTML: &str = include_str!("../../assets/page/threads.html");
pub(crate) const NOT_FOUND_HTML: &str = include_str!("../../assets/page/404.html");

#[derive(Debug, Default, Deserialize)]
pub struct ItemQuery {
    #[serde(default)]
    show_repository: bool,
    #[serde(default)]
    item_checkboxes: bool,
}

impl From<&ItemQuery> for ThreadListItemContext {
    fn from(display: &ItemQuery) -> Self {
        ThreadListItemContext {
            show_repository: display.show_repository,
            item_checkboxes: display.item_checkboxes,
        }
    }
}

impl From<&ListQuery> for ThreadListItemContext {
    fn from(query: &ListQuery) -> Self {
        ThreadListItemContext {
            show_repository: query.show_repository,
            item_checkboxes: query.item_checkboxes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    q: Option<String>,
    repository: Option<String>,
    #[serde(default)]
    show_repository: bool,
    #[serde(default)]
    item_checkboxes: bool,
}

#[get("/")]
pub async fn page_home() -> HttpResponse {
    HttpResponse::build(StatusCode::SEE_OTHER)
        .append_header((LOCATION, "/threads"))
        .finish()
}

#[get("/threads")]
pub async fn page_threads(db: Data<DB>, query: Query<ListQuery>) -> HttpResponse {
    let query = query.into_inner();
    let context = ThreadListItemContext::from(&query);
    let search = query.q.unwrap_or_default();
    let mut threads = db.search_threads(&search);
    if let Some(repository) = query.repository.as_deref().filter(|x| !x.is_empty()) {
        threads = DB::filter_repository(threads, repository);
    }
    log::debug!("Listing {} threads for query {:?}", threads.len(), search);
    render_page(StatusCode::OK, "Threads", || {
        fill_template(THREADS_HTML, &[
            ("query", encode_double_quoted_attribute(&search).as_ref()),
            ("threads", render_thread_list(&threads, &context, &Utc::now()).as_str()),
        ])
    })
}

#[get("/threads/{thread_id}/item")]
pub async fn thread_item(db: Data<DB>, thread_id: Path<String>, query: Query<ItemQuery>) -> HttpResponse {
    let thread_id = ThreadID(thread_id.into_inner());
    match db.get_thread(&thread_id) {
        Some(thread) => {
            let context = ThreadListItemContext::from(&query.into_inner());
            render_fragment(render_thread_list_item(thread, &context, "", &Utc::now()))
        },
        None => render_page(StatusCode::NOT_FOUND, "Not found", || NOT_FOUND_HTML.to_string()),
    }
}
