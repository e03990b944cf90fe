use std::io;
use actix_web::{web::{self, Data}, App, HttpServer, Responder, Result, middleware::Logger, http::{Method, StatusCode}, HttpResponse, Either};
use env_logger::Env;

use config::Config;
use db::DB;

use render::render_page;
use routes::*;

mod config;
mod data;
mod db;
mod render;
mod routes;

async fn default_handler(req: Method) -> Result<impl Responder> {
    match req {
        Method::GET => Ok(Either::Left(render_page(StatusCode::NOT_FOUND, "Not found", || NOT_FOUND_HTML.to_string()))),
        _ => Ok(Either::Right(HttpResponse::MethodNotAllowed().finish())),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::new().filter_or(config::ENV_LOG, "info"));
    let config = Config::from_env();
    let db = Data::new(DB::load(&config.store));
    let bind = config.bind.clone();
    let config = Data::new(config);
    log::info!("Listening on {}", bind);
    HttpServer::new(move || {
        App::new()
            .service(page_home)
            .service(page_threads)
            .service(thread_item)
            .service(css_layout)
            .app_data(db.clone())
            .app_data(config.clone())
            .wrap(Logger::default())
            .default_service(web::to(default_handler))
    })
    .bind(bind.as_str())?
    .run()
    .await
}
