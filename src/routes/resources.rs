use std::io::Result;
use actix_files::NamedFile;
use actix_web::{get, web::Data};

use crate::config::Config;

#[get("/layout.css")]
pub async fn css_layout(config: Data<Config>) -> Result<NamedFile> {
    NamedFile::open(config.assets.join("layout.css"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use actix_web::{test, App, http::{StatusCode, header::CONTENT_TYPE}};

    use super::*;

    async fn get_css(assets: PathBuf) -> (StatusCode, Option<String>) {
        let config = Config { bind: "127.0.0.1:0".to_string(), store: PathBuf::from("store"), assets };
        let app = test::init_service(App::new().app_data(Data::new(config)).service(css_layout)).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/layout.css").to_request()).await;
        let content_type = res.headers().get(CONTENT_TYPE)
            .and_then(|x| x.to_str().ok())
            .map(|x| x.to_string());
        (res.status(), content_type)
    }

    #[actix_web::test]
    async fn stylesheet_served_from_assets_dir() {
        let (status, content_type) = get_css(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/css"));
    }

    #[actix_web::test]
    async fn missing_stylesheet_is_not_found() {
        let (status, _) = get_css(PathBuf::from("/nonexistent/thread-list-assets")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
