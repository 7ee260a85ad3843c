use actix_web::{web, HttpRequest, HttpResponse};
use common::config::ClientConfig;
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/config.json", web::get().to(client_config))
        .default_service(web::route().to(serve_embedded));
}

async fn client_config(config: web::Data<ClientConfig>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}

/// Serves a file of the embedded bundle. Unknown paths get `index.html` so
/// the single-page app can handle them.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    serve_from(&STATIC_DIR, req.path())
}

fn serve_from(dir: &Dir<'_>, path: &str) -> HttpResponse {
    let path = path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => {
                log::warn!("no embedded file for /{file_path}");
                HttpResponse::NotFound().body("Not Found")
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::test::{call_and_read_body_json, call_service, init_service, TestRequest};
    use actix_web::App;
    use include_dir::{DirEntry, File};

    static BUNDLE: Dir = Dir::new(
        "",
        &[
            DirEntry::File(File::new("index.html", b"<html>app</html>")),
            DirEntry::File(File::new("app.js", b"run()")),
        ],
    );
    static EMPTY: Dir = Dir::new("", &[]);

    #[actix_web::test]
    async fn config_json_exposes_client_settings() {
        let config = ClientConfig {
            api_base_url: "https://api.immoconnect.ma".into(),
            country_id: 3,
        };
        let app = init_service(
            App::new()
                .app_data(web::Data::new(config))
                .configure(configure),
        )
        .await;

        let req = TestRequest::get().uri("/config.json").to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            serde_json::json!({"apiBaseUrl": "https://api.immoconnect.ma", "countryId": 3})
        );
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let app = init_service(
            App::new()
                .app_data(web::Data::new(ClientConfig::default()))
                .configure(configure),
        )
        .await;

        let req = TestRequest::get().uri("/clients/42").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn serves_files_with_their_mime_type() {
        let resp = serve_from(&BUNDLE, "/app.js");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .contains("javascript"));

        let resp = serve_from(&BUNDLE, "/");
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
    }

    #[test]
    fn missing_index_is_not_found() {
        assert_eq!(serve_from(&EMPTY, "/anything").status(), StatusCode::NOT_FOUND);
    }
}
