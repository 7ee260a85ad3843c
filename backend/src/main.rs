mod config;
mod routes;

use std::thread;
use std::time::Duration;

use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use crate::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|e| {
        error!("invalid configuration: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("could not open browser: {e}");
            }
        });
    }

    info!("Server running at {url} (API: {})", config.api_base_url);

    let client_config = web::Data::new(config.client_config());
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(client_config.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
