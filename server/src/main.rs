use actix_files::Files;
use actix_web::{middleware, App, HttpServer};
use clap::Parser;
use env_logger::Env;

use whiteboard_server::config::Config;
use whiteboard_server::handlers::root;
use whiteboard_server::server::spawn_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let srv_tx = spawn_server();
    let heartbeat = config.heartbeat();
    let static_dir = config.static_dir.clone();

    if let Some(dir) = &static_dir {
        log::info!("Serving static files from {}", dir.display());
    }
    log::info!("Listening on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        let app = App::new()
            .wrap(middleware::Logger::default())
            .data(srv_tx.clone())
            .data(heartbeat)
            .configure(root);
        match &static_dir {
            Some(dir) => app.service(Files::new("/", dir).index_file("index.html")),
            None => app,
        }
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
