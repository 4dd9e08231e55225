use crate::app::App;
use crate::config::DirectoryConfig;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;
use tracing::{error, info, warn};

mod app;
mod config;
mod debounce;
mod domain;
mod errors;
mod loader;
mod responses;
mod router;
mod session;
mod surface;
mod templates;
mod view_model;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "biz_directory=info".into()),
        )
        .init();

    // 1️⃣ Configuration
    let config = match DirectoryConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "configuration failed");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load both datasets once; every request shares the result
    let app = match App::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "data source setup failed");
            std::process::exit(1);
        }
    };
    if !app.is_loaded() {
        warn!("serving the directory without data");
    }

    // 3️⃣ Start the server
    let addr: SocketAddr = match config.server.addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(addr = %config.server.addr, error = %e, "invalid listen address");
            std::process::exit(1);
        }
    };
    info!(%addr, "starting server");

    let server = Server::bind(&addr).max_workers(config.server.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
