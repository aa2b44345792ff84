//! # Mini HTTP - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor. La configuración viene de CLI o
//! variables de entorno.

use anyhow::Context;
use mini_http::config::Config;
use mini_http::logging;
use mini_http::server::Server;

fn main() -> anyhow::Result<()> {
    let config = Config::new();
    logging::init(&config.log_level);

    config.validate().context("configuración inválida")?;
    config.log_summary();

    // Iniciar el servidor (esto bloqueará el thread)
    let mut server = Server::new(config);
    server.run().context("error fatal del servidor")?;

    Ok(())
}
