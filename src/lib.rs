//! # Mini HTTP
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo construido directamente sobre sockets TCP.
//!
//! ## Arquitectura
//!
//! - `http`: Modelo de mensajes, parse/serialize y negociación de encoding
//! - `router`: Tabla ordenada de rutas → handlers
//! - `handlers`: Root, 404, echo, user-agent y archivos
//! - `storage`: Acceso al directorio de archivos
//! - `server`: Listener TCP y manejo de conexiones
//! - `config`, `error`, `logging`: Configuración, errores y logs
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use mini_http::config::Config;
//! use mini_http::server::Server;
//!
//! let mut server = Server::new(Config::default());
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
pub mod storage;
