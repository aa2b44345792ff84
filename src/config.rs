//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración explícita del servidor: dirección de escucha, directorio
//! de archivos y tamaño del buffer de lectura. Soporta argumentos CLI y
//! variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./mini_http --port 4221 --directory /tmp/files --read-buffer 1024
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=4221 FILES_DIR=/tmp/files LOG_LEVEL=debug ./mini_http
//! ```

use crate::error::{Result, ServerError};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Configuración del servidor HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "mini_http")]
#[command(about = "Servidor HTTP/1.1 minimo sobre sockets TCP crudos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio donde se guardan/leen archivos de /files
    #[arg(long, default_value = "files", env = "FILES_DIR")]
    pub directory: PathBuf,

    /// Bytes que se leen por conexión; lo que exceda se trunca
    #[arg(long = "read-buffer", default_value = "1024", env = "READ_BUFFER_SIZE")]
    pub read_buffer_size: usize,

    /// Nivel de log (trace, debug, info, warn, error)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use mini_http::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ServerError::InvalidConfig("host must not be empty".to_string()));
        }
        if self.directory.as_os_str().is_empty() {
            return Err(ServerError::InvalidConfig("directory must not be empty".to_string()));
        }
        if self.read_buffer_size == 0 {
            return Err(ServerError::InvalidConfig("read buffer size must be >= 1".to_string()));
        }

        Ok(())
    }

    /// Registra un resumen de la configuración
    pub fn log_summary(&self) {
        info!(
            address = %self.address(),
            directory = %self.directory.display(),
            read_buffer = self.read_buffer_size,
            log_level = %self.log_level,
            "Configuración cargada"
        );
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 4221,
            host: "0.0.0.0".to_string(),
            directory: PathBuf::from("files"),
            read_buffer_size: 1024,
            log_level: "info".to_string(),
        }
    }
}
