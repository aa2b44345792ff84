//! # Errores del Servidor
//!
//! Errores que terminan el arranque del servidor. Los errores de una
//! conexión individual se registran y no salen de su thread.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No se pudo abrir el socket de escucha
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    /// Configuración inválida
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
