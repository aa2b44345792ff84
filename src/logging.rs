//! # Logging
//!
//! Inicializa `tracing` con un filtro por nivel. `RUST_LOG` tiene prioridad
//! sobre el nivel de la configuración.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Instala el subscriber global
///
/// Si ya hay uno instalado (por ejemplo en tests) no hace nada.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
