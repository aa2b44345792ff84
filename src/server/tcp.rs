//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones simultáneas
//! usando threads. Cada conexión se procesa en su propio thread:
//!
//! 1. Una sola lectura a un buffer de tamaño fijo (sin timeout)
//! 2. Parse + routing
//! 3. Una sola escritura de la respuesta
//! 4. Cierre de la conexión (sin keep-alive)
//!
//! Un request que no se puede parsear recibe `400 Invalid Headers`.

use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::http::{Request, Response, StatusCode};
use crate::router::Router;
use crate::storage::DirectoryStorage;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Servidor HTTP concurrente, un thread por conexión
pub struct Server {
    config: Config,
    router: Arc<Router>,
    listener: Option<TcpListener>,
}

impl Server {
    /// Crea el servidor con las rutas por defecto y storage en `config.directory`
    pub fn new(config: Config) -> Self {
        let storage = Arc::new(DirectoryStorage::new(config.directory.clone()));
        debug!(directory = %storage.root().display(), "Storage de archivos");
        let router = Router::with_default_routes(storage);
        Self::with_router(config, router)
    }

    pub fn with_router(config: Config, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
            listener: None,
        }
    }

    /// Abre el socket de escucha y retorna la dirección real
    ///
    /// Con puerto 0 el sistema operativo asigna uno libre.
    pub fn bind(&mut self) -> Result<SocketAddr> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address).map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;
        let local = listener.local_addr()?;

        info!(address = %local, "Servidor escuchando");
        self.listener = Some(listener);
        Ok(local)
    }

    /// Dirección en la que está escuchando, si ya se hizo bind
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Acepta conexiones para siempre
    ///
    /// Un error de `accept` se registra y el loop continúa.
    pub fn run(&mut self) -> Result<()> {
        self.config.validate()?;
        if self.listener.is_none() {
            self.bind()?;
        }
        let listener = match self.listener.as_ref() {
            Some(l) => l,
            None => return Err(ServerError::InvalidConfig("listener not bound".to_string())),
        };

        info!(address = ?self.local_addr(), "Modo concurrente: un thread por conexión");

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let buffer_size = self.config.read_buffer_size;

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, &router, buffer_size) {
                            warn!(error = %e, "Error en la conexión");
                        }
                    });
                }
                Err(e) => {
                    error!(error = %e, "Error al aceptar conexión");
                }
            }
        }

        Ok(())
    }

    /// Acepta y atiende una sola conexión en el thread actual
    pub fn accept_one(&self) -> Result<()> {
        let listener = self
            .listener
            .as_ref()
            .ok_or_else(|| ServerError::InvalidConfig("listener not bound".to_string()))?;

        let (stream, _) = listener.accept()?;
        Self::handle_connection(stream, &self.router, self.config.read_buffer_size)?;
        Ok(())
    }

    /// Atiende una conexión: una lectura, una respuesta, cierre
    fn handle_connection(mut stream: TcpStream, router: &Router, buffer_size: usize) -> io::Result<()> {
        let start = Instant::now();
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        debug!(peer = %peer, "Nueva conexión");

        let mut buffer = vec![0u8; buffer_size];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            debug!(peer = %peer, "Conexión cerrada sin datos");
            return Ok(());
        }

        debug!(peer = %peer, bytes = bytes_read, "Request leído");

        // Se parsea el buffer completo, padding incluido
        let response = Self::process(&buffer, router);

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        Self::log_response(&peer, response.status(), start.elapsed().as_secs_f64() * 1000.0);

        Ok(())
    }

    /// Registra la respuesta con un nivel según la clase del status
    fn log_response(peer: &str, status: StatusCode, latency_ms: f64) {
        if status.is_success() {
            info!(peer, status = %status, latency_ms, "Respuesta enviada");
        } else if status.is_client_error() {
            warn!(peer, status = %status, latency_ms, "Respuesta enviada");
        } else if status.is_server_error() {
            error!(peer, status = %status, latency_ms, "Respuesta enviada");
        } else {
            debug!(peer, status = %status, latency_ms, "Respuesta enviada");
        }
    }

    /// Parse + routing de un buffer crudo
    ///
    /// Un error de parse nunca llega a los handlers: se responde 400 sin body.
    pub fn process(buffer: &[u8], router: &Router) -> Response {
        match Request::parse(buffer) {
            Ok(request) => {
                info!(request = %request.request_line(), "Request");
                router.route(&request)
            }
            Err(e) => {
                warn!(error = %e, "Request inválido");
                Response::new(StatusCode::BadRequest)
            }
        }
    }
}
