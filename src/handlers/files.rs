//! # Handler de Archivos
//! src/handlers/files.rs
//!
//! `/files/{name}` lee o escribe archivos en el directorio de storage.
//!
//! - `GET`: 200 con el contenido, o 404 si la lectura falla por cualquier motivo
//! - `POST`: 201 si se escribió, 500 si no se pudo crear/escribir
//! - Otro método: 405

use super::resource;
use crate::http::{Method, Request, Response, StatusCode};
use crate::storage::FileStorage;
use tracing::{debug, error, warn};

/// Handler para `/files/{name}`
pub fn files_handler(req: &Request, storage: &dyn FileStorage) -> Response {
    let name = match resource(req) {
        Some(n) => n,
        None => {
            warn!(path = req.target(), "Ruta de archivo inválida");
            return Response::new(StatusCode::NotFound);
        }
    };

    match req.method() {
        Method::GET => read_file(name, storage),
        Method::POST => write_file(name, req.body(), storage),
        other => {
            debug!(method = other.as_str(), "Método no permitido en /files");
            Response::new(StatusCode::MethodNotAllowed)
        }
    }
}

fn read_file(name: &str, storage: &dyn FileStorage) -> Response {
    match storage.read(name) {
        Ok(contents) => Response::new(StatusCode::Ok)
            .with_header("Content-Type", "application/octet-stream")
            .with_body_bytes(contents),
        Err(e) => {
            warn!(file = name, error = %e, "Fallo al leer archivo");
            Response::new(StatusCode::NotFound)
        }
    }
}

fn write_file(name: &str, body: &[u8], storage: &dyn FileStorage) -> Response {
    match storage.write(name, trim_nul_padding(body)) {
        Ok(()) => Response::new(StatusCode::Created),
        Err(e) => {
            error!(file = name, error = %e, "Fallo al escribir archivo");
            Response::new(StatusCode::InternalServerError)
        }
    }
}

/// Quita los bytes NUL finales que deja el buffer de lectura de tamaño fijo
pub fn trim_nul_padding(body: &[u8]) -> &[u8] {
    let end = body.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &body[..end]
}
