//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! - `/`: 200 vacío
//! - not found: 404 vacío
//! - `/echo/{str}`: devuelve `{str}`, comprimido si el cliente acepta gzip
//! - `/user-agent`: devuelve el header `User-Agent`

use super::resource;
use crate::http::{encoding, Request, Response, StatusCode};
use crate::storage::FileStorage;
use tracing::{error, warn};

/// Handler para `/`
pub fn root_handler(_req: &Request, _storage: &dyn FileStorage) -> Response {
    Response::new(StatusCode::Ok)
}

/// Handler para cualquier ruta no registrada
pub fn not_found_handler(_req: &Request, _storage: &dyn FileStorage) -> Response {
    Response::new(StatusCode::NotFound)
}

/// Handler para `/echo/{str}`
///
/// Responde `{str}` como `text/plain`. Si `Accept-Encoding` lista un
/// encoding soportado, el body se comprime y se agrega `Content-Encoding`.
/// `Content-Length` siempre refleja el body final.
///
/// # Ejemplo de response
/// ```text
/// HTTP/1.1 200 OK\r\n
/// Content-Type: text/plain\r\n
/// Content-Length: 3\r\n
/// \r\n
/// abc
/// ```
pub fn echo_handler(req: &Request, _storage: &dyn FileStorage) -> Response {
    let value = match resource(req) {
        Some(v) => v,
        None => return Response::new(StatusCode::NotFound),
    };

    let accept_encoding = req.header("Accept-Encoding").unwrap_or("");
    let negotiated = match encoding::negotiate(accept_encoding, value.as_bytes().to_vec()) {
        Ok(n) => n,
        Err(e) => {
            error!(error = %e, "Fallo al comprimir el body de /echo");
            return Response::new(StatusCode::InternalServerError);
        }
    };

    let mut response = Response::new(StatusCode::Ok).with_header("Content-Type", "text/plain");
    if let Some(enc) = negotiated.encoding {
        response.add_header("Content-Encoding", enc.as_str());
    }

    response.with_body_bytes(negotiated.body)
}

/// Handler para `/user-agent`
///
/// Refleja el header `User-Agent`. A diferencia de `/echo`, aquí no se
/// negocia `Content-Encoding`.
pub fn user_agent_handler(req: &Request, _storage: &dyn FileStorage) -> Response {
    match req.header("User-Agent") {
        Some(agent) => Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body(agent),
        None => {
            warn!(path = req.target(), "Request sin header User-Agent");
            Response::new(StatusCode::BadRequest)
        }
    }
}
