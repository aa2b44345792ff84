//! # Handlers del Servidor
//!
//! Cada handler es una función que recibe el Request y el storage de
//! archivos y retorna una Response. Ninguno falla: los errores se
//! convierten en códigos de estado.
//!
//! - **basic**: `/`, 404, `/echo/{str}`, `/user-agent`
//! - **files**: `/files/{name}` (GET y POST)

pub mod basic;
pub mod files;

pub use basic::*;
pub use files::*;

use crate::http::Request;

/// Extrae el recurso de un target de la forma `/{ruta}/{recurso}`
///
/// Solo acepta exactamente 3 segmentos: `["", ruta, recurso]`.
/// Cualquier otra cantidad es un routing miss.
pub(crate) fn resource(request: &Request) -> Option<&str> {
    match request.segments().as_slice() {
        [_, _, resource] => Some(*resource),
        _ => None,
    }
}
