//! # Módulo HTTP
//!
//! Modelo de mensajes y wire codec del servidor:
//!
//! - Parsing de requests (`Request::parse`)
//! - Serialización de responses (`Response::to_bytes`)
//! - Códigos de estado
//! - Negociación de `Content-Encoding`
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```

use std::collections::HashMap;

pub mod encoding;  // Negociación de Content-Encoding
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

/// Headers: nombre → valor
///
/// Sin normalización de mayúsculas; un nombre repetido sobrescribe al anterior.
pub type HeaderMap = HashMap<String, String>;

// Re-exportamos los tipos principales para facilitar su uso
pub use encoding::{negotiate, ContentEncoding};
pub use request::{Method, ParseError, Request, RequestLine};
pub use response::{Response, StatusLine};
pub use status::StatusCode;
