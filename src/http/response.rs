//! # Construcción de Respuestas HTTP
//!
//! Este módulo proporciona una API para construir respuestas HTTP/1.1
//! y convertirlas a bytes (la mitad de "serialize" del wire codec).
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! No se agrega nada después del body.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use mini_http::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("abc");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.ends_with(b"\r\n\r\nabc"));
//! ```

use super::{HeaderMap, StatusCode};
use std::fmt;

/// Versión que el servidor pone en todas sus respuestas
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Primera línea de la respuesta: `VERSION CODE REASON`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub version: String,
    pub status: StatusCode,
}

impl StatusLine {
    pub fn code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn reason(&self) -> &'static str {
        self.status.reason_phrase()
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.version, self.status)
    }
}

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone)]
pub struct Response {
    status_line: StatusLine,

    /// Headers HTTP; un nombre repetido sobrescribe al anterior
    headers: HeaderMap,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta con el código de estado especificado
    ///
    /// Por defecto, la respuesta no tiene headers ni body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status_line: StatusLine {
                version: HTTP_VERSION.to_string(),
                status,
            },
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// Establece el cuerpo de la respuesta desde un string
    ///
    /// Ver [`Response::with_body_bytes`].
    pub fn with_body(self, body: &str) -> Self {
        self.with_body_bytes(body.as_bytes().to_vec())
    }

    /// Establece el cuerpo de la respuesta desde bytes
    ///
    /// Mantiene `Content-Length` sincronizado con el body: se agrega con la
    /// longitud exacta si el body no está vacío y se quita si lo está.
    /// Cualquier transformación del body (gzip) debe aplicarse antes.
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_body_bytes(vec![0x1f, 0x8b, 0x08]);
    /// assert_eq!(response.header("Content-Length"), Some("3"));
    ///
    /// let empty = Response::new(StatusCode::Ok).with_body("");
    /// assert_eq!(empty.header("Content-Length"), None);
    /// ```
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        if self.body.is_empty() {
            self.headers.remove("Content-Length");
        } else {
            self.headers
                .insert("Content-Length".to_string(), self.body.len().to_string());
        }
        self
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n` (orden no especificado)
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(64 + self.body.len());

        // 1. Status line
        result.extend_from_slice(self.status_line.to_string().as_bytes());
        result.extend_from_slice(b"\r\n");

        // 2. Headers
        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 4. Body (si existe)
        result.extend_from_slice(&self.body);

        result
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status_line.status
    }

    /// Obtiene una referencia a los headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
