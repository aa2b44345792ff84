//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Este módulo implementa la mitad de "parse" del wire codec.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/x.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/8.4.0\r\n
//! \r\n
//! hello
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD TARGET VERSION`, separados por un espacio
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n\r\n` separa headers del body
//! 4. **Body**: Bytes crudos, se conservan tal cual (incluido el padding NUL
//!    del buffer de lectura)

use super::HeaderMap;
use memchr::memmem;
use std::fmt;

const CRLF: &[u8] = b"\r\n";
const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";
const HEADER_SEPARATOR: &str = ": ";

/// Métodos HTTP
///
/// Cualquier token es un método válido para el parser; los que no
/// conocemos se conservan en `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
    PATCH,
    OPTIONS,
    /// Método no reconocido, guardado tal cual llegó
    Other(String),
}

impl Method {
    /// Parsea un método HTTP desde un string (nunca falla)
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "PATCH" => Method::PATCH,
            "OPTIONS" => Method::OPTIONS,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::PATCH => "PATCH",
            Method::OPTIONS => "OPTIONS",
            Method::Other(s) => s,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primera línea del request: `METHOD TARGET VERSION`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,

    /// Path en origin-form (ej: "/echo/abc")
    pub target: String,

    pub version: String,
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.method, self.target, self.version)
    }
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    request_line: RequestLine,

    /// Headers HTTP, sensibles a mayúsculas (ej: {"User-Agent": "curl/8.4.0"})
    headers: HeaderMap,

    /// Body crudo, tal cual quedó en el buffer
    body: Vec<u8>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Buffer vacío
    #[error("Empty request")]
    EmptyRequest,

    /// No hay `\r\n` después de la request line
    #[error("Request line is not terminated by CRLF")]
    MissingRequestLineTerminator,

    /// La request line tiene menos de 3 tokens
    #[error("Invalid request line: {0:?}")]
    InvalidRequestLine(String),

    /// No hay `\r\n\r\n` entre headers y body
    #[error("Header block is not terminated by an empty line")]
    MissingHeaderTerminator,
}

impl Request {
    /// Construye un request a partir de sus partes
    pub fn new(request_line: RequestLine, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            request_line,
            headers,
            body,
        }
    }

    /// Parsea un request desde bytes
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request parseado exitosamente
    /// * `Err(ParseError)` - Falta un separador o la request line es inválida
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use mini_http::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nUser-Agent: test\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.target(), "/echo/abc");
    /// assert_eq!(request.header("User-Agent"), Some("test"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        if buffer.is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // 1. Request line hasta el primer CRLF
        let line_end = memmem::find(buffer, CRLF).ok_or(ParseError::MissingRequestLineTerminator)?;
        let request_line = Self::parse_request_line(&buffer[..line_end])?;

        // 2. Headers hasta el primer CRLF CRLF. La búsqueda empieza en el CRLF
        //    de la request line para aceptar requests sin headers.
        let rest = &buffer[line_end..];
        let head_end = memmem::find(rest, HEADER_TERMINATOR).ok_or(ParseError::MissingHeaderTerminator)?;
        let headers = Self::parse_headers(rest.get(CRLF.len()..head_end).unwrap_or_default());

        // 3. Body: todo lo que sigue, sin tocar
        let body = rest[head_end + HEADER_TERMINATOR.len()..].to_vec();

        Ok(Request {
            request_line,
            headers,
            body,
        })
    }

    /// Parsea la request line
    ///
    /// Formato: `GET /path HTTP/1.1`, separado por espacios simples.
    /// Tokens extra después de la versión se ignoran. Bytes que no son
    /// UTF-8 se reemplazan por U+FFFD.
    fn parse_request_line(line: &[u8]) -> Result<RequestLine, ParseError> {
        let line = String::from_utf8_lossy(line);
        let parts: Vec<&str> = line.split(' ').collect();

        if parts.len() < 3 {
            return Err(ParseError::InvalidRequestLine(line.to_string()));
        }

        Ok(RequestLine {
            method: Method::from_token(parts[0]),
            target: parts[1].to_string(),
            version: parts[2].to_string(),
        })
    }

    /// Parsea el bloque de headers
    ///
    /// Cada línea se corta en el primer `": "`. Las líneas sin separador
    /// se ignoran y un nombre repetido sobrescribe al anterior. El contenido
    /// no se valida: bytes que no son UTF-8 se reemplazan por U+FFFD.
    fn parse_headers(block: &[u8]) -> HeaderMap {
        let block = String::from_utf8_lossy(block);
        let mut headers = HeaderMap::new();

        for line in block.split("\r\n") {
            if let Some((name, value)) = line.split_once(HEADER_SEPARATOR) {
                headers.insert(name.to_string(), value.to_string());
            }
        }

        headers
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn request_line(&self) -> &RequestLine {
        &self.request_line
    }

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &Method {
        &self.request_line.method
    }

    /// Obtiene el target del request (ej: "/files/x.txt")
    pub fn target(&self) -> &str {
        &self.request_line.target
    }

    /// Segmentos del target separados por `/`
    ///
    /// "/echo/abc" → ["", "echo", "abc"]
    pub fn segments(&self) -> Vec<&str> {
        self.request_line.target.split('/').collect()
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.request_line.version
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Obtiene un header específico (comparación exacta del nombre)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
