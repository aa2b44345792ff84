//! # Negociación de Content-Encoding
//!
//! Decide si el body se comprime según el header `Accept-Encoding`
//! del cliente. Por ahora solo soportamos gzip.
//!
//! Debe ejecutarse antes de calcular `Content-Length`.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Write};

/// Encodings que el servidor sabe aplicar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
}

impl ContentEncoding {
    /// Busca un encoding soportado por su identificador
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "gzip" => Some(ContentEncoding::Gzip),
            _ => None,
        }
    }

    /// Valor para el header `Content-Encoding`
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Gzip => "gzip",
        }
    }

    /// Aplica la transformación al body
    pub fn encode(&self, body: &[u8]) -> io::Result<Vec<u8>> {
        match self {
            ContentEncoding::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(body)?;
                encoder.finish()
            }
        }
    }
}

/// Resultado de la negociación
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negotiated {
    pub body: Vec<u8>,

    /// `None` si no hubo match y el body quedó intacto
    pub encoding: Option<ContentEncoding>,
}

/// Elige el primer encoding soportado de la lista del cliente
///
/// La lista se separa por `,` y cada token se recorta. El orden de la
/// lista decide; los q-values no se interpretan.
pub fn select(accept_encoding: &str) -> Option<ContentEncoding> {
    accept_encoding
        .split(',')
        .map(str::trim)
        .find_map(ContentEncoding::from_token)
}

/// Negocia y transforma el body
///
/// # Ejemplo
/// ```
/// use mini_http::http::encoding::{negotiate, ContentEncoding};
///
/// let plain = negotiate("br, deflate", b"abc".to_vec()).unwrap();
/// assert_eq!(plain.encoding, None);
/// assert_eq!(plain.body, b"abc");
///
/// let gz = negotiate("br, gzip", b"abc".to_vec()).unwrap();
/// assert_eq!(gz.encoding, Some(ContentEncoding::Gzip));
/// ```
pub fn negotiate(accept_encoding: &str, body: Vec<u8>) -> io::Result<Negotiated> {
    match select(accept_encoding) {
        Some(encoding) => Ok(Negotiated {
            body: encoding.encode(&body)?,
            encoding: Some(encoding),
        }),
        None => Ok(Negotiated {
            body,
            encoding: None,
        }),
    }
}
