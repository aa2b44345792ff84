//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Cada test levanta un servidor real en un puerto efímero, con su propio
//! directorio temporal de archivos, y habla con él por TCP.

use flate2::read::GzDecoder;
use mini_http::config::Config;
use mini_http::server::Server;
use std::collections::HashMap;
use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

/// Response parseada del lado del cliente
struct RawResponse {
    status_line: String,
    header_lines: Vec<String>,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl RawResponse {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    fn count(&self, name: &str) -> usize {
        let prefix = format!("{}: ", name);
        self.header_lines.iter().filter(|l| l.starts_with(&prefix)).count()
    }
}

/// Helper: levanta el servidor y retorna su dirección
fn start_server(dir: &TempDir) -> SocketAddr {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        directory: dir.path().to_path_buf(),
        ..Config::default()
    };

    let mut server = Server::new(config);
    let addr = server.bind().expect("bind");

    thread::spawn(move || {
        server.run().expect("server run");
    });

    addr
}

/// Helper: envía bytes crudos y retorna la response completa
fn send_raw(addr: SocketAddr, raw: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.set_write_timeout(Some(Duration::from_secs(5))).unwrap();

    stream.write_all(raw).unwrap();
    stream.flush().unwrap();
    stream.shutdown(Shutdown::Write).unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();
    response
}

/// Helper: como `send_raw`, para requests más largos que el buffer del servidor
///
/// El servidor cierra con bytes sin leer, así que el kernel puede responder
/// con RST después de la respuesta. Se conserva lo recibido hasta ese punto.
fn send_oversized(addr: SocketAddr, raw: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();

    stream.write_all(raw).unwrap();
    let _ = stream.shutdown(Shutdown::Write);

    let mut response = Vec::new();
    let mut chunk = [0u8; 512];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => response.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::ConnectionReset && !response.is_empty() => break,
            Err(e) => panic!("read: {}", e),
        }
    }
    response
}

/// Helper: separa status line, headers y body
fn parse_response(bytes: &[u8]) -> RawResponse {
    let split = bytes
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response sin separador de headers");

    let head = String::from_utf8(bytes[..split].to_vec()).unwrap();
    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap().to_string();
    let header_lines: Vec<String> = lines.map(str::to_string).collect();

    let headers = header_lines
        .iter()
        .filter_map(|l| l.split_once(": "))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    RawResponse {
        status_line,
        header_lines,
        headers,
        body: bytes[split + 4..].to_vec(),
    }
}

fn request(addr: SocketAddr, raw: &str) -> RawResponse {
    parse_response(&send_raw(addr, raw.as_bytes()))
}

/// El header Content-Length aparece una vez si hay body y ninguna si no
fn assert_content_length_invariant(response: &RawResponse) {
    if response.body.is_empty() {
        assert_eq!(response.count("Content-Length"), 0);
    } else {
        assert_eq!(response.count("Content-Length"), 1);
        assert_eq!(response.header("Content-Length"), Some(response.body.len().to_string().as_str()));
    }
}

#[test]
fn test_root() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let bytes = send_raw(addr, b"GET / HTTP/1.1\r\nHost: localhost:4221\r\nX-Anything: 1\r\n\r\n");
    assert_eq!(bytes, b"HTTP/1.1 200 OK\r\n\r\n");
}

#[test]
fn test_root_without_headers() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let response = request(addr, "GET / HTTP/1.1\r\n\r\n");
    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
}

#[test]
fn test_not_found() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let bytes = send_raw(addr, b"GET /nope HTTP/1.1\r\nHost: localhost\r\n\r\n");
    assert_eq!(bytes, b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[test]
fn test_echo_plain() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let response = request(addr, "GET /echo/abc HTTP/1.1\r\nHost: localhost\r\n\r\n");

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.header("Content-Length"), Some("3"));
    assert_eq!(response.header("Content-Encoding"), None);
    assert_eq!(response.body, b"abc");
    assert_content_length_invariant(&response);
}

#[test]
fn test_echo_gzip() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let response = request(
        addr,
        "GET /echo/abc HTTP/1.1\r\nHost: localhost\r\nAccept-Encoding: encoding-1, gzip, encoding-2\r\n\r\n",
    );

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Encoding"), Some("gzip"));
    assert_content_length_invariant(&response);

    let mut decoded = String::new();
    GzDecoder::new(&response.body[..]).read_to_string(&mut decoded).unwrap();
    assert_eq!(decoded, "abc");
}

#[test]
fn test_echo_wrong_segments() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let response = request(addr, "GET /echo/a/b HTTP/1.1\r\nHost: localhost\r\n\r\n");
    assert_eq!(response.status_line, "HTTP/1.1 404 Not Found");
    assert!(response.body.is_empty());
}

#[test]
fn test_user_agent() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let response = request(addr, "GET /user-agent HTTP/1.1\r\nHost: localhost\r\nUser-Agent: test-client/1.0\r\n\r\n");

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.body, b"test-client/1.0");
    assert_eq!(response.header("Content-Length"), Some("15"));
    assert_content_length_invariant(&response);
}

#[test]
fn test_user_agent_missing() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let response = request(addr, "GET /user-agent HTTP/1.1\r\nHost: localhost\r\n\r\n");

    assert_eq!(response.status_line, "HTTP/1.1 400 Invalid Headers");
    assert!(response.body.is_empty());
    assert_content_length_invariant(&response);
}

#[test]
fn test_files_post_then_get() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let created = request(addr, "POST /files/x.txt HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello");
    assert_eq!(created.status_line, "HTTP/1.1 201 Created");
    assert!(created.header_lines.is_empty());
    assert!(created.body.is_empty());

    // El padding NUL del buffer no llega al archivo
    assert_eq!(std::fs::read(dir.path().join("x.txt")).unwrap(), b"hello");

    let fetched = request(addr, "GET /files/x.txt HTTP/1.1\r\nHost: localhost\r\n\r\n");
    assert_eq!(fetched.status_line, "HTTP/1.1 200 OK");
    assert_eq!(fetched.header("Content-Type"), Some("application/octet-stream"));
    assert_eq!(fetched.header("Content-Length"), Some("5"));
    assert_eq!(fetched.body, b"hello");
}

#[test]
fn test_files_missing() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let response = request(addr, "GET /files/missing.txt HTTP/1.1\r\nHost: localhost\r\n\r\n");

    assert_eq!(response.status_line, "HTTP/1.1 404 Not Found");
    assert!(response.body.is_empty());
}

#[test]
fn test_files_method_not_allowed() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let response = request(addr, "DELETE /files/x.txt HTTP/1.1\r\nHost: localhost\r\n\r\n");

    assert_eq!(response.status_line, "HTTP/1.1 405 Method Not Allowed");
    assert!(response.body.is_empty());
}

#[test]
fn test_files_post_into_missing_directory() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let response = request(addr, "POST /files/nested/x.txt HTTP/1.1\r\nHost: localhost\r\n\r\nhi");
    // Cuatro segmentos: routing miss, no error de escritura
    assert_eq!(response.status_line, "HTTP/1.1 404 Not Found");
}

#[test]
fn test_root_with_non_utf8_header() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let bytes = send_raw(addr, b"GET / HTTP/1.1\r\nHost: localhost\r\nX-Name: caf\xe9\r\n\r\n");
    assert_eq!(bytes, b"HTTP/1.1 200 OK\r\n\r\n");
}

#[test]
fn test_files_post_larger_than_read_buffer_is_truncated() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let head = b"POST /files/big HTTP/1.1\r\nHost: localhost\r\nContent-Length: 2000\r\n\r\n";
    let mut raw = head.to_vec();
    raw.extend(std::iter::repeat(b'a').take(2000));

    let response = parse_response(&send_oversized(addr, &raw));
    assert_eq!(response.status_line, "HTTP/1.1 201 Created");

    // Una sola lectura de 1024 bytes: el resto del body se pierde
    let written = std::fs::read(dir.path().join("big")).unwrap();
    assert_eq!(written.len(), Config::default().read_buffer_size - head.len());
    assert!(written.iter().all(|&b| b == b'a'));
}

#[test]
fn test_malformed_request_is_400() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let bytes = send_raw(addr, b"GET /\r\n\r\n");
    assert_eq!(bytes, b"HTTP/1.1 400 Invalid Headers\r\n\r\n");

    let bytes = send_raw(addr, b"GET / HTTP/1.1\r\nHost: localhost\r\n");
    assert_eq!(bytes, b"HTTP/1.1 400 Invalid Headers\r\n\r\n");
}

#[test]
fn test_concurrent_connections() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(&dir);

    let clients: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let raw = format!("GET /echo/client{} HTTP/1.1\r\nHost: localhost\r\n\r\n", i);
                let response = parse_response(&send_raw(addr, raw.as_bytes()));
                assert_eq!(response.body, format!("client{}", i).into_bytes());
            })
        })
        .collect();

    for client in clients {
        client.join().unwrap();
    }
}
