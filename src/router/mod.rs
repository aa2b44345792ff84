//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el router que mapea targets HTTP a handlers.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! Las rutas se evalúan en el orden en que se registraron y gana la
//! primera que coincide (no hay "longest prefix"). Si ninguna coincide
//! se usa el handler de fallback (404 por defecto).

use crate::handlers;
use crate::http::{Request, Response};
use crate::storage::FileStorage;
use std::sync::Arc;

/// Tipo de función handler
///
/// Un handler recibe un Request y el storage de archivos, y retorna una Response
pub type Handler = fn(&Request, &dyn FileStorage) -> Response;

/// Predicado que decide si una ruta aplica a un target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatcher {
    /// El target debe ser exactamente este string
    Exact(&'static str),

    /// El target debe empezar con este string
    Prefix(&'static str),
}

impl RouteMatcher {
    pub fn matches(&self, target: &str) -> bool {
        match self {
            RouteMatcher::Exact(path) => target == *path,
            RouteMatcher::Prefix(prefix) => target.starts_with(prefix),
        }
    }
}

/// Router que mapea targets a handlers
pub struct Router {
    /// Tabla ordenada de (predicado, handler)
    routes: Vec<(RouteMatcher, Handler)>,

    /// Handler cuando ninguna ruta coincide
    fallback: Handler,

    storage: Arc<dyn FileStorage>,
}

impl Router {
    /// Crea un router vacío; todo request cae en el fallback (404)
    pub fn new(storage: Arc<dyn FileStorage>) -> Self {
        Self {
            routes: Vec::new(),
            fallback: handlers::not_found_handler,
            storage,
        }
    }

    /// Router con las rutas del servidor, en orden de prioridad:
    ///
    /// 1. `/` exacto → root
    /// 2. `/echo` → echo
    /// 3. `/user-agent` → user-agent
    /// 4. `/files` → files
    pub fn with_default_routes(storage: Arc<dyn FileStorage>) -> Self {
        let mut router = Self::new(storage);
        router.register(RouteMatcher::Exact("/"), handlers::root_handler);
        router.register(RouteMatcher::Prefix("/echo"), handlers::echo_handler);
        router.register(RouteMatcher::Prefix("/user-agent"), handlers::user_agent_handler);
        router.register(RouteMatcher::Prefix("/files"), handlers::files_handler);
        router
    }

    /// Registra una ruta al final de la tabla
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::router::{RouteMatcher, Router};
    /// use mini_http::http::{Request, Response, StatusCode};
    /// use mini_http::storage::{DirectoryStorage, FileStorage};
    /// use std::sync::Arc;
    ///
    /// fn teapot(_req: &Request, _storage: &dyn FileStorage) -> Response {
    ///     Response::new(StatusCode::Ok).with_body("tea")
    /// }
    ///
    /// let mut router = Router::new(Arc::new(DirectoryStorage::new("files")));
    /// router.register(RouteMatcher::Prefix("/tea"), teapot);
    ///
    /// let request = Request::parse(b"GET /teapot HTTP/1.1\r\n\r\n").unwrap();
    /// assert_eq!(router.route(&request).body(), b"tea");
    /// ```
    pub fn register(&mut self, matcher: RouteMatcher, handler: Handler) {
        self.routes.push((matcher, handler));
    }

    /// Selecciona el handler para un target (primer match gana)
    pub fn select(&self, target: &str) -> Handler {
        self.routes
            .iter()
            .find(|(matcher, _)| matcher.matches(target))
            .map(|(_, handler)| *handler)
            .unwrap_or(self.fallback)
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    pub fn route(&self, request: &Request) -> Response {
        let handler = self.select(request.target());
        handler(request, self.storage.as_ref())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
