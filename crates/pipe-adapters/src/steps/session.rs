//! Transporte en memoria.
//!
//! `MemorySession` responde peticiones GET desde una tabla de rutas y
//! completa siempre en una tarea del runtime de tokio recibido, nunca en el
//! hilo que invoca el step. Eso lo hace seguro para `Step::blocking` desde
//! cualquier hilo que no pertenezca a ese runtime.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use log::debug;
use pipe_core::{Completion, Step};
use tokio::runtime::Handle;

use crate::error::AdapterError;
use crate::models::HttpRequest;

#[derive(Debug, Clone)]
pub struct MemorySession {
    routes: Arc<DashMap<String, Vec<u8>>>,
    handle: Handle,
    latency: Duration,
}

impl MemorySession {
    pub fn new(handle: Handle) -> Self {
        Self { routes: Arc::new(DashMap::new()),
               handle,
               latency: Duration::ZERO }
    }

    /// Retardo simulado antes de cada respuesta.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn register(&self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.routes.insert(url.into(), body.into());
    }

    pub fn fetch(&self, request: HttpRequest, done: Completion<Vec<u8>, AdapterError>) {
        let routes = Arc::clone(&self.routes);
        let latency = self.latency;
        self.handle.spawn(async move {
                       if !latency.is_zero() {
                           tokio::time::sleep(latency).await;
                       }
                       let res = if request.method != "GET" {
                           Err(AdapterError::Transport(format!("unsupported method {}", request.method)))
                       } else {
                           routes.get(&request.url)
                                 .map(|body| body.value().clone())
                                 .ok_or_else(|| AdapterError::NotFound(request.url.clone()))
                       };
                       debug!("fetch {} {} -> ok={}", request.method, request.url, res.is_ok());
                       done(res)
                   });
    }

    pub fn fetch_step(&self) -> Step<HttpRequest, Vec<u8>, AdapterError> {
        let session = self.clone();
        Step::async_map(move |request: HttpRequest, done: Completion<Vec<u8>, AdapterError>| {
            session.fetch(request, done)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_multi_thread().worker_threads(1)
                                                   .enable_time()
                                                   .build()
                                                   .unwrap()
    }

    #[test]
    fn serves_registered_routes() {
        let rt = runtime();
        let session = MemorySession::new(rt.handle().clone()).with_latency(Duration::from_millis(2));
        session.register("http://a.test/x", b"hello".to_vec());
        let fetch = session.fetch_step().blocking();
        assert_eq!(fetch.run_sync(HttpRequest::get("http://a.test/x")), Some(Ok(b"hello".to_vec())));
    }

    #[test]
    fn unknown_route_and_method_fail() {
        let rt = runtime();
        let session = MemorySession::new(rt.handle().clone());
        let fetch = session.fetch_step().blocking();
        assert_eq!(fetch.run_sync(HttpRequest::get("http://a.test/missing")),
                   Some(Err(AdapterError::NotFound("http://a.test/missing".to_string()))));
        let mut post = HttpRequest::get("http://a.test/missing");
        post.method = "POST".to_string();
        assert!(matches!(fetch.run_sync(post), Some(Err(AdapterError::Transport(_)))));
    }
}
