//! Pipeline de ejemplo: URL -> petición -> bytes -> JSON -> `Page<Person>`.

use pipe_core::Source;
use serde_json::Value;

use crate::error::AdapterError;
use crate::models::{HttpRequest, Page, Person};
use crate::steps::logging::{log_bytes, log_value};
use crate::steps::{parser, request, response, session::MemorySession, swapi};

/// Emitter asíncrono de la primera página de personas. Registra la petición
/// y el JSON recibido con `tap`.
pub fn people_pipeline(session: &MemorySession, base_url: &str) -> Source<Page<Person>, AdapterError> {
    swapi::people(base_url).then(request::request_step())
                           .tap(log_value::<HttpRequest>)
                           .then(session.fetch_step())
                           .tap(log_bytes)
                           .then(parser::parse_step())
                           .tap(log_value::<Value>)
                           .then(response::decode_step::<Person>())
}

/// Igual que `people_pipeline`, pero si la ruta principal falla reintenta
/// una vez contra `mirror_url`.
pub fn people_pipeline_with_mirror(session: &MemorySession,
                                   base_url: &str,
                                   mirror_url: &str)
                                   -> Source<Page<Person>, AdapterError> {
    people_pipeline(session, base_url).or_else(people_pipeline(session, mirror_url))
}
