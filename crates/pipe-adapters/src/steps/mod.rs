//! Steps de demostración, uno por kind que necesita el pipeline de ejemplo:
//! - `swapi::people`: Emitter con la URL del recurso.
//! - `request::request_step`: Map URL -> `HttpRequest`.
//! - `session::MemorySession::fetch_step`: AsyncMap `HttpRequest` -> bytes.
//! - `parser::parse_step`: ResultMap bytes -> JSON.
//! - `response::decode_step`: ResultMap JSON -> `Page<T>`.
//! - `logging`: observadores para `tap`.

pub mod logging;
pub mod parser;
pub mod request;
pub mod response;
pub mod session;
pub mod swapi;
