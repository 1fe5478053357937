use pipe_core::Source;

use crate::error::AdapterError;

pub fn people_url(base: &str) -> String {
    format!("{}/people/", base.trim_end_matches('/'))
}

/// Emitter que produce la URL del listado de personas bajo `base`.
pub fn people(base: impl Into<String>) -> Source<String, AdapterError> {
    let base = base.into();
    Source::emitter(move || people_url(&base))
}
