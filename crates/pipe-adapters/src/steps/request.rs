use pipe_core::Step;

use crate::error::AdapterError;
use crate::models::HttpRequest;

/// GET que acepta JSON.
pub fn to(url: String) -> HttpRequest {
    HttpRequest::get(url).with_header("Accept", "application/json")
}

pub fn request_step() -> Step<String, HttpRequest, AdapterError> {
    Step::map(to)
}
