use pipe_core::Step;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AdapterError;
use crate::models::Page;

/// JSON -> `Page<T>`.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<Page<T>, AdapterError> {
    serde_json::from_value(value).map_err(AdapterError::from)
}

pub fn decode_step<T>() -> Step<Value, Page<T>, AdapterError>
    where T: DeserializeOwned + Send + 'static
{
    Step::result_map(decode::<T>)
}
