//! Observadores para `tap`. Escriben vía `log`; el binario decide el backend.

use std::fmt::{Debug, Display};

use log::{info, warn};

pub fn log_value<T: Debug>(value: &T) {
    info!("object: {value:?}");
}

/// Para payloads grandes sólo interesa el tamaño.
#[allow(clippy::ptr_arg)]
pub fn log_bytes(bytes: &Vec<u8>) {
    info!("received {} bytes", bytes.len());
}

pub fn log_result<T: Debug, E: Display>(result: &Result<T, E>) {
    match result {
        Ok(value) => info!("result success: {value:?}"),
        Err(error) => warn!("result error: {error}"),
    }
}
