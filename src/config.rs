//! Configuración central del demo.
//! Carga variables de entorno (.env) una sola vez y expone una estructura
//! inmutable (`CONFIG`).
use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::errors::CoreError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Configuración del demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Raíz de la API de ejemplo (`PIPEFLOW_BASE_URL`).
    pub base_url: String,
    /// Latencia simulada del transporte en memoria (`PIPEFLOW_LATENCY_MS`).
    pub latency: Duration,
    /// Nivel de log si `RUST_LOG` no está definido (`PIPEFLOW_LOG`).
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Construye la configuración desde una función de búsqueda arbitraria
    /// (tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let base_url = lookup("PIPEFLOW_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let latency_ms = match lookup("PIPEFLOW_LATENCY_MS") {
            Some(v) => v.parse::<u64>()
                        .map_err(|e| CoreError::InvalidVar { var: "PIPEFLOW_LATENCY_MS",
                                                     value: v.clone(),
                                                     reason: e.to_string() })?,
            None => 0,
        };
        let log_level = lookup("PIPEFLOW_LOG").unwrap_or_else(|| "info".to_string());
        Ok(Self { base_url,
                  latency: Duration::from_millis(latency_ms),
                  log_level })
    }
}

/// Instancia global perezosa; si el entorno es inválido se usan defaults.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    AppConfig::from_env().unwrap_or_else(|e| {
                             eprintln!("[config] {e}; usando valores por defecto");
                             AppConfig { base_url: DEFAULT_BASE_URL.to_string(),
                                         latency: Duration::ZERO,
                                         log_level: "info".to_string() }
                         })
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
