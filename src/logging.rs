use tracing_subscriber::EnvFilter;

/// Inicializa el logging del binario con tracing-subscriber.
///
/// Usa `RUST_LOG` si existe; si no, `log_level`. Los registros emitidos con
/// `log` (core y adapters) llegan a través del puente `tracing-log`.
pub fn init(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let _ = tracing_subscriber::fmt().with_env_filter(env_filter)
                                     .with_target(false)
                                     .try_init();
}
