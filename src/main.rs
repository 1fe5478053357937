//! Demo: pipeline "people" del ejemplo sobre un transporte en memoria.
//!
//! Construye `people -> request -> fetch -> parse -> decode` con taps de log,
//! lo ejecuta como future, luego a través del puente bloqueante y por último
//! con un mirror de respaldo.

use log::info;
use pipe_adapters::fixtures::PEOPLE_PAGE;
use pipe_adapters::steps::logging::log_result;
use pipe_adapters::steps::session::MemorySession;
use pipe_adapters::steps::swapi::people_url;
use pipe_adapters::{people_pipeline, people_pipeline_with_mirror, Page, Person};
use pipeflow_rust::config::{self, CONFIG};
use pipeflow_rust::errors::CoreError;
use pipeflow_rust::logging;

fn print_page(label: &str, page: &Page<Person>) {
    println!("[{label}] count={} recibidos={}", page.count, page.results.len());
    if let Some(person) = page.results.get(3) {
        println!("[{label}] results[3] = {} ({} cm, {})", person.name, person.height, person.birth_year);
    }
}

fn main() -> Result<(), CoreError> {
    config::init_dotenv();
    let cfg = &*CONFIG;
    logging::init(&cfg.log_level);
    info!("config: base_url={} latency={:?}", cfg.base_url, cfg.latency);

    let rt = tokio::runtime::Runtime::new()?;
    let session = MemorySession::new(rt.handle().clone()).with_latency(cfg.latency);
    session.register(people_url(&cfg.base_url), PEOPLE_PAGE);

    // 1) Asíncrono: el runtime conduce el future hasta la finalización.
    let pipe = people_pipeline(&session, &cfg.base_url);
    info!("pipeline kind: {}", pipe.kind());
    let page = rt.block_on(pipe.call_async())?;
    print_page("async", &page);

    // 2) Bloqueante: el hilo principal no pertenece al runtime, así que
    //    esperar aquí no bloquea la tarea que completa el fetch.
    let sync = people_pipeline(&session, &cfg.base_url).blocking();
    let res = sync.run_sync().ok_or(CoreError::StillAsync("people"))?;
    log_result(&res);
    print_page("blocking", &res?);

    // 3) Respaldo: la URL principal no existe, responde el mirror.
    let missing = "https://offline.invalid/api";
    let fallback = people_pipeline_with_mirror(&session, missing, &cfg.base_url).blocking();
    let res = fallback.run_sync().ok_or(CoreError::StillAsync("mirror"))?;
    print_page("mirror", &res?);

    Ok(())
}
