use chrono::Utc;
use log::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Installs the fmt subscriber. `log` records are bridged into it, and the
/// filter comes from `RUST_LOG` with `info` as the fallback.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn timestamp() -> String {
    Utc::now().to_rfc3339()
}

pub fn run_log(run_id: &Uuid, text: &str) {
    info!("[run {}] {}", run_id, text);
}
