//! Tracing setup and structured say events.

pub mod events;

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

const ENV_LOG_FORMAT: &str = "SAY_NB_LOG_FORMAT";

/// Installs the global subscriber. Logs go to stderr so stdout stays free for
/// rendered paths; `SAY_NB_LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() -> Result<(), SetGlobalDefaultError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(ENV_LOG_FORMAT)
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let json_layer = json.then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!json).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });
    let subscriber = Registry::default()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer);

    tracing::subscriber::set_global_default(subscriber)
}
