use std::sync::Arc;

use anyhow::Result;
use say_nb::say::{
    FileStringResolver, NoPlayback, SayConfig, SayEngine, SayEnv, SayRequest, Speaker,
};
use say_nb::telemetry::init_tracing;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

/// Reads one JSON request per line from stdin and prints its resolved path.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let config = SayConfig::from_env();
    let resolver = FileStringResolver::from_config(&config);
    let speaker = Speaker::new(
        SayEngine::new(config),
        Arc::new(resolver),
        Arc::new(NoPlayback),
    );
    let env = SayEnv::new();
    info!(
        target: "say_engine",
        locale = speaker.engine().locale(),
        "say engine ready"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match SayRequest::from_json(&line).and_then(|request| speaker.say_string(&request, &env)) {
            Ok(path) => {
                stdout.write_all(path.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
            Err(err) => warn!(target: "say_engine", kind = err.kind(), %err, "request failed"),
        }
    }

    Ok(())
}
