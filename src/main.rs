use std::io::Write;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing_subscriber::filter::EnvFilter;

use fraglog::app_state::AppState;
use fraglog::repl::{readline, respond};
use fraglog::watcher::init_watcher;

#[tokio::main]
async fn main() -> Result<(), String> {
    init_logging();

    let state = Arc::new(RwLock::new(AppState::new()));
    state.write().await.watcher_task = init_watcher(Arc::clone(&state)).await;

    loop {
        let line = match readline()? {
            Some(line) => line,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, Arc::clone(&state)).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

/// Diagnostics go to stderr so they never mix into the report output.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
