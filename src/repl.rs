use crate::app_state::AppState;
use crate::commands;
use crate::summary::SummaryView;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Prompt for and read one line from stdin. `None` means stdin closed.
pub fn readline() -> Result<Option<String>, String> {
    write!(std::io::stdout(), "fraglog> ").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())?;

    let mut buffer = String::new();
    let bytes_read = std::io::stdin()
        .read_line(&mut buffer)
        .map_err(|e| e.to_string())?;

    if bytes_read == 0 {
        return Ok(None);
    }
    Ok(Some(buffer))
}

#[derive(Parser)]
#[command(version, about = "fraglog cli")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    ParseFile {
        #[arg(short, long)]
        path: String,
    },
    Summary {
        #[arg(value_enum)]
        view: Option<SummaryView>,
    },
    Info,
    ListFiles,
    Scan,
    Settings,
    Exit,
}

/// Dispatch one input line. `Ok(true)` means the session should end; an
/// `Err` carries the message to print, after which the loop keeps going.
pub async fn respond(line: &str, state: Arc<RwLock<AppState>>) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "fraglog".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::ParseFile { path }) => {
            commands::parse_file(path, Arc::clone(&state)).await;
        }
        Some(Commands::Summary { view }) => {
            commands::show_summary(*view, Arc::clone(&state)).await;
        }
        Some(Commands::Info) => {
            commands::log_info(Arc::clone(&state)).await;
        }
        Some(Commands::ListFiles) => {
            commands::list_files(Arc::clone(&state)).await;
        }
        Some(Commands::Scan) => {
            commands::scan_directory(Arc::clone(&state)).await;
        }
        Some(Commands::Settings) => {
            commands::show_settings(Arc::clone(&state)).await;
        }
        Some(Commands::Exit) => {
            write!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
            std::io::stdout().flush().map_err(|e| e.to_string())?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
