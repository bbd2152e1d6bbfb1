use crate::directory_index::LogFileIndex;
use crate::game::Game;
use crate::summary::{LogSummary, SummaryView};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct AppState {
    pub config: AppConfig,
    pub active_file: Option<PathBuf>,
    pub games: Vec<Game>,
    pub summary: Option<LogSummary>,
    pub file_index: Option<LogFileIndex>,
    pub watcher_task: Option<tokio::task::JoinHandle<()>>,
}

impl AppState {
    pub fn new() -> Self {
        let config = confy::load("fraglog", None).unwrap_or_default();
        Self {
            config,
            ..Default::default()
        }
    }

    /// Resolve `path` against the configured log directory when relative.
    /// Resolution never touches state; the caller commits the active file
    /// once the file actually loaded.
    pub fn resolve_log_path(&self, path: &str) -> PathBuf {
        let given_path = Path::new(path);
        if given_path.is_relative() {
            Path::new(&self.config.log_directory).join(given_path)
        } else {
            given_path.to_path_buf()
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct AppConfig {
    pub log_directory: String,
    #[serde(default)]
    pub default_view: SummaryView,
}

impl ::std::default::Default for AppConfig {
    fn default() -> Self {
        Self {
            log_directory: "logs".to_string(),
            default_view: SummaryView::Standard,
        }
    }
}
