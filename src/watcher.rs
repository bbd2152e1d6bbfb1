use crate::app_state::AppState;
use crate::directory_index::{LogFileIndex, is_log_file};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::sync::mpsc::{self, Receiver};

pub struct DirectoryWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
}

impl DirectoryWatcher {
    pub fn new(path: &Path) -> notify::Result<Self> {
        let (tx, rx) = mpsc::channel(100);

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.blocking_send(res);
            },
            Config::default(),
        )?;

        watcher.watch(path, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    pub async fn next_event(&mut self) -> Option<notify::Result<Event>> {
        self.rx.recv().await
    }
}

/// Main watcher loop - spawned as a tokio task
pub async fn run_watcher(state: Arc<RwLock<AppState>>) {
    let dir = {
        let s = state.read().await;
        PathBuf::from(&s.config.log_directory)
    };

    if !dir.exists() {
        tracing::warn!(directory = %dir.display(), "Log directory does not exist, watcher not started");
        return;
    }

    let mut watcher = match DirectoryWatcher::new(&dir) {
        Ok(w) => w,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to start directory watcher");
            return;
        }
    };

    tracing::info!(directory = %dir.display(), "Watching log directory");

    while let Some(event_result) = watcher.next_event().await {
        match event_result {
            Ok(event) => handle_event(event, Arc::clone(&state)).await,
            Err(e) => tracing::warn!(error = %e, "Watch error"),
        }
    }
}

// filesystem events only keep the index fresh; parsing stays an explicit
// command against a complete file
async fn handle_event(event: Event, state: Arc<RwLock<AppState>>) {
    match event.kind {
        EventKind::Create(_) => {
            for path in event.paths {
                if is_log_file(&path) {
                    handle_new_file(path, Arc::clone(&state)).await;
                }
            }
        }
        EventKind::Remove(_) => {
            for path in event.paths {
                if is_log_file(&path) {
                    handle_removed_file(path, Arc::clone(&state)).await;
                }
            }
        }
        _ => {}
    }
}

async fn handle_new_file(path: PathBuf, state: Arc<RwLock<AppState>>) {
    tracing::info!(file = %path.display(), "New log file detected");

    let mut s = state.write().await;
    if let Some(index) = &mut s.file_index {
        index.add_file(&path);
    }
}

async fn handle_removed_file(path: PathBuf, state: Arc<RwLock<AppState>>) {
    let mut s = state.write().await;
    if let Some(index) = &mut s.file_index {
        index.remove_file(&path);
    }
}

/// Initialize the file index and start the watcher
pub async fn init_watcher(state: Arc<RwLock<AppState>>) -> Option<tokio::task::JoinHandle<()>> {
    let dir = {
        let s = state.read().await;
        PathBuf::from(&s.config.log_directory)
    };

    match LogFileIndex::build_index(&dir) {
        Ok(index) => {
            let file_count = index.len();
            let newest = index.newest_file().map(|f| f.filename.clone());

            {
                let mut s = state.write().await;
                s.file_index = Some(index);
            }

            println!("Indexed {} log files in {}", file_count, dir.display());
            if let Some(filename) = newest {
                println!("Newest log file: {filename}");
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to build file index");
        }
    }

    // Spawn watcher task
    let watcher_state = Arc::clone(&state);
    let handle = tokio::spawn(async move {
        run_watcher(watcher_state).await;
    });

    Some(handle)
}
