use crate::app_state::AppState;
use crate::parser::parse_games;
use crate::reader::load_log_text;
use crate::summary::{LogSummary, SummaryView, build_summary};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use time::{OffsetDateTime, UtcOffset};
use tokio::sync::RwLock;

pub async fn parse_file(path: &str, state: Arc<RwLock<AppState>>) {
    let timer = Instant::now();

    let resolved = {
        let s = state.read().await;
        s.resolve_log_path(path)
    };

    let content = match load_log_text(&resolved) {
        Ok(content) => content,
        Err(e) => {
            // a failed read leaves the last successful parse untouched
            println!("Failed to read {}: {}", resolved.display(), e);
            return;
        }
    };

    let games = parse_games(&content);
    // an empty file has no report at all, not an empty one
    let summary = if content.is_empty() {
        LogSummary::default()
    } else {
        build_summary(&games)
    };

    let game_count = games.len();
    let kill_count: u32 = games.iter().map(|g| g.total_kills).sum();

    {
        let mut s = state.write().await;
        s.active_file = Some(resolved);
        s.games = games;
        s.summary = Some(summary);
    }

    println!(
        "parsed {} games ({} kills) in {}ms",
        game_count,
        kill_count,
        timer.elapsed().as_millis()
    );
}

pub async fn show_summary(view: Option<SummaryView>, state: Arc<RwLock<AppState>>) {
    let s = state.read().await;
    let view = view.unwrap_or(s.config.default_view);

    let summary = match &s.summary {
        Some(summary) => summary,
        None => {
            println!("No log loaded; run parse-file first");
            return;
        }
    };

    match summary.view(view) {
        Some(blocks) if !blocks.is_empty() => println!("{}", blocks.join("\n")),
        Some(_) => println!("No games found in the active log"),
        None => println!("The active log is empty"),
    }
}

pub async fn log_info(state: Arc<RwLock<AppState>>) {
    let s = state.read().await;

    match &s.active_file {
        Some(path) => println!("Active file: {}", path.display()),
        None => {
            println!("No log loaded; run parse-file first");
            return;
        }
    }

    for game in &s.games {
        println!(
            "  game {}: {} kills, {} players",
            game.id,
            game.total_kills,
            game.players.len()
        );
    }
}

pub async fn list_files(state: Arc<RwLock<AppState>>) {
    let s = state.read().await;
    let index = match &s.file_index {
        Some(idx) => idx,
        None => {
            println!("No file index available");
            return;
        }
    };

    if index.is_empty() {
        println!("No log files found");
        return;
    }

    println!("{:<50} {:<20} {}", "File", "Modified", "Size");
    println!("{}", "-".repeat(80));

    for entry in index.entries() {
        let empty_marker = if entry.is_empty { " (empty)" } else { "" };
        println!(
            "{:<50} {:<20} {}{}",
            entry.filename,
            format_modified(entry.modified),
            entry.size_bytes,
            empty_marker
        );
    }

    println!("\nTotal: {} files", index.len());
}

/// Parse every indexed file and print per-file totals. Each file is an
/// independent parse; nothing is shared between them and the active file
/// is left alone.
pub async fn scan_directory(state: Arc<RwLock<AppState>>) {
    let paths: Vec<PathBuf> = {
        let s = state.read().await;
        match &s.file_index {
            Some(index) => index.entries().iter().map(|e| e.path.clone()).collect(),
            None => {
                println!("No file index available");
                return;
            }
        }
    };

    if paths.is_empty() {
        println!("No log files found");
        return;
    }

    let timer = Instant::now();

    let mut results: Vec<(PathBuf, usize, u32)> = paths
        .par_iter()
        .filter_map(|path| {
            let content = load_log_text(path).ok()?;
            let games = parse_games(&content);
            let kills = games.iter().map(|g| g.total_kills).sum();
            Some((path.clone(), games.len(), kills))
        })
        .collect();
    results.sort();

    for (path, game_count, kill_count) in &results {
        println!(
            "{:<50} {:>6} games {:>8} kills",
            file_label(path),
            game_count,
            kill_count
        );
    }

    println!(
        "\nScanned {} files in {}ms",
        results.len(),
        timer.elapsed().as_millis()
    );
}

pub async fn show_settings(state: Arc<RwLock<AppState>>) {
    let s = state.read().await;

    println!("log_directory: {}", s.config.log_directory);
    println!("default_view: {:?}", s.config.default_view);

    if let Ok(path) = confy::get_configuration_file_path("fraglog", None) {
        println!("config file: {}", path.display());
    }
}

fn file_label(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("?")
}

fn format_modified(modified: OffsetDateTime) -> String {
    let local = UtcOffset::current_local_offset()
        .map(|offset| modified.to_offset(offset))
        .unwrap_or(modified);
    format!("{} {:02}:{:02}", local.date(), local.hour(), local.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ONE_KILL: &str = "0:18 Kill: 2 3 7: Oootsimo killed Dono da Bola by MOD_ROCKET\n";

    #[tokio::test]
    async fn test_failed_read_keeps_the_previous_parse() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("games.log");
        fs::write(&good, ONE_KILL).unwrap();

        let state = Arc::new(RwLock::new(AppState::default()));
        parse_file(good.to_str().unwrap(), Arc::clone(&state)).await;
        {
            let s = state.read().await;
            assert_eq!(s.active_file.as_deref(), Some(good.as_path()));
            assert_eq!(s.games.len(), 1);
            assert!(s.summary.is_some());
        }

        let missing = dir.path().join("missing.log");
        parse_file(missing.to_str().unwrap(), Arc::clone(&state)).await;

        let s = state.read().await;
        assert_eq!(s.active_file.as_deref(), Some(good.as_path()));
        assert_eq!(s.games.len(), 1);
        assert!(s.summary.is_some());
    }

    #[tokio::test]
    async fn test_relative_paths_resolve_against_the_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("games.log"), ONE_KILL).unwrap();

        let mut app = AppState::default();
        app.config.log_directory = dir.path().to_string_lossy().into_owned();
        let state = Arc::new(RwLock::new(app));

        parse_file("games.log", Arc::clone(&state)).await;

        let expected = dir.path().join("games.log");
        let s = state.read().await;
        assert_eq!(s.active_file.as_deref(), Some(expected.as_path()));
        assert_eq!(s.games.len(), 1);
    }
}
