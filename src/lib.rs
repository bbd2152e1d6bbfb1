pub mod app_state;
pub mod commands;
pub mod directory_index;
pub mod event_models;
pub mod game;
pub mod kill_method;
pub mod parser;
pub mod reader;
pub mod repl;
pub mod summary;
pub mod tally;
pub mod watcher;

pub use event_models::*;
pub use kill_method::KillMethod;
pub use parser::{parse_games, parse_kill_line, parse_log};
