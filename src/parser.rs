use crate::event_models::{KillEvent, LogSignal};
use crate::game::Game;
use crate::kill_method::KillMethod;
use crate::summary::{LogSummary, build_summary};
use crate::tally::GameTally;
use memchr::memchr_iter;
use memchr::memmem;
use memchr::memrchr;

// a line belongs to a new game when it contains this, whatever else it says
const MATCH_START_MARKER: &[u8] = b"0:00 -";
const KILL_TAG: &[u8] = b" Kill: ";
const KILLED_SEPARATOR: &[u8] = b" killed ";
const BY_SEPARATOR: &[u8] = b" by";

/// Parse a complete log into the two rendered report views.
///
/// Empty input means "no log content" and leaves both views absent; any
/// non-empty input produces both views, even when no game was found.
pub fn parse_log(content: &str) -> LogSummary {
    if content.is_empty() {
        return LogSummary::default();
    }
    build_summary(&parse_games(content))
}

/// Parse a complete log into per-game statistics, in log order.
pub fn parse_games(content: &str) -> Vec<Game> {
    let mut tally = GameTally::new();
    tally.process_signals(extract_signals(content));
    tally.into_games()
}

/// Single forward pass over the lines. A line can open a new game and
/// contribute a kill at the same time; the game boundary check runs first.
pub fn extract_signals(content: &str) -> Vec<LogSignal> {
    let mut signals = Vec::new();

    for line in content.split('\n') {
        if is_match_start(line) {
            signals.push(LogSignal::MatchStart);
        }
        if is_kill_line(line) {
            match parse_kill_line(line) {
                Some(event) => signals.push(LogSignal::Kill(event)),
                None => tracing::debug!(line, "discarding malformed kill line"),
            }
        }
    }

    signals
}

pub fn is_match_start(line: &str) -> bool {
    memmem::find(line.as_bytes(), MATCH_START_MARKER).is_some()
}

/// A kill line is `<minutes>:<seconds> Kill: ...` from its very first byte;
/// padded or otherwise prefixed lines do not count.
pub fn is_kill_line(line: &str) -> bool {
    let bytes = line.as_bytes();

    let mut digits = 0;
    while digits < bytes.len() && bytes[digits].is_ascii_digit() {
        digits += 1;
    }
    if digits == 0 || bytes.len() < digits + 3 {
        return false;
    }
    // seconds are always two digits
    if bytes[digits] != b':'
        || !bytes[digits + 1].is_ascii_digit()
        || !bytes[digits + 2].is_ascii_digit()
    {
        return false;
    }

    bytes[digits + 3..].starts_with(KILL_TAG)
}

/// Decode one kill line. Anything that does not decompose cleanly is
/// dropped whole; no field of the result is built from a bad line.
pub fn parse_kill_line(line: &str) -> Option<KillEvent> {
    if !is_kill_line(line) {
        return None;
    }

    let split = memmem::find(line.as_bytes(), KILLED_SEPARATOR)?;
    let left = &line[..split];
    let right = &line[split + KILLED_SEPARATOR.len()..];

    let killer = parse_killer(left)?;
    let victim = parse_victim(right)?;
    let method = parse_method(line);

    Some(KillEvent {
        killer: killer.to_string(),
        victim: victim.to_string(),
        method,
    })
}

// the killer name follows the third colon: `<time> Kill: <id> <id> <id>: name`
fn parse_killer(left: &str) -> Option<&str> {
    let colon = memchr_iter(b':', left.as_bytes()).nth(2)?;
    let name = left.get(colon + 2..)?;
    (!name.is_empty()).then_some(name)
}

// the victim name runs up to the last ` by`, which introduces the cause
fn parse_victim(right: &str) -> Option<&str> {
    let cut = memmem::rfind(right.as_bytes(), BY_SEPARATOR)?;
    let name = &right[..cut];
    (!name.is_empty()).then_some(name)
}

// the cause token trails the final space; a kill line always has one
fn parse_method(line: &str) -> KillMethod {
    let token = memrchr(b' ', line.as_bytes())
        .map(|pos| &line[pos + 1..])
        .unwrap_or_default();
    KillMethod::from_token(token)
}
