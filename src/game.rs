use crate::event_models::{KillEvent, WORLD_ACTOR};
use crate::kill_method::KillMethod;

/// Signed score of one player. Entries exist only for players whose score
/// was ever touched, in the order that first happened.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub player: String,
    pub total: i32,
}

/// Kill count of one means of death, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCount {
    pub method: KillMethod,
    pub total: u32,
}

/// Statistics for a single game.
///
/// The roster, the score list and the method list each keep their own
/// first-seen order; they are not sorted views of one another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Game {
    pub id: u32,
    pub total_kills: u32,
    pub players: Vec<String>,
    pub kills: Vec<ScoreEntry>,
    pub kills_by_method: Vec<MethodCount>,
}

impl Game {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Fold one kill into this game's statistics.
    pub fn apply_kill(&mut self, event: &KillEvent) {
        self.register_player(&event.killer);
        self.register_player(&event.victim);

        if event.penalizes_victim() {
            self.adjust_score(&event.victim, -1);
        } else {
            self.adjust_score(&event.killer, 1);
        }

        // every kill counts here, whoever or whatever made it
        self.total_kills += 1;
        self.count_method(&event.method);
    }

    // the roster never lists the environment
    fn register_player(&mut self, name: &str) {
        if name == WORLD_ACTOR {
            return;
        }
        if !self.players.iter().any(|p| p == name) {
            self.players.push(name.to_string());
        }
    }

    fn adjust_score(&mut self, player: &str, delta: i32) {
        match self.kills.iter_mut().find(|e| e.player == player) {
            Some(entry) => entry.total += delta,
            None => self.kills.push(ScoreEntry {
                player: player.to_string(),
                total: delta,
            }),
        }
    }

    fn count_method(&mut self, method: &KillMethod) {
        match self.kills_by_method.iter_mut().find(|e| &e.method == method) {
            Some(entry) => entry.total += 1,
            None => self.kills_by_method.push(MethodCount {
                method: method.clone(),
                total: 1,
            }),
        }
    }

    // --- Accessors ---

    pub fn score_for(&self, player: &str) -> Option<i32> {
        self.kills
            .iter()
            .find(|e| e.player == player)
            .map(|e| e.total)
    }

    pub fn method_total(&self, method: &KillMethod) -> Option<u32> {
        self.kills_by_method
            .iter()
            .find(|e| &e.method == method)
            .map(|e| e.total)
    }
}
