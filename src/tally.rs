use crate::event_models::LogSignal;
use crate::game::Game;

/// Folds the signal stream into a list of games.
///
/// Game ids are handed out in creation order starting at 1 and every game
/// stays in the list, so the ids are contiguous.
#[derive(Debug, Default)]
pub struct GameTally {
    games: Vec<Game>,
}

impl GameTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one signal into the game list.
    pub fn process_signal(&mut self, signal: LogSignal) {
        match signal {
            LogSignal::MatchStart => self.push_new_game(),
            LogSignal::Kill(event) => {
                // a log can open mid-game; kills seen before any start
                // marker all land in one synthesized first game
                if self.games.is_empty() {
                    self.push_new_game();
                }
                if let Some(game) = self.games.last_mut() {
                    game.apply_kill(&event);
                }
            }
        }
    }

    pub fn process_signals(&mut self, signals: Vec<LogSignal>) {
        for signal in signals {
            self.process_signal(signal);
        }
    }

    fn push_new_game(&mut self) {
        let id = self.games.len() as u32 + 1;
        self.games.push(Game::new(id));
    }

    // --- Accessors ---

    /// Current (most recent) game
    pub fn current_game(&self) -> Option<&Game> {
        self.games.last()
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn into_games(self) -> Vec<Game> {
        self.games
    }
}
