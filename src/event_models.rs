use crate::kill_method::KillMethod;

/// Name the server uses when the environment makes the kill.
pub const WORLD_ACTOR: &str = "<world>";

/// One decoded kill line.
#[derive(Debug, Clone, PartialEq)]
pub struct KillEvent {
    pub killer: String,
    pub victim: String,
    pub method: KillMethod,
}

impl KillEvent {
    /// The environment, not a player, made this kill.
    pub fn is_environmental(&self) -> bool {
        self.killer == WORLD_ACTOR
    }

    pub fn is_self_kill(&self) -> bool {
        self.killer == self.victim
    }

    /// World kills and self kills cost the victim a point instead of
    /// awarding one to the killer.
    pub fn penalizes_victim(&self) -> bool {
        self.is_environmental() || self.is_self_kill()
    }
}

/// What the extractor hands to the tally, in log order.
#[derive(Debug, Clone, PartialEq)]
pub enum LogSignal {
    MatchStart,
    Kill(KillEvent),
}
