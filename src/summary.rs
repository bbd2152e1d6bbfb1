use crate::game::Game;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which of the two report layouts to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SummaryView {
    #[default]
    Standard,
    ByKillMethod,
}

/// The rendered report: one JSON block per game and view.
///
/// An absent view means there was no log content at all; a present but
/// empty view means the log parsed to zero games.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogSummary {
    pub standard: Option<Vec<String>>,
    pub by_kill_method: Option<Vec<String>>,
}

impl LogSummary {
    pub fn view(&self, view: SummaryView) -> Option<&[String]> {
        match view {
            SummaryView::Standard => self.standard.as_deref(),
            SummaryView::ByKillMethod => self.by_kill_method.as_deref(),
        }
    }

    /// True when neither view has anything to print.
    pub fn is_empty(&self) -> bool {
        let no_blocks = |blocks: &Option<Vec<String>>| {
            blocks.as_ref().map(|b| b.is_empty()).unwrap_or(true)
        };
        no_blocks(&self.standard) && no_blocks(&self.by_kill_method)
    }
}

/// Render every game under both views.
pub fn build_summary(games: &[Game]) -> LogSummary {
    LogSummary {
        standard: Some(games.iter().map(render_standard_block).collect()),
        by_kill_method: Some(games.iter().map(render_method_block).collect()),
    }
}

/// One `game_<id>` object: total kills, roster, then per-player scores.
pub fn render_standard_block(game: &Game) -> String {
    let mut scores = Map::new();
    for entry in &game.kills {
        scores.insert(entry.player.clone(), Value::from(entry.total));
    }

    let players: Vec<Value> = game.players.iter().cloned().map(Value::from).collect();

    let mut body = Map::new();
    body.insert("total_kills".to_string(), Value::from(game.total_kills));
    body.insert("players".to_string(), Value::from(players));
    body.insert("kills".to_string(), Value::Object(scores));

    render_block(format!("game_{}", game.id), body)
}

/// One `game-<id>` object holding the per-cause kill counts.
pub fn render_method_block(game: &Game) -> String {
    let mut counts = Map::new();
    for entry in &game.kills_by_method {
        counts.insert(entry.method.as_token().to_string(), Value::from(entry.total));
    }

    let mut body = Map::new();
    body.insert("kills_by_means".to_string(), Value::Object(counts));

    render_block(format!("game-{}", game.id), body)
}

// 2-space pretty printing; map keys come out in insertion order
fn render_block(key: String, body: Map<String, Value>) -> String {
    let mut block = Map::new();
    block.insert(key, Value::Object(body));
    serde_json::to_string_pretty(&Value::Object(block)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_models::KillEvent;
    use crate::kill_method::KillMethod;

    fn game_with_kills(id: u32, kills: &[(&str, &str, KillMethod)]) -> Game {
        let mut game = Game::new(id);
        for (killer, victim, method) in kills {
            game.apply_kill(&KillEvent {
                killer: killer.to_string(),
                victim: victim.to_string(),
                method: method.clone(),
            });
        }
        game
    }

    #[test]
    fn test_standard_block_keeps_field_and_insertion_order() {
        let game = game_with_kills(
            1,
            &[
                ("Isgalamido", "Zeh", KillMethod::Railgun),
                ("<world>", "Isgalamido", KillMethod::TriggerHurt),
            ],
        );

        let expected = "\
{
  \"game_1\": {
    \"total_kills\": 2,
    \"players\": [
      \"Isgalamido\",
      \"Zeh\"
    ],
    \"kills\": {
      \"Isgalamido\": 0
    }
  }
}";
        assert_eq!(render_standard_block(&game), expected);
    }

    #[test]
    fn test_method_block_uses_hyphenated_key() {
        let game = game_with_kills(
            3,
            &[
                ("A", "B", KillMethod::Rocket),
                ("B", "A", KillMethod::Shotgun),
                ("A", "B", KillMethod::Rocket),
            ],
        );

        let expected = "\
{
  \"game-3\": {
    \"kills_by_means\": {
      \"MOD_ROCKET\": 2,
      \"MOD_SHOTGUN\": 1
    }
  }
}";
        assert_eq!(render_method_block(&game), expected);
    }

    #[test]
    fn test_zero_kill_game_still_renders_a_block() {
        let game = Game::new(1);

        let expected = "\
{
  \"game_1\": {
    \"total_kills\": 0,
    \"players\": [],
    \"kills\": {}
  }
}";
        assert_eq!(render_standard_block(&game), expected);

        let expected_methods = "\
{
  \"game-1\": {
    \"kills_by_means\": {}
  }
}";
        assert_eq!(render_method_block(&game), expected_methods);
    }

    #[test]
    fn test_rendering_is_stable_across_calls() {
        let game = game_with_kills(2, &[("Zeh", "Dono da Bola", KillMethod::Lava)]);
        assert_eq!(render_standard_block(&game), render_standard_block(&game));
        assert_eq!(render_method_block(&game), render_method_block(&game));
    }

    #[test]
    fn test_no_games_builds_present_but_empty_views() {
        let summary = build_summary(&[]);
        assert_eq!(summary.standard, Some(vec![]));
        assert_eq!(summary.by_kill_method, Some(vec![]));
        assert!(summary.is_empty());
    }

    #[test]
    fn test_default_summary_has_absent_views() {
        let summary = LogSummary::default();
        assert_eq!(summary.view(SummaryView::Standard), None);
        assert_eq!(summary.view(SummaryView::ByKillMethod), None);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_view_selects_the_matching_blocks() {
        let games = [Game::new(1)];
        let summary = build_summary(&games);

        let standard = summary.view(SummaryView::Standard).unwrap();
        let methods = summary.view(SummaryView::ByKillMethod).unwrap();
        assert!(standard[0].contains("game_1"));
        assert!(methods[0].contains("game-1"));
        assert!(!summary.is_empty());
    }
}
