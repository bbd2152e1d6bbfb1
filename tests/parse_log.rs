use fraglog::game::{Game, MethodCount, ScoreEntry};
use fraglog::kill_method::KillMethod;
use fraglog::parser;
use fraglog::summary::SummaryView;
use pretty_assertions::assert_eq;

const SAMPLE: &str = include_str!("../testfiles/sample.log");

#[test]
fn sample_games() {
    let result = parser::parse_games(SAMPLE);

    let expected = vec![
        Game {
            id: 1,
            total_kills: 4,
            players: vec!["Isgalamido".to_owned(), "Dono da Bola".to_owned()],
            kills: vec![ScoreEntry {
                player: "Isgalamido".to_owned(),
                total: -2,
            }],
            kills_by_method: vec![
                MethodCount {
                    method: KillMethod::TriggerHurt,
                    total: 1,
                },
                MethodCount {
                    method: KillMethod::Falling,
                    total: 1,
                },
                MethodCount {
                    method: KillMethod::RocketSplash,
                    total: 2,
                },
            ],
        },
        Game {
            id: 2,
            total_kills: 3,
            players: vec!["Zeh".to_owned(), "Dono da Bola".to_owned()],
            kills: vec![
                ScoreEntry {
                    player: "Zeh".to_owned(),
                    total: 2,
                },
                ScoreEntry {
                    player: "Dono da Bola".to_owned(),
                    total: 1,
                },
            ],
            kills_by_method: vec![
                MethodCount {
                    method: KillMethod::Railgun,
                    total: 2,
                },
                MethodCount {
                    method: KillMethod::Rocket,
                    total: 1,
                },
            ],
        },
    ];

    assert_eq!(result, expected);
}

#[test]
fn sample_summary() {
    let summary = parser::parse_log(SAMPLE);

    let standard = summary.view(SummaryView::Standard).unwrap();
    let methods = summary.view(SummaryView::ByKillMethod).unwrap();
    assert_eq!(standard.len(), 2);
    assert_eq!(methods.len(), 2);

    let expected_game_1 = "\
{
  \"game_1\": {
    \"total_kills\": 4,
    \"players\": [
      \"Isgalamido\",
      \"Dono da Bola\"
    ],
    \"kills\": {
      \"Isgalamido\": -2
    }
  }
}";
    assert_eq!(standard[0], expected_game_1);

    let expected_game_2 = "\
{
  \"game_2\": {
    \"total_kills\": 3,
    \"players\": [
      \"Zeh\",
      \"Dono da Bola\"
    ],
    \"kills\": {
      \"Zeh\": 2,
      \"Dono da Bola\": 1
    }
  }
}";
    assert_eq!(standard[1], expected_game_2);

    let expected_methods_1 = "\
{
  \"game-1\": {
    \"kills_by_means\": {
      \"MOD_TRIGGER_HURT\": 1,
      \"MOD_FALLING\": 1,
      \"MOD_ROCKET_SPLASH\": 2
    }
  }
}";
    assert_eq!(methods[0], expected_methods_1);

    let expected_methods_2 = "\
{
  \"game-2\": {
    \"kills_by_means\": {
      \"MOD_RAILGUN\": 2,
      \"MOD_ROCKET\": 1
    }
  }
}";
    assert_eq!(methods[1], expected_methods_2);
}

#[test]
fn sample_via_mmap() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/testfiles/sample.log");

    let content = fraglog::reader::load_log_text(path).unwrap();

    assert_eq!(content, SAMPLE);
    assert_eq!(parser::parse_games(&content), parser::parse_games(SAMPLE));
}
