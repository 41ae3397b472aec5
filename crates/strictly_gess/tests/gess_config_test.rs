//! Loading games from TOML configuration.

mod common;

use common::{at, init_tracing};
use std::io::Write;
use strictly_gess::{Board, Cell, Game, GameConfig, GameState, Player};

// Black ring at C3, a Black block at R10 and a lone Black stone at J10;
// White ring at R18. The White stone on row 1 sits on the dead border.
const SPARSE_LAYOUT: &str = "\
....W...............
.BBB................
.B.B................
.BBB................
....................
....................
....................
....................
................BBB.
.........B......BBB.
................BBB.
....................
....................
....................
....................
....................
................WWW.
................W.W.
................WWW.
....................";

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_file_is_standard_game() {
    init_tracing();
    let file = write_config("");
    let config = GameConfig::from_file(file.path()).unwrap();
    let game = Game::from_config(&config).unwrap();
    assert_eq!(game, Game::new());
}

#[test]
fn test_custom_layout_and_first_turn() {
    init_tracing();
    let toml = format!("first_turn = \"White\"\nlayout = '''\n{}\n'''\n", SPARSE_LAYOUT);
    let file = write_config(&toml);

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.first_turn(), Player::White);

    let game = Game::from_config(&config).unwrap();
    assert_eq!(game.turn(), Player::White);
    assert_eq!(game.state(), GameState::Unfinished);
    // Border stones are cleared before play starts.
    assert_eq!(game.board().get(at("E1")), Cell::Empty);
    assert_eq!(game.board().stones(Player::Black), 18);
    assert_eq!(game.board().stones(Player::White), 8);
}

#[test]
fn test_custom_layout_plays_to_a_win() {
    init_tracing();
    let config = GameConfig::new().with_layout(SPARSE_LAYOUT);
    let mut game = Game::from_config(&config).unwrap();

    // The lone J10 stone cannot move on its own.
    assert!(!game.make_move("j10", "j11"));

    // The block slides down column R until its bottom row lands on the top
    // of White's ring.
    let outcome = game.try_move("r10", "r16").unwrap();
    assert_eq!(outcome.captured, 3);
    assert_eq!(game.state(), GameState::BlackWon);
    assert_eq!(game.board().stones(Player::White), 5);
    assert_eq!(game.board().get(at("R17")), Cell::Stone(Player::Black));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_bad_layout_file() {
    let file = write_config("layout = '''\n..B..\n'''\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Invalid layout"));
}

#[test]
fn test_config_board_matches_diagram() {
    let config = GameConfig::new().with_layout(SPARSE_LAYOUT);
    let board = config.board().unwrap();
    assert_eq!(board, Board::from_diagram(SPARSE_LAYOUT).unwrap());
}
