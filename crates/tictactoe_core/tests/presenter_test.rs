//! Tests for driving a board through a presenter.

use std::io::Write;
use tictactoe_core::{
    Board, Layout, Line, LineGeometry, Mark, Match, MoveResult, Placement, Presenter, Position,
    status_message,
};

/// Presenter that keeps the texts and draw calls a host would issue.
#[derive(Debug, Default)]
struct ScriptedHost {
    glyphs: Vec<(Position, char)>,
    sounds: Vec<Mark>,
    info_text: String,
    strike: Option<LineGeometry>,
}

impl Presenter for ScriptedHost {
    fn mark_placed(&mut self, placement: Placement) {
        let glyph = match placement.mark {
            Mark::X => 'X',
            Mark::O => 'O',
        };
        self.glyphs.push((placement.position, glyph));
        self.sounds.push(placement.mark);
    }

    fn game_won(&mut self, mark: Mark, _line: Line, geometry: LineGeometry) {
        self.info_text = format!("The winner is {}\nPress R to start a new game", mark);
        self.strike = Some(geometry);
    }

    fn game_drawn(&mut self) {
        self.info_text = "Draw\nPress R to start a new game".to_string();
    }

    fn board_reset(&mut self) {
        self.glyphs.clear();
        self.info_text.clear();
        self.strike = None;
    }
}

#[test]
fn test_winning_game_presents_strike_through() {
    let mut game = Match::new(ScriptedHost::default());
    let mut last = None;
    for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
        last = Some(game.click(row, col).expect("Valid move"));
    }
    let last = last.expect("Five moves");

    let host = game.presenter();
    assert_eq!(host.glyphs.len(), 5);
    assert_eq!(host.sounds, vec![Mark::X, Mark::O, Mark::X, Mark::O, Mark::X]);
    assert_eq!(host.info_text, "The winner is X\nPress R to start a new game");
    assert_eq!(status_message(&last).as_deref(), Some(host.info_text.as_str()));

    let strike = host.strike.expect("Strike-through drawn");
    assert_eq!(*strike.rotation_degrees(), 45.0);
    assert_eq!(*strike.scale(), [0.2, 8.5, 1.0]);
}

#[test]
fn test_reset_only_after_game_over() {
    let mut game = Match::new(ScriptedHost::default());
    game.click(1, 1).expect("Valid move");
    assert!(!game.press_reset());
    assert_eq!(game.presenter().glyphs.len(), 1);

    for (row, col) in [(0, 0), (0, 1), (2, 1), (2, 0), (0, 2), (1, 2), (1, 0), (2, 2)] {
        game.click(row, col).expect("Valid move");
    }
    assert!(game.board().is_game_over());
    assert_eq!(game.presenter().info_text, "Draw\nPress R to start a new game");

    assert!(game.press_reset());
    let host = game.into_presenter();
    assert!(host.glyphs.is_empty());
    assert!(host.info_text.is_empty());
}

#[test]
fn test_custom_layout_from_file_scales_geometry() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "tile_offset = 3.0\nstraight_length = 9.0").expect("Write layout");

    let layout = Layout::from_file(file.path()).expect("Valid layout");
    let mut game = Match::with_board(Board::with_layout(layout), ScriptedHost::default());
    for (row, col) in [(0, 2), (0, 0), (1, 2), (1, 1), (2, 2)] {
        game.click(row, col).expect("Valid move");
    }

    let strike = game.presenter().strike.expect("Column 2 won");
    assert_eq!(*strike.position(), [3.0, 0.0, -1.0]);
    assert_eq!(*strike.scale(), [0.2, 9.0, 1.0]);
}

#[test]
fn test_result_serializes_for_remote_presenter() {
    let mut board = Board::new();
    let result = board.attempt_move(2, 0).expect("Valid move");
    let json = serde_json::to_value(result).expect("Serializable");

    assert_eq!(
        json,
        serde_json::json!({
            "Continue": {
                "placed": { "mark": "X", "position": "BottomLeft" },
                "next": "O"
            }
        })
    );

    let back: MoveResult = serde_json::from_value(json).expect("Deserializable");
    assert_eq!(back, result);
}
