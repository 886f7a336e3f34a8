//! The observer seam for game events.

use crate::board::Board;
use crate::game::Players;
use crate::game_result::{GameResult, PlayerInfo};
use crate::position::Position;

/// Receives game events from the game loop.
///
/// Implementations only have to sink messages; the provided methods
/// compose the standard text for each event. Overriding an event method
/// changes how (or whether) that event is rendered.
///
/// For every game the loop delivers one new-game event, zero or more move
/// events, and exactly one result event, in that order.
pub trait Notifier {
    /// Sinks one message.
    fn display_message(&mut self, message: &str);

    /// Renders the board in its text form.
    fn display_board(&mut self, board: &Board) {
        self.display_message(&board.to_string());
    }

    /// Announces a new game and both participants.
    fn note_new_game(&mut self, players: &Players, _board: &Board) {
        self.display_message("Starting a new game.");
        self.display_message(&format!("Dark player: {}", players.dark().name()));
        self.display_message(&format!("Light player: {}", players.light().name()));
    }

    /// Announces a played move and the board it produced.
    fn note_move(&mut self, player: &PlayerInfo, pos: Position, board: &Board) {
        self.display_message(&format!(
            "\n{} ({}) plays {}.",
            player.name, player.color, pos
        ));
        self.display_board(board);
    }

    /// Announces the final result.
    fn note_result(&mut self, result: &GameResult) {
        self.display_message(&format!("\nGAME OVER.\n{result}"));
    }
}

/// Discards every event.
///
/// Used for bulk series where per-move output would drown the run, and
/// for tests that only care about results.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn display_message(&mut self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitialBoardState;
    use crate::field::PlayerColor;
    use crate::player::FirstMovePlayer;
    use crate::score::Score;

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Vec<String>,
    }

    impl Notifier for RecordingNotifier {
        fn display_message(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    fn initial_board() -> Board {
        let mut board = Board::new();
        board.initialize(InitialBoardState::CenterSquare);
        board
    }

    #[test]
    fn test_note_new_game_announces_both_players() {
        let players = Players::new(
            Box::new(FirstMovePlayer::new("dark_player")),
            Box::new(FirstMovePlayer::new("light_player")),
        );
        let mut notifier = RecordingNotifier::default();
        notifier.note_new_game(&players, &initial_board());
        assert_eq!(
            notifier.messages,
            vec![
                "Starting a new game.",
                "Dark player: dark_player",
                "Light player: light_player",
            ]
        );
    }

    #[test]
    fn test_note_move_shows_move_and_board() {
        let board = initial_board();
        let mut notifier = RecordingNotifier::default();
        notifier.note_move(
            &PlayerInfo::new("someone", PlayerColor::Dark),
            Position::new(2, 4),
            &board,
        );
        assert_eq!(
            notifier.messages,
            vec!["\nsomeone (dark) plays (2, 4).".to_string(), board.to_string()]
        );
    }

    #[test]
    fn test_note_result_wraps_result_text() {
        let result = GameResult::Tie {
            score: Score::new(32, 32, 0),
            dark: PlayerInfo::new("a", PlayerColor::Dark),
            light: PlayerInfo::new("b", PlayerColor::Light),
        };
        let mut notifier = RecordingNotifier::default();
        notifier.note_result(&result);
        assert_eq!(
            notifier.messages,
            vec!["\nGAME OVER.\nThe game was a tie.\nThe score was 32:32."]
        );
    }
}
