//! The player seam and the bundled move-selection strategies.

use rand::seq::IteratorRandom;

use crate::board::Board;
use crate::field::PlayerColor;
use crate::game_result::GameResult;
use crate::position::Position;

/// A move-selection strategy driven by the game loop.
///
/// The loop asks for a move only when the player has at least one valid
/// move, and validates whatever comes back; returning a position outside
/// the valid set disqualifies the player. A player does not hold its own
/// color. The loop owns the color assignment and passes it with every
/// request, so the same player instance can take either side across
/// games.
pub trait Player {
    /// The name shown in notifications and results.
    fn name(&self) -> &str;

    /// Called at the start of every game, before any move is requested.
    fn new_game(&mut self) {}

    /// Picks one position for `color` on the current board.
    fn pick_move(&mut self, board: &Board, color: PlayerColor) -> Position;

    /// Called once with the final result after the game ends.
    fn game_over(&mut self, _result: &GameResult) {}
}

/// Picks uniformly among the valid moves.
pub struct RandomPlayer {
    name: String,
}

impl RandomPlayer {
    pub fn new(name: impl Into<String>) -> RandomPlayer {
        RandomPlayer { name: name.into() }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn pick_move(&mut self, board: &Board, color: PlayerColor) -> Position {
        let mut rng = rand::rng();
        board
            .find_valid_moves(color)
            .into_iter()
            .choose(&mut rng)
            .expect("No valid moves to pick from")
    }
}

/// Always plays the row-major smallest valid move.
///
/// Deterministic, which makes it the baseline opponent for repeatable
/// series and tests.
pub struct FirstMovePlayer {
    name: String,
}

impl FirstMovePlayer {
    pub fn new(name: impl Into<String>) -> FirstMovePlayer {
        FirstMovePlayer { name: name.into() }
    }
}

impl Player for FirstMovePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn pick_move(&mut self, board: &Board, color: PlayerColor) -> Position {
        board
            .find_valid_moves(color)
            .into_iter()
            .min()
            .expect("No valid moves to pick from")
    }
}

/// Replays a fixed move sequence, then falls back to the smallest valid
/// move once the script runs out.
///
/// The script is not checked against the board, which is the point: a
/// scripted illegal move is how disqualification is exercised.
pub struct ScriptedPlayer {
    name: String,
    script: Vec<Position>,
    next: usize,
}

impl ScriptedPlayer {
    pub fn new(name: impl Into<String>, script: Vec<Position>) -> ScriptedPlayer {
        ScriptedPlayer {
            name: name.into(),
            script,
            next: 0,
        }
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.next = 0;
    }

    fn pick_move(&mut self, board: &Board, color: PlayerColor) -> Position {
        match self.script.get(self.next) {
            Some(&pos) => {
                self.next += 1;
                pos
            }
            None => board
                .find_valid_moves(color)
                .into_iter()
                .min()
                .expect("No valid moves to pick from"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitialBoardState;

    fn initial_board() -> Board {
        let mut board = Board::new();
        board.initialize(InitialBoardState::CenterSquare);
        board
    }

    #[test]
    fn test_random_player_picks_valid_moves() {
        let board = initial_board();
        let mut player = RandomPlayer::new("random");
        for _ in 0..20 {
            let pos = player.pick_move(&board, PlayerColor::Dark);
            assert!(board.is_valid_move(PlayerColor::Dark, pos));
        }
    }

    #[test]
    fn test_first_move_player_is_deterministic() {
        let board = initial_board();
        let mut player = FirstMovePlayer::new("first");
        assert_eq!(
            player.pick_move(&board, PlayerColor::Dark),
            Position::new(2, 4)
        );
        assert_eq!(
            player.pick_move(&board, PlayerColor::Light),
            Position::new(2, 3)
        );
    }

    #[test]
    fn test_scripted_player_follows_script() {
        let board = initial_board();
        let mut player = ScriptedPlayer::new(
            "scripted",
            vec![Position::new(0, 0), Position::new(7, 7)],
        );
        assert_eq!(
            player.pick_move(&board, PlayerColor::Dark),
            Position::new(0, 0)
        );
        assert_eq!(
            player.pick_move(&board, PlayerColor::Dark),
            Position::new(7, 7)
        );
        // Script exhausted; smallest valid move takes over.
        assert_eq!(
            player.pick_move(&board, PlayerColor::Dark),
            Position::new(2, 4)
        );
    }

    #[test]
    fn test_scripted_player_restarts_on_new_game() {
        let board = initial_board();
        let mut player = ScriptedPlayer::new("scripted", vec![Position::new(5, 3)]);
        assert_eq!(
            player.pick_move(&board, PlayerColor::Dark),
            Position::new(5, 3)
        );
        player.new_game();
        assert_eq!(
            player.pick_move(&board, PlayerColor::Dark),
            Position::new(5, 3)
        );
    }
}
