//! The turn-taking game loop.

use std::collections::HashSet;

use crate::board::{Board, InitialBoardState};
use crate::field::PlayerColor;
use crate::game_result::{GameResult, PlayerInfo};
use crate::notifier::Notifier;
use crate::player::Player;
use crate::position::Position;

/// The two participants of a game together with their color assignment.
///
/// Starting order alternates across a series by swapping the assignment,
/// not by constructing new players; the same instances simply take the
/// other color next game.
pub struct Players {
    dark: Box<dyn Player>,
    light: Box<dyn Player>,
}

impl Players {
    pub fn new(dark: Box<dyn Player>, light: Box<dyn Player>) -> Players {
        Players { dark, light }
    }

    /// Returns the player currently assigned dark.
    pub fn dark(&self) -> &dyn Player {
        self.dark.as_ref()
    }

    /// Returns the player currently assigned light.
    pub fn light(&self) -> &dyn Player {
        self.light.as_ref()
    }

    /// Returns the player currently assigned `color`.
    pub fn player_for(&self, color: PlayerColor) -> &dyn Player {
        match color {
            PlayerColor::Dark => self.dark.as_ref(),
            PlayerColor::Light => self.light.as_ref(),
        }
    }

    fn player_for_mut(&mut self, color: PlayerColor) -> &mut dyn Player {
        match color {
            PlayerColor::Dark => self.dark.as_mut(),
            PlayerColor::Light => self.light.as_mut(),
        }
    }

    /// Exchanges the dark and light assignment.
    pub fn swap_dark_and_light(&mut self) {
        std::mem::swap(&mut self.dark, &mut self.light);
    }

    /// Captures name and color of the player assigned `color`.
    pub fn info_for(&self, color: PlayerColor) -> PlayerInfo {
        PlayerInfo::new(self.player_for(color).name(), color)
    }

    fn new_game(&mut self) {
        self.dark.new_game();
        self.light.new_game();
    }

    fn game_over(&mut self, result: &GameResult) {
        self.dark.game_over(result);
        self.light.game_over(result);
    }
}

/// Drives complete games between two players.
///
/// One `Game` is reused for any number of games: [`new_game`](Game::new_game)
/// resets the board and optionally swaps the color assignment,
/// [`run_game_loop`](Game::run_game_loop) then plays until a result
/// exists.
///
/// Each loop iteration hands the turn to a player with valid moves,
/// passing the turn at most once; when neither side can move the score
/// decides the outcome. A player returning a move outside the valid set
/// ends the game on the spot, disqualified.
pub struct Game {
    players: Players,
    notifier: Box<dyn Notifier>,
    board: Board,
    current_color: PlayerColor,
    cached_moves: Option<HashSet<Position>>,
    result: Option<GameResult>,
}

impl Game {
    /// Creates a game over a freshly initialized board, dark to move.
    pub fn new(
        dark_player: Box<dyn Player>,
        light_player: Box<dyn Player>,
        notifier: Box<dyn Notifier>,
    ) -> Game {
        let mut board = Board::new();
        board.initialize(InitialBoardState::CenterSquare);
        Game {
            players: Players::new(dark_player, light_player),
            notifier,
            board,
            current_color: PlayerColor::Dark,
            cached_moves: None,
            result: None,
        }
    }

    /// Read-only view of the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The participants and their current color assignment.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The result of the last finished game, or `None` while a game is
    /// still open.
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Starts a new game: result cleared, board reset to the center
    /// square, dark to move.
    ///
    /// With `swap_players` the color assignment is exchanged first, so
    /// the same pair alternates who takes dark across a series. Both
    /// players get their `new_game` hook, then the notifier is told.
    pub fn new_game(&mut self, swap_players: bool) {
        self.result = None;
        self.board.initialize(InitialBoardState::CenterSquare);
        if swap_players {
            self.players.swap_dark_and_light();
        }
        self.set_current_color(PlayerColor::Dark);
        self.players.new_game();
        self.notifier.note_new_game(&self.players, &self.board);
    }

    /// Plays until the game has a result, then reports it.
    pub fn run_game_loop(&mut self) {
        while self.result.is_none() {
            self.pick_current_player_with_valid_moves();
            if self.current_player_has_valid_moves() {
                self.allow_current_player_to_move();
                self.swap_current_player();
            } else {
                self.set_result_from_score();
            }
        }
        if let Some(result) = &self.result {
            self.players.game_over(result);
            self.notifier.note_result(result);
        }
    }

    fn set_current_color(&mut self, color: PlayerColor) {
        self.current_color = color;
        self.cached_moves = None;
    }

    /// The valid moves of the current player, computed at most once per
    /// (board, current player) pair.
    fn valid_moves_for_current_player(&mut self) -> &HashSet<Position> {
        let board = &self.board;
        let color = self.current_color;
        self.cached_moves
            .get_or_insert_with(|| board.find_valid_moves(color))
    }

    fn current_player_has_valid_moves(&mut self) -> bool {
        !self.valid_moves_for_current_player().is_empty()
    }

    fn swap_current_player(&mut self) {
        self.set_current_color(self.current_color.other());
    }

    /// Passes the turn at most once; if both sides are stuck the caller
    /// ends the game from the score.
    fn pick_current_player_with_valid_moves(&mut self) {
        if !self.current_player_has_valid_moves() {
            self.swap_current_player();
        }
    }

    fn allow_current_player_to_move(&mut self) {
        let color = self.current_color;
        let pos = self
            .players
            .player_for_mut(color)
            .pick_move(&self.board, color);
        if self.valid_moves_for_current_player().contains(&pos) {
            self.board.play_move(color, pos);
            let player = self.players.info_for(color);
            self.notifier.note_move(&player, pos, &self.board);
        } else {
            self.disqualify_current_player();
        }
    }

    fn set_result_from_score(&mut self) {
        let score = self.board.compute_score();
        self.result = Some(match score.winner() {
            Some(winner) => GameResult::WinByScore {
                score,
                winner: self.players.info_for(winner),
                loser: self.players.info_for(winner.other()),
            },
            None => GameResult::Tie {
                score,
                dark: self.players.info_for(PlayerColor::Dark),
                light: self.players.info_for(PlayerColor::Light),
            },
        });
    }

    fn disqualify_current_player(&mut self) {
        let score = self.board.compute_score();
        let winner = self.current_color.other();
        self.result = Some(GameResult::WinByOpponentMistake {
            score,
            winner: self.players.info_for(winner),
            loser: self.players.info_for(self.current_color),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::NullNotifier;
    use crate::player::{FirstMovePlayer, ScriptedPlayer};
    use crate::score::Score;

    fn first_move_game() -> Game {
        Game::new(
            Box::new(FirstMovePlayer::new("a")),
            Box::new(FirstMovePlayer::new("b")),
            Box::new(NullNotifier),
        )
    }

    #[test]
    fn test_players_swap_exchanges_assignment() {
        let mut players = Players::new(
            Box::new(FirstMovePlayer::new("a")),
            Box::new(FirstMovePlayer::new("b")),
        );
        assert_eq!(players.dark().name(), "a");
        assert_eq!(players.light().name(), "b");
        players.swap_dark_and_light();
        assert_eq!(players.dark().name(), "b");
        assert_eq!(players.light().name(), "a");
        assert_eq!(players.player_for(PlayerColor::Dark).name(), "b");
    }

    #[test]
    fn test_info_for_captures_name_and_color() {
        let players = Players::new(
            Box::new(FirstMovePlayer::new("a")),
            Box::new(FirstMovePlayer::new("b")),
        );
        assert_eq!(
            players.info_for(PlayerColor::Light),
            PlayerInfo::new("b", PlayerColor::Light)
        );
    }

    #[test]
    fn test_new_game_swaps_colors_on_request() {
        let mut game = first_move_game();
        game.new_game(false);
        assert_eq!(game.players().dark().name(), "a");
        game.new_game(true);
        assert_eq!(game.players().dark().name(), "b");
        game.new_game(true);
        assert_eq!(game.players().dark().name(), "a");
    }

    #[test]
    fn test_new_game_clears_previous_result() {
        let mut game = first_move_game();
        game.new_game(false);
        game.run_game_loop();
        assert!(game.result().is_some());
        game.new_game(false);
        assert!(game.result().is_none());
        assert_eq!(game.board().compute_score(), Score::new(2, 2, 60));
    }

    #[test]
    fn test_turn_passes_without_asking_the_stuck_player() {
        // Dark has no valid move here; if the loop asked anyway, the
        // scripted (0, 0) would end the game by disqualification.
        let mut game = Game::new(
            Box::new(ScriptedPlayer::new("dark", vec![Position::new(0, 0)])),
            Box::new(ScriptedPlayer::new("light", vec![Position::new(3, 0)])),
            Box::new(NullNotifier),
        );
        game.board = "\
|O| | | | | | | |
|*| | | | | | | |
|*| | | | | | | |
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |"
            .parse()
            .unwrap();
        game.run_game_loop();
        match game.result() {
            Some(GameResult::WinByScore {
                score,
                winner,
                loser,
            }) => {
                assert_eq!(*score, Score::new(0, 4, 60));
                assert_eq!(winner.name, "light");
                assert_eq!(loser.name, "dark");
            }
            other => panic!("Expected a win by score, got {other:?}"),
        }
    }

    #[test]
    fn test_game_ends_tied_when_neither_side_can_move() {
        let mut game = first_move_game();
        game.board = "\
|*| | | | | | | |
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |
| | | | | | | |O|"
            .parse()
            .unwrap();
        game.run_game_loop();
        match game.result() {
            Some(GameResult::Tie { score, dark, light }) => {
                assert_eq!(*score, Score::new(1, 1, 62));
                assert_eq!(dark.name, "a");
                assert_eq!(light.name, "b");
            }
            other => panic!("Expected a tie, got {other:?}"),
        }
    }

    #[test]
    fn test_illegal_pick_loses_even_when_ahead() {
        // Dark opens legally, then plays an occupied cell while clearly
        // ahead on discs.
        let mut game = Game::new(
            Box::new(ScriptedPlayer::new(
                "dark",
                vec![Position::new(2, 4), Position::new(3, 3)],
            )),
            Box::new(FirstMovePlayer::new("light")),
            Box::new(NullNotifier),
        );
        game.new_game(false);
        game.run_game_loop();
        match game.result() {
            Some(GameResult::WinByOpponentMistake { winner, loser, .. }) => {
                assert_eq!(winner.name, "light");
                assert_eq!(winner.color, PlayerColor::Light);
                assert_eq!(loser.name, "dark");
                assert_eq!(loser.color, PlayerColor::Dark);
            }
            other => panic!("Expected a win by opponent mistake, got {other:?}"),
        }
    }
}
