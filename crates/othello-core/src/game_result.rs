//! Terminal game outcomes.

use std::fmt;

use crate::field::PlayerColor;
use crate::score::Score;

/// Name and color of one participant, captured at the moment a result is
/// produced.
///
/// Results outlive the game that produced them, so they carry owned
/// snapshots instead of borrowing the players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerInfo {
    pub name: String,
    pub color: PlayerColor,
}

impl PlayerInfo {
    pub fn new(name: impl Into<String>, color: PlayerColor) -> PlayerInfo {
        PlayerInfo {
            name: name.into(),
            color,
        }
    }
}

/// How a finished game ended.
///
/// An illegal move is not an error condition; it ends the game with
/// [`GameResult::WinByOpponentMistake`] naming the offender as loser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Neither player could move and the disc counts differ.
    WinByScore {
        score: Score,
        winner: PlayerInfo,
        loser: PlayerInfo,
    },
    /// The loser picked a position outside their valid-move set.
    WinByOpponentMistake {
        score: Score,
        winner: PlayerInfo,
        loser: PlayerInfo,
    },
    /// Neither player could move and the disc counts are equal.
    Tie {
        score: Score,
        dark: PlayerInfo,
        light: PlayerInfo,
    },
}

impl GameResult {
    /// Returns the final score, taken from the board when the game ended.
    pub fn score(&self) -> Score {
        match self {
            GameResult::WinByScore { score, .. }
            | GameResult::WinByOpponentMistake { score, .. }
            | GameResult::Tie { score, .. } => *score,
        }
    }

    /// Returns the winning player, or `None` for a tie.
    pub fn winner(&self) -> Option<&PlayerInfo> {
        match self {
            GameResult::WinByScore { winner, .. }
            | GameResult::WinByOpponentMistake { winner, .. } => Some(winner),
            GameResult::Tie { .. } => None,
        }
    }

    /// Returns the losing player, or `None` for a tie.
    pub fn loser(&self) -> Option<&PlayerInfo> {
        match self {
            GameResult::WinByScore { loser, .. }
            | GameResult::WinByOpponentMistake { loser, .. } => Some(loser),
            GameResult::Tie { .. } => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::WinByScore { score, winner, .. } => write!(
                f,
                "{} ({}) won.\nThe score was {}.",
                winner.name,
                winner.color,
                score.format(winner.color)
            ),
            GameResult::WinByOpponentMistake { winner, .. } => write!(
                f,
                "{} ({}) won.\nThe opponent made an invalid move.",
                winner.name, winner.color
            ),
            GameResult::Tie { score, .. } => write!(
                f,
                "The game was a tie.\nThe score was {}.",
                score.format(PlayerColor::Dark)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_player() -> PlayerInfo {
        PlayerInfo::new("dark_player", PlayerColor::Dark)
    }

    fn light_player() -> PlayerInfo {
        PlayerInfo::new("light_player", PlayerColor::Light)
    }

    #[test]
    fn test_win_by_score_display() {
        let result = GameResult::WinByScore {
            score: Score::new(44, 20, 0),
            winner: dark_player(),
            loser: light_player(),
        };
        assert_eq!(
            result.to_string(),
            "dark_player (dark) won.\nThe score was 44:20."
        );
    }

    #[test]
    fn test_win_by_score_puts_winner_count_first() {
        let result = GameResult::WinByScore {
            score: Score::new(20, 44, 0),
            winner: light_player(),
            loser: dark_player(),
        };
        assert_eq!(
            result.to_string(),
            "light_player (light) won.\nThe score was 44:20."
        );
    }

    #[test]
    fn test_win_by_opponent_mistake_display() {
        let result = GameResult::WinByOpponentMistake {
            score: Score::new(12, 20, 32),
            winner: light_player(),
            loser: dark_player(),
        };
        assert_eq!(
            result.to_string(),
            "light_player (light) won.\nThe opponent made an invalid move."
        );
    }

    #[test]
    fn test_tie_display_puts_dark_count_first() {
        let result = GameResult::Tie {
            score: Score::new(32, 32, 0),
            dark: dark_player(),
            light: light_player(),
        };
        assert_eq!(
            result.to_string(),
            "The game was a tie.\nThe score was 32:32."
        );
    }

    #[test]
    fn test_accessors() {
        let result = GameResult::WinByScore {
            score: Score::new(44, 20, 0),
            winner: dark_player(),
            loser: light_player(),
        };
        assert_eq!(result.score(), Score::new(44, 20, 0));
        assert_eq!(result.winner(), Some(&dark_player()));
        assert_eq!(result.loser(), Some(&light_player()));

        let tie = GameResult::Tie {
            score: Score::new(30, 30, 4),
            dark: dark_player(),
            light: light_player(),
        };
        assert_eq!(tie.winner(), None);
        assert_eq!(tie.loser(), None);
    }
}
