use std::cmp::Ordering;

use colored::*;
use othello_core::field::PlayerColor;
use othello_core::game_result::GameResult;

/// Aggregated outcomes of a series of games between two contestants.
///
/// The contestants are told apart by name, so the counts survive the color
/// swaps between games. The disc difference accumulates from the first
/// contestant's perspective.
#[derive(Debug, Clone)]
pub struct SeriesStats {
    pub first_name: String,
    pub second_name: String,
    pub first_wins: u32,
    pub second_wins: u32,
    pub ties: u32,
    pub disqualifications: u32,
    pub dark_wins: u32,
    pub light_wins: u32,
    pub disc_difference: i32,
    pub games_played: u32,
}

impl SeriesStats {
    pub fn new(first_name: impl Into<String>, second_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            second_name: second_name.into(),
            first_wins: 0,
            second_wins: 0,
            ties: 0,
            disqualifications: 0,
            dark_wins: 0,
            light_wins: 0,
            disc_difference: 0,
            games_played: 0,
        }
    }

    /// Folds one finished game into the running counts.
    ///
    /// A win by opponent mistake counts both as a win for the player who
    /// was wronged and as a disqualification.
    pub fn add_result(&mut self, result: &GameResult) {
        self.games_played += 1;
        match result {
            GameResult::Tie { .. } => self.ties += 1,
            GameResult::WinByScore { score, winner, .. }
            | GameResult::WinByOpponentMistake { score, winner, .. } => {
                match winner.color {
                    PlayerColor::Dark => self.dark_wins += 1,
                    PlayerColor::Light => self.light_wins += 1,
                }
                let margin = score.fields_for(winner.color) as i32
                    - score.fields_for(winner.color.other()) as i32;
                if winner.name == self.first_name {
                    self.first_wins += 1;
                    self.disc_difference += margin;
                } else {
                    self.second_wins += 1;
                    self.disc_difference -= margin;
                }
                if matches!(result, GameResult::WinByOpponentMistake { .. }) {
                    self.disqualifications += 1;
                }
            }
        }
    }

    pub fn first_win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            (self.first_wins as f64 / self.games_played as f64) * 100.0
        }
    }

    pub fn second_win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            (self.second_wins as f64 / self.games_played as f64) * 100.0
        }
    }

    /// Prints the final series summary to stdout.
    pub fn print_summary(&self) {
        if self.games_played == 0 {
            println!("No games were played.");
            return;
        }

        println!();
        println!("{}", "SERIES RESULTS".bright_white().bold());
        println!();
        println!(
            "{} {}",
            "Games played:".bright_white(),
            self.games_played.to_string().bright_yellow()
        );
        print_contestant_line(&self.first_name, self.first_wins, self.first_win_rate());
        print_contestant_line(&self.second_name, self.second_wins, self.second_win_rate());
        println!(
            "{} {}",
            "Ties:".bright_white(),
            self.ties.to_string().bright_blue()
        );
        println!(
            "{} {}",
            "Disqualifications:".bright_white(),
            self.disqualifications.to_string().bright_red()
        );
        println!(
            "{} {} dark / {} light",
            "Wins by color:".bright_white(),
            self.dark_wins.to_string().bright_green(),
            self.light_wins.to_string().bright_green()
        );

        let disc_difference = match self.disc_difference.cmp(&0) {
            Ordering::Greater => format!("{:+}", self.disc_difference).bright_green(),
            Ordering::Less => format!("{:+}", self.disc_difference).bright_red(),
            Ordering::Equal => format!("{:+}", self.disc_difference).bright_yellow(),
        };
        println!(
            "{} {} for {}",
            "Disc difference:".bright_white(),
            disc_difference,
            self.first_name.bright_cyan()
        );
    }
}

fn print_contestant_line(name: &str, wins: u32, win_rate: f64) {
    println!(
        "{} {} ({})",
        format!("{name}:").bright_cyan(),
        format!("{wins} wins").bright_green(),
        format!("{win_rate:.1}%").bright_yellow()
    );
}
