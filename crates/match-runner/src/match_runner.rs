//! Series execution and result aggregation.
//!
//! This module contains the core logic for running an automated series of
//! games between two in-process contestants, including progress tracking
//! and statistics collection.

use indicatif::{ProgressBar, ProgressStyle};
use othello_core::game::Game;
use othello_core::notifier::NullNotifier;
use othello_core::player::{FirstMovePlayer, Player, RandomPlayer};

use crate::config::{Config, Strategy};
use crate::error::{MatchRunnerError, Result};
use crate::statistics::SeriesStats;

/// Orchestrates and executes a series of games between two contestants.
pub struct MatchRunner;

impl Default for MatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchRunner {
    pub fn new() -> Self {
        MatchRunner
    }

    /// Execute a complete series using the provided configuration.
    ///
    /// The first contestant takes dark in the first game and the colors
    /// alternate from then on. All games run on one [`Game`] with a
    /// [`NullNotifier`], so nothing is printed while the series runs
    /// except the progress bar.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate or if a
    /// game ends without producing a result.
    pub fn run_series(&mut self, config: &Config) -> Result<SeriesStats> {
        config.validate()?;

        let mut game = Game::new(
            make_player(config.dark, &config.dark_name),
            make_player(config.light, &config.light_name),
            Box::new(NullNotifier),
        );
        let mut stats = SeriesStats::new(&config.dark_name, &config.light_name);
        let progress_bar = create_progress_bar(u64::from(config.games));

        for round in 0..config.games {
            game.new_game(round > 0);
            game.run_game_loop();
            match game.result() {
                Some(result) => {
                    stats.add_result(result);
                    progress_bar.inc(1);
                }
                None => {
                    progress_bar.finish_and_clear();
                    return Err(MatchRunnerError::Game(format!(
                        "Game {} ended without a result.",
                        round + 1
                    )));
                }
            }
        }

        progress_bar.finish_and_clear();
        Ok(stats)
    }
}

fn make_player(strategy: Strategy, name: &str) -> Box<dyn Player> {
    match strategy {
        Strategy::Random => Box::new(RandomPlayer::new(name)),
        Strategy::First => Box::new(FirstMovePlayer::new(name)),
    }
}

fn create_progress_bar(total_games: u64) -> ProgressBar {
    let progress_bar = ProgressBar::new(total_games);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▉▊▋▌▍▎▏ "),
    );
    progress_bar
}
