//! Configuration for the match runner.
//!
//! This module handles command-line argument parsing and validation for the
//! series runner.

use clap::{Parser, ValueEnum};

use crate::error::{MatchRunnerError, Result};

/// Built-in strategies the contestants can play.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Picks a uniformly random move.
    Random,
    /// Picks the first move in row-major order.
    First,
}

/// Configuration for running a series of games between two contestants.
///
/// The first contestant takes the dark discs in the first game; the
/// contestants swap colors between games so each one starts half of them.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Tool for running series of games between built-in strategies"
)]
pub struct Config {
    /// Number of games to play
    #[arg(long, default_value = "100")]
    pub games: u32,

    /// Strategy for the first contestant
    #[arg(long, value_enum, default_value_t = Strategy::Random)]
    pub dark: Strategy,

    /// Strategy for the second contestant
    #[arg(long, value_enum, default_value_t = Strategy::Random)]
    pub light: Strategy,

    /// Name of the first contestant
    #[arg(long, default_value = "Contestant 1")]
    pub dark_name: String,

    /// Name of the second contestant
    #[arg(long, default_value = "Contestant 2")]
    pub light_name: String,
}

impl Config {
    /// Parse command-line arguments into a Config instance.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Check that the configuration describes a runnable series.
    ///
    /// The statistics tell the contestants apart by name, so the names
    /// must differ.
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(MatchRunnerError::Config(
                "The series needs at least one game.".to_string(),
            ));
        }
        if self.dark_name == self.light_name {
            return Err(MatchRunnerError::Config(format!(
                "The contestants need distinct names, got '{}' for both.",
                self.dark_name
            )));
        }
        Ok(())
    }
}
