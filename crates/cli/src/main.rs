mod console;
mod error;
mod human;

use clap::{Parser, ValueEnum};
use othello_core::game::Game;
use othello_core::player::{FirstMovePlayer, Player, RandomPlayer};

use crate::console::ConsoleNotifier;
use crate::error::Result;
use crate::human::HumanPlayer;

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Strategy {
    /// Picks a uniformly random move.
    Random,
    /// Picks the first move in row-major order.
    First,
    /// Asks for a move on the terminal.
    Human,
}

#[derive(Parser, Debug)]
struct Cli {
    /// Strategy for the player starting with the dark discs.
    #[arg(long, value_enum, default_value_t = Strategy::Random)]
    dark: Strategy,

    /// Strategy for the player starting with the light discs.
    #[arg(long, value_enum, default_value_t = Strategy::Random)]
    light: Strategy,

    #[arg(long, default_value = "Dark")]
    dark_name: String,

    #[arg(long, default_value = "Light")]
    light_name: String,

    /// Number of games to play. Players swap colors between games.
    #[arg(long, default_value = "2")]
    games: u32,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<()> {
    let dark = make_player(args.dark, &args.dark_name)?;
    let light = make_player(args.light, &args.light_name)?;
    let mut game = Game::new(dark, light, Box::new(ConsoleNotifier));
    for round in 0..args.games {
        game.new_game(round > 0);
        game.run_game_loop();
    }
    Ok(())
}

fn make_player(strategy: Strategy, name: &str) -> Result<Box<dyn Player>> {
    Ok(match strategy {
        Strategy::Random => Box::new(RandomPlayer::new(name)),
        Strategy::First => Box::new(FirstMovePlayer::new(name)),
        Strategy::Human => Box::new(HumanPlayer::new(name)?),
    })
}
