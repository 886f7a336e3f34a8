mod config;
mod error;
mod match_runner;
mod statistics;

use config::Config;
use match_runner::MatchRunner;

fn main() {
    let config = Config::parse_args();
    let mut runner = MatchRunner::new();
    match runner.run_series(&config) {
        Ok(stats) => stats.print_summary(),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
