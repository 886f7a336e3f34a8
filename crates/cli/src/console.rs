use colored::Colorize;
use othello_core::field::PlayerColor;
use othello_core::game_result::GameResult;
use othello_core::notifier::Notifier;

/// Prints every notification to stdout, with the final result highlighted.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn display_message(&mut self, message: &str) {
        println!("{message}");
    }

    fn note_result(&mut self, result: &GameResult) {
        let summary = match result.winner() {
            Some(winner) if winner.color == PlayerColor::Dark => result.to_string().bright_green(),
            Some(_) => result.to_string().bright_yellow(),
            None => result.to_string().bright_cyan(),
        };
        println!("\n{}", "GAME OVER.".bright_red());
        println!("{summary}");
    }
}
