use othello_core::board::Board;
use othello_core::field::PlayerColor;
use othello_core::player::Player;
use othello_core::position::Position;
use rustyline::DefaultEditor;

/// Asks the person at the terminal to choose among the legal moves.
///
/// The moves are listed in row-major order with one-based coordinates,
/// matching how the board is displayed. Input that does not name an
/// index into the list falls back to the first move.
pub struct HumanPlayer {
    name: String,
    editor: DefaultEditor,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> rustyline::Result<HumanPlayer> {
        Ok(HumanPlayer {
            name: name.into(),
            editor: DefaultEditor::new()?,
        })
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn pick_move(&mut self, board: &Board, color: PlayerColor) -> Position {
        let moves = sorted_moves(board, color);
        print!("{}", format_menu(&moves));
        let selection = self
            .editor
            .readline("Please select a move: ")
            .ok()
            .and_then(|line| parse_selection(&line, moves.len()));
        match selection {
            Some(index) => moves[index],
            None => {
                println!("Invalid input, returning first move.");
                moves[0]
            }
        }
    }
}

fn sorted_moves(board: &Board, color: PlayerColor) -> Vec<Position> {
    let mut moves: Vec<Position> = board.find_valid_moves(color).into_iter().collect();
    moves.sort_unstable();
    moves
}

fn format_menu(moves: &[Position]) -> String {
    let mut menu = String::from("\nYour possible moves are:\n");
    for (index, pos) in moves.iter().enumerate() {
        menu.push_str(&format!(
            "{:>4}: {:>2}, {:>2}\n",
            index,
            pos.row() + 1,
            pos.col() + 1
        ));
    }
    menu
}

fn parse_selection(input: &str, count: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&index| index < count)
}
