pub mod board;
pub mod field;
pub mod game;
pub mod game_result;
pub mod notifier;
pub mod player;
pub mod position;
pub mod score;
