pub mod board;
pub mod bot;
pub mod game;
pub mod history;
pub mod rules;
pub mod types;

pub use board::{Board, BOARD_CELLS, BOARD_SIZE, available_moves, empty_board, is_valid_move};
pub use bot::select_move;
pub use game::TicTacToeGame;
pub use history::{MoveHistory, MoveRecord};
pub use rules::{WINNING_LINES, check_win, check_win_with_line, evaluate};
pub use types::{GameMode, GameStatus, Mark, WinningLine};
