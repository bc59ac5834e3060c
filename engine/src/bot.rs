use crate::board::{Board, BOARD_CELLS, available_moves};
use crate::rules::evaluate;
use crate::types::{GameStatus, Mark};

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;

/// Picks the optimal move for `bot_mark` by exhaustive minimax.
///
/// The 3x3 tree is small enough that no pruning or depth limit is needed,
/// and a won position is scored the same no matter how many moves away it
/// is. Cells are scanned in ascending index order and only a strictly
/// greater score replaces the current best, so ties resolve to the lowest
/// index.
///
/// Meaningful only while `evaluate` reports `InProgress`; returns `None`
/// when no empty cell is left.
pub fn select_move(board: &Board, bot_mark: Mark, human_mark: Mark) -> Option<usize> {
    let mut scratch = *board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for cell in available_moves(board) {
        scratch[cell] = bot_mark;
        let score = minimax(&mut scratch, bot_mark, human_mark, false);
        scratch[cell] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    best_move
}

fn minimax(board: &mut Board, bot_mark: Mark, human_mark: Mark, is_maximizing: bool) -> i32 {
    match evaluate(board) {
        GameStatus::XWon => {
            return if bot_mark == Mark::X { WIN_SCORE } else { LOSS_SCORE };
        }
        GameStatus::OWon => {
            return if bot_mark == Mark::O { WIN_SCORE } else { LOSS_SCORE };
        }
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    if is_maximizing {
        let mut best = i32::MIN;
        for cell in 0..BOARD_CELLS {
            if board[cell] != Mark::Empty {
                continue;
            }
            board[cell] = bot_mark;
            best = best.max(minimax(board, bot_mark, human_mark, false));
            board[cell] = Mark::Empty;
        }
        best
    } else {
        let mut best = i32::MAX;
        for cell in 0..BOARD_CELLS {
            if board[cell] != Mark::Empty {
                continue;
            }
            board[cell] = human_mark;
            best = best.min(minimax(board, bot_mark, human_mark, true));
            board[cell] = Mark::Empty;
        }
        best
    }
}
