use crate::types::Mark;

pub const BOARD_SIZE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Board snapshot, row-major: index = row * 3 + col.
pub type Board = [Mark; BOARD_CELLS];

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_CELLS]
}

pub fn cell_index(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

pub fn available_moves(board: &Board) -> Vec<usize> {
    let mut moves = Vec::new();
    for (cell, &mark) in board.iter().enumerate() {
        if mark == Mark::Empty {
            moves.push(cell);
        }
    }
    moves
}

pub fn is_valid_move(board: &Board, cell: usize) -> bool {
    if cell >= BOARD_CELLS {
        return false;
    }
    board[cell] == Mark::Empty
}
