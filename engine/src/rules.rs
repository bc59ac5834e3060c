use crate::board::Board;
use crate::types::{GameStatus, Mark, WinningLine};

/// The 8 index triples that decide a win: 3 rows, 3 columns, 2 diagonals.
/// Scanned in this order, so the first completed line found is deterministic.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    for [a, b, c] in WINNING_LINES {
        let mark = board[a];
        if mark != Mark::Empty && board[b] == mark && board[c] == mark {
            return Some(mark);
        }
    }
    None
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in WINNING_LINES {
        let mark = board[line[0]];
        if mark != Mark::Empty && board[line[1]] == mark && board[line[2]] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

/// Total over any well-formed board; reachability is not validated.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_win(board) {
        return match winner {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
    }

    if board.iter().all(|&cell| cell != Mark::Empty) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::empty_board;

    #[test]
    fn test_each_line_wins_for_x() {
        for line in WINNING_LINES {
            let mut board = empty_board();
            for cell in line {
                board[cell] = Mark::X;
            }
            assert_eq!(evaluate(&board), GameStatus::XWon, "line {:?}", line);
        }
    }

    #[test]
    fn test_each_line_wins_for_o() {
        for line in WINNING_LINES {
            let mut board = empty_board();
            for cell in line {
                board[cell] = Mark::O;
            }
            assert_eq!(evaluate(&board), GameStatus::OWon, "line {:?}", line);
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / X O O / O X X
        let board = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
        ];
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_board_with_empty_cell_and_no_line_is_in_progress() {
        let mut board = empty_board();
        board[0] = Mark::X;
        board[4] = Mark::O;
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_empty_board_is_in_progress() {
        assert_eq!(evaluate(&empty_board()), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_is_idempotent_and_does_not_mutate() {
        let mut board = empty_board();
        board[0] = Mark::O;
        board[1] = Mark::O;
        board[2] = Mark::O;
        board[3] = Mark::X;

        let snapshot = board;
        let first = evaluate(&board);
        let second = evaluate(&board);

        assert_eq!(first, GameStatus::OWon);
        assert_eq!(first, second);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_check_win_with_line_reports_the_completed_triple() {
        let mut board = empty_board();
        board[2] = Mark::O;
        board[4] = Mark::O;
        board[6] = Mark::O;
        board[0] = Mark::X;
        board[1] = Mark::X;

        let line = check_win_with_line(&board).unwrap();

        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.cells, [2, 4, 6]);
    }

    #[test]
    fn test_check_win_returns_none_without_completed_line() {
        let mut board = empty_board();
        board[0] = Mark::X;
        board[1] = Mark::X;
        assert_eq!(check_win(&board), None);
    }
}
