use crate::board::{Board, BOARD_CELLS, empty_board};
use crate::history::MoveHistory;
use crate::rules::{check_win_with_line, evaluate};
use crate::types::{GameMode, GameStatus, Mark, WinningLine};

/// Per-game state machine: accepts moves, alternates turns while the game
/// is in progress and locks once a terminal status is reached. Only
/// `reset` leaves a terminal state.
#[derive(Clone, Debug)]
pub struct TicTacToeGame {
    board: Board,
    mode: GameMode,
    opening_mark: Mark,
    current_mark: Mark,
    status: GameStatus,
    history: MoveHistory,
    last_move: Option<usize>,
}

impl TicTacToeGame {
    pub fn new(mode: GameMode, opening_mark: Mark) -> Result<Self, String> {
        if opening_mark == Mark::Empty {
            return Err("Opening mark must be X or O".to_string());
        }

        Ok(Self {
            board: empty_board(),
            mode,
            opening_mark,
            current_mark: opening_mark,
            status: GameStatus::InProgress,
            history: MoveHistory::new(),
            last_move: None,
        })
    }

    pub fn place_mark(&mut self, mark: Mark, cell: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err(format!("It is not {:?}'s turn", mark));
        }

        if cell >= BOARD_CELLS {
            return Err("Cell index out of bounds".to_string());
        }

        if self.board[cell] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board[cell] = mark;
        self.last_move = Some(cell);
        self.history.record(mark, cell);

        self.status = evaluate(&self.board);
        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    pub fn reset(&mut self) {
        self.board = empty_board();
        self.current_mark = self.opening_mark;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.last_move = None;
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            GameStatus::XWon | GameStatus::OWon => check_win_with_line(&self.board),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp_game() -> TicTacToeGame {
        TicTacToeGame::new(GameMode::PlayerVsPlayer, Mark::X).unwrap()
    }

    #[test]
    fn test_new_game_rejects_empty_opening_mark() {
        assert!(TicTacToeGame::new(GameMode::PlayerVsPlayer, Mark::Empty).is_err());
    }

    #[test]
    fn test_turns_alternate_in_player_vs_player() {
        let mut game = pvp_game();

        assert_eq!(game.current_mark(), Mark::X);
        game.place_mark(Mark::X, 0).unwrap();
        assert_eq!(game.current_mark(), Mark::O);
        game.place_mark(Mark::O, 4).unwrap();
        assert_eq!(game.current_mark(), Mark::X);
    }

    #[test]
    fn test_rejects_a_move_out_of_turn() {
        let mut game = pvp_game();
        assert!(game.place_mark(Mark::O, 0).is_err());
        assert_eq!(game.board(), empty_board());
    }

    #[test]
    fn test_rejects_an_occupied_cell() {
        let mut game = pvp_game();
        game.place_mark(Mark::X, 0).unwrap();

        let result = game.place_mark(Mark::O, 0);

        assert!(result.is_err());
        assert_eq!(game.current_mark(), Mark::O);
    }

    #[test]
    fn test_rejects_out_of_bounds_cell() {
        let mut game = pvp_game();
        assert!(game.place_mark(Mark::X, 9).is_err());
    }

    #[test]
    fn test_win_is_detected_and_turns_stop() {
        let mut game = pvp_game();
        game.place_mark(Mark::X, 0).unwrap();
        game.place_mark(Mark::O, 3).unwrap();
        game.place_mark(Mark::X, 1).unwrap();
        game.place_mark(Mark::O, 4).unwrap();
        game.place_mark(Mark::X, 2).unwrap();

        assert_eq!(game.status(), GameStatus::XWon);
        assert!(game.place_mark(Mark::O, 5).is_err());

        let line = game.winning_line().unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.cells, [0, 1, 2]);
    }

    #[test]
    fn test_draw_is_detected() {
        let mut game = pvp_game();
        // X O X / X O O / O X X, played in a draw order
        for (mark, cell) in [
            (Mark::X, 0),
            (Mark::O, 1),
            (Mark::X, 2),
            (Mark::O, 4),
            (Mark::X, 3),
            (Mark::O, 5),
            (Mark::X, 7),
            (Mark::O, 6),
            (Mark::X, 8),
        ] {
            game.place_mark(mark, cell).unwrap();
        }

        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_history_records_moves_in_order() {
        let mut game = pvp_game();
        game.place_mark(Mark::X, 4).unwrap();
        game.place_mark(Mark::O, 0).unwrap();

        let moves = game.history().moves();

        assert_eq!(moves.len(), 2);
        assert_eq!((moves[0].mark, moves[0].cell), (Mark::X, 4));
        assert_eq!((moves[1].mark, moves[1].cell), (Mark::O, 0));
    }

    #[test]
    fn test_reset_reenters_the_initial_state() {
        let mut game = pvp_game();
        game.place_mark(Mark::X, 0).unwrap();
        game.place_mark(Mark::O, 4).unwrap();

        game.reset();

        assert_eq!(game.board(), empty_board());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_mark(), Mark::X);
        assert!(game.history().is_empty());
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_o_opening_game_starts_with_o() {
        let game = TicTacToeGame::new(GameMode::PlayerVsComputer, Mark::O).unwrap();
        assert_eq!(game.current_mark(), Mark::O);
    }
}
