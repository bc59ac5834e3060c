use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tictactoe_engine::{
    Board, GameMode, GameStatus, Mark, MoveRecord, TicTacToeGame, WinningLine, select_move,
};
use tokio::sync::{Mutex, Notify};

use crate::log;
use crate::settings::{SessionSettings, Validate};

/// The computer always plays O; the maximizing side of the search never
/// changes within a session.
pub const COMPUTER_MARK: Mark = Mark::O;
pub const HUMAN_MARK: Mark = Mark::X;

#[derive(Clone, Debug, PartialEq)]
pub struct GameStateUpdate {
    pub board: Board,
    pub status: GameStatus,
    pub current_mark: Mark,
    pub history: Vec<MoveRecord>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameOverNotification {
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
    pub history: Vec<MoveRecord>,
}

/// Implemented by the presentation layer; receives every state change
/// the session produces.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, update: GameStateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}

#[derive(Clone)]
pub struct TicTacToeSessionState {
    pub game: Arc<Mutex<TicTacToeGame>>,
    pub settings: SessionSettings,
    pub turn_notify: Arc<Notify>,
}

impl TicTacToeSessionState {
    pub fn create(settings: &SessionSettings) -> Result<Self, String> {
        settings.validate()?;

        let opening_mark = settings.resolve_opening_mark();
        let game = TicTacToeGame::new(settings.mode, opening_mark)?;

        Ok(Self {
            game: Arc::new(Mutex::new(game)),
            settings: settings.clone(),
            turn_notify: Arc::new(Notify::new()),
        })
    }
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    /// Drives one game to completion. Human turns block on the turn
    /// signal raised by `handle_click`; computer turns are played inline
    /// after the configured pacing delay.
    pub async fn run(
        state: TicTacToeSessionState,
        broadcaster: impl GameBroadcaster,
    ) -> GameOverNotification {
        loop {
            broadcast_state(&state, &broadcaster).await;

            let (is_game_over, is_computer_turn) = {
                let game = state.game.lock().await;
                let is_over = game.status() != GameStatus::InProgress;
                let is_computer = game.mode() == GameMode::PlayerVsComputer
                    && game.current_mark() == COMPUTER_MARK;
                (is_over, is_computer)
            };

            if is_game_over {
                break;
            }

            if is_computer_turn {
                play_computer_turn(&state).await;
            } else {
                state.turn_notify.notified().await;
            }
        }

        let notification = build_game_over_notification(&state).await;
        broadcaster.broadcast_game_over(notification.clone()).await;
        notification
    }

    /// Applies a click on `cell` for the mark whose turn it is. Invalid
    /// clicks (occupied cell, game over, computer reply pending) are
    /// logged and ignored.
    pub async fn handle_click(state: &TicTacToeSessionState, cell: usize) {
        let mut game = state.game.lock().await;

        let mark = game.current_mark();
        if game.mode() == GameMode::PlayerVsComputer && mark == COMPUTER_MARK {
            log!("Ignoring click at cell {} while the computer's reply is pending", cell);
            return;
        }

        match game.place_mark(mark, cell) {
            Ok(()) => {
                drop(game);
                state.turn_notify.notify_one();
            }
            Err(e) => {
                log!("Rejected click at cell {}: {}", cell, e);
            }
        }
    }

    pub async fn handle_reset(state: &TicTacToeSessionState) {
        let mut game = state.game.lock().await;
        game.reset();
        drop(game);
        state.turn_notify.notify_one();
    }
}

async fn play_computer_turn(state: &TicTacToeSessionState) {
    let delay = Duration::from_millis(state.settings.bot_move_delay_ms);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    // The search runs on its own snapshot; no click can land meanwhile
    // because handle_click rejects input while the reply is pending.
    let board = {
        let game = state.game.lock().await;
        game.board()
    };

    let result =
        tokio::task::spawn_blocking(move || select_move(&board, COMPUTER_MARK, HUMAN_MARK)).await;

    let Ok(Some(cell)) = result else {
        log!("Computer found no cell to play");
        return;
    };

    let mut game = state.game.lock().await;
    if let Err(e) = game.place_mark(COMPUTER_MARK, cell) {
        log!("Computer failed to place mark at cell {}: {}", cell, e);
    }
}

async fn broadcast_state(state: &TicTacToeSessionState, broadcaster: &impl GameBroadcaster) {
    let game = state.game.lock().await;
    let update = GameStateUpdate {
        board: game.board(),
        status: game.status(),
        current_mark: game.current_mark(),
        history: game.history().moves().to_vec(),
    };
    drop(game);

    broadcaster.broadcast_state(update).await;
}

async fn build_game_over_notification(state: &TicTacToeSessionState) -> GameOverNotification {
    let game = state.game.lock().await;
    GameOverNotification {
        status: game.status(),
        winning_line: game.winning_line(),
        history: game.history().moves().to_vec(),
    }
}
