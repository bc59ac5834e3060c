pub mod logger;
pub mod session;
pub mod settings;

pub use session::{
    COMPUTER_MARK, GameBroadcaster, GameOverNotification, GameStateUpdate, HUMAN_MARK,
    TicTacToeSession, TicTacToeSessionState,
};
pub use settings::{FirstPlayer, SessionSettings, Validate, load_settings, save_settings};
