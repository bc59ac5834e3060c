use std::io::ErrorKind;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tictactoe_engine::{GameMode, Mark};

pub const DEFAULT_BOT_MOVE_DELAY_MS: u64 = 500;
pub const MAX_BOT_MOVE_DELAY_MS: u64 = 10_000;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Who places the opening move in a computer-opponent game. The computer
/// always plays O, so `Computer` means O opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayer {
    Human,
    Computer,
    Random,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub mode: GameMode,
    pub first_player: FirstPlayer,
    pub bot_move_delay_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsComputer,
            first_player: FirstPlayer::Human,
            bot_move_delay_ms: DEFAULT_BOT_MOVE_DELAY_MS,
        }
    }
}

impl Validate for SessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.bot_move_delay_ms > MAX_BOT_MOVE_DELAY_MS {
            return Err(format!(
                "bot_move_delay_ms must not exceed {}",
                MAX_BOT_MOVE_DELAY_MS
            ));
        }
        if self.mode == GameMode::PlayerVsPlayer && self.first_player != FirstPlayer::Human {
            return Err("first_player only applies to the computer-opponent mode".to_string());
        }
        Ok(())
    }
}

impl SessionSettings {
    /// Resolves which mark opens the game. `Random` is drawn once per call.
    pub fn resolve_opening_mark(&self) -> Mark {
        match self.mode {
            GameMode::PlayerVsPlayer => Mark::X,
            GameMode::PlayerVsComputer => match self.first_player {
                FirstPlayer::Human => Mark::X,
                FirstPlayer::Computer => Mark::O,
                FirstPlayer::Random => {
                    if rand::rng().random() {
                        Mark::X
                    } else {
                        Mark::O
                    }
                }
            },
        }
    }
}

pub fn load_settings(file_path: &str) -> Result<SessionSettings, String> {
    let content = match std::fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SessionSettings::default()),
        Err(e) => return Err(format!("Failed to read settings file: {}", e)),
    };

    let settings: SessionSettings = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize settings: {}", e))?;

    settings
        .validate()
        .map_err(|e| format!("Settings validation error: {}", e))?;

    Ok(settings)
}

pub fn save_settings(file_path: &str, settings: &SessionSettings) -> Result<(), String> {
    settings
        .validate()
        .map_err(|e| format!("Settings validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;

    std::fs::write(file_path, content).map_err(|e| format!("Failed to write settings file: {}", e))
}
