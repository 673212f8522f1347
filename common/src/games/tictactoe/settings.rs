use serde::{Deserialize, Serialize};

use super::bot_controller::BotType;
use super::types::FirstPlayerMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSettings {
    pub bot: BotType,
    pub first_player: FirstPlayerMode,
    /// Start a fresh round as soon as a game ends. When off, the driver
    /// waits in the terminal state for an explicit reset.
    pub auto_reset: bool,
    /// Seeds the random bot and the random first-player coin.
    pub seed: Option<u64>,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            bot: BotType::Minimax,
            first_player: FirstPlayerMode::Human,
            auto_reset: true,
            seed: None,
        }
    }
}
