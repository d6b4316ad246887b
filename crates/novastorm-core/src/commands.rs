//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Continuous
//! input (held movement/fire keys) is delivered as `SetInput` each frame;
//! the engine keeps the last state it received.

use serde::{Deserialize, Serialize};

use crate::enums::GameMode;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Choose a game mode (main menu / game over only).
    SelectMode { mode: GameMode },
    /// Start a new game in the selected mode.
    StartGame,
    /// Current held state of the logical movement/fire actions.
    SetInput {
        move_left: bool,
        move_right: bool,
        fire: bool,
    },
    /// Toggle auto-fire.
    ToggleAutoFire,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Return to the main menu from game over.
    ReturnToMenu,
}
