//! Discrete events emitted by the simulation for the host's audio and UI
//! layers. Drained into every snapshot; the engine never touches audio or
//! DOM APIs itself.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, PowerUpKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave's formation has spawned.
    WaveStarted { wave: u32, boss_wave: bool },
    /// All enemies in the wave are gone.
    WaveCleared { wave: u32 },
    /// An enemy left formation to attack.
    AttackStarted { kind: EnemyKind, formation: bool },
    /// A regular enemy was destroyed and scored.
    EnemyDestroyed {
        kind: EnemyKind,
        x: f64,
        y: f64,
        score: u32,
    },
    /// The mega-boss took a hit but survived.
    MegaBossDamaged { remaining: i32 },
    /// The mega-boss died; the whole formation is wiped.
    MegaBossDestroyed { score: u32 },
    /// Player and enemy bullets annihilated each other.
    BulletClash { x: f64, y: f64 },
    /// The player lost a life.
    PlayerHit { lives_left: u32 },
    /// A power-up drop appeared.
    PowerUpSpawned { kind: PowerUpKind, x: f64, y: f64 },
    /// A power-up was opened and its effect applied.
    PowerUpCollected { kind: PowerUpKind },
    /// A timed power-up effect ran out.
    PowerUpExpired { kind: PowerUpKind },
    /// Lives reached zero.
    GameOver { score: u32, new_high_score: bool },
}
