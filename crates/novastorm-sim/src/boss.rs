//! Mega-boss configuration and power scaling.

use serde::{Deserialize, Serialize};

use novastorm_core::enums::Difficulty;

/// Per-difficulty base tuning row for the mega-boss.
#[derive(Debug, Clone, Copy)]
pub struct BossTuning {
    pub base_health: i32,
    pub health_multiplier: f64,
    /// Barrage interval in steps.
    pub shoot_interval: f64,
    /// Power gained per completed boss cycle (every third wave).
    pub power_per_cycle: f64,
}

pub fn tuning(difficulty: Difficulty) -> BossTuning {
    match difficulty {
        Difficulty::Easy => BossTuning {
            base_health: 10,
            health_multiplier: 1.3,
            shoot_interval: 90.0,
            power_per_cycle: 0.3,
        },
        Difficulty::Normal => BossTuning {
            base_health: 15,
            health_multiplier: 1.5,
            shoot_interval: 60.0,
            power_per_cycle: 0.4,
        },
        Difficulty::Hard => BossTuning {
            base_health: 20,
            health_multiplier: 1.8,
            shoot_interval: 45.0,
            power_per_cycle: 0.5,
        },
    }
}

/// Live mega-boss state, recomputed at the start of every boss wave and
/// reset when the wave is cleared. The pooled health lives here rather
/// than on the entity so a boss kill can wipe the whole formation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossConfig {
    pub difficulty: Difficulty,
    pub current_health: i32,
    pub max_health: i32,
    pub power_scale: f64,
}

impl BossConfig {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            current_health: 0,
            max_health: 0,
            power_scale: 1.0,
        }
    }

    /// Recompute health and power for a boss wave:
    /// `health_scale = multiplier^(wave/3)`, `wave_bonus = 1.2^(wave/3)`,
    /// `max_health = ceil(base * health_scale * wave_bonus)`.
    pub fn update_power_scale(&mut self, wave: u32) {
        let t = tuning(self.difficulty);
        let cycles = (wave / 3) as i32;

        let wave_bonus = 1.2_f64.powi(cycles);
        self.power_scale = 1.0 + cycles as f64 * t.power_per_cycle * wave_bonus;

        let health_scale = t.health_multiplier.powi(cycles);
        self.max_health = (t.base_health as f64 * health_scale * wave_bonus).ceil() as i32;
        self.current_health = self.max_health;
    }

    /// Clear derived state between waves.
    pub fn reset(&mut self) {
        self.current_health = 0;
        self.max_health = 0;
        self.power_scale = 1.0;
    }

    /// Barrage interval in steps for this difficulty.
    pub fn shoot_interval(&self) -> f64 {
        tuning(self.difficulty).shoot_interval
    }
}
