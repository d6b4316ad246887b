//! Wave configuration — pure scaling curve from wave number to enemy
//! counts and speed.

use novastorm_core::state::WaveConfigView;

/// Compute the configuration row for a wave. Deterministic, no side
/// effects: wave 1 is the fixed base; later waves scale up with hard caps
/// on boss and escort counts.
pub fn config_for(wave: u32) -> WaveConfigView {
    let base = WaveConfigView {
        total_enemies: 15,
        boss_count: 1,
        escort_count: 4,
        speed_multiplier: 1.0,
    };

    if wave <= 1 {
        return base;
    }

    WaveConfigView {
        total_enemies: base.total_enemies + (wave - 1) * 3,
        boss_count: (1 + wave / 3).min(5),
        escort_count: (4 + wave / 2).min(8),
        speed_multiplier: 1.0 + (wave - 1) as f64 * 0.2,
    }
}
