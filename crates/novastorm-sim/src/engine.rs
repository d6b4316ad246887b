//! Game engine — owns the ECS world and all session state.
//!
//! The host queues `PlayerCommand`s, calls `tick(delta)` once per frame
//! with the normalized frame-time multiplier, and renders the returned
//! snapshot. Same seed + same command stream = same snapshot stream.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use novastorm_core::commands::PlayerCommand;
use novastorm_core::components::{Hitbox, PlayerShip, PlayerStatus};
use novastorm_core::constants::*;
use novastorm_core::enums::{Difficulty, GameMode, GamePhase};
use novastorm_core::events::GameEvent;
use novastorm_core::state::{AttackIndicator, GameSnapshot, WaveStats};
use novastorm_core::types::{Position, SimTime};

use crate::boss::BossConfig;
use crate::formation;
use crate::scores::HighScores;
use crate::systems;
use crate::systems::player::InputState;
use crate::systems::wave_progress::WaveBudget;

/// Configuration for starting a new engine.
pub struct GameConfig {
    /// RNG seed for determinism. Same seed = same game.
    pub seed: u64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub mode: GameMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            mode: GameMode::Classic,
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    mode: GameMode,
    difficulty: Difficulty,
    canvas_width: f64,
    canvas_height: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,

    input: InputState,
    auto_fire: bool,
    fire_was_held: bool,
    last_auto_fire_ms: f64,

    wave: u32,
    score: u32,
    lives: u32,
    budget: WaveBudget,
    attack_timer: f64,
    boss: BossConfig,
    regen_countdown_ms: Option<f64>,

    indicators: Vec<AttackIndicator>,
    events: Vec<GameEvent>,
    high_scores: HighScores,
    stats: WaveStats,
    despawn_buffer: Vec<Entity>,
}

impl GameEngine {
    /// Create a new engine with the given config.
    pub fn new(config: GameConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            mode: config.mode,
            difficulty: Difficulty::default(),
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            input: InputState::default(),
            auto_fire: false,
            fire_was_held: false,
            last_auto_fire_ms: 0.0,
            wave: 1,
            score: 0,
            lives: 0,
            budget: WaveBudget::default(),
            attack_timer: 0.0,
            boss: BossConfig::new(Difficulty::default()),
            regen_countdown_ms: None,
            indicators: Vec::new(),
            events: Vec::new(),
            high_scores: HighScores::default(),
            stats: WaveStats::default(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick of normalized duration `delta`
    /// (1.0 = one step at 60 steps/sec, clamped to `MAX_DELTA`) and return
    /// the resulting snapshot.
    pub fn tick(&mut self, delta: f64) -> GameSnapshot {
        let delta = delta.clamp(0.0, MAX_DELTA);

        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems(delta);
            self.time.advance(delta);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            self.mode,
            self.wave,
            self.score,
            self.lives,
            self.high_scores.best(self.mode),
            self.auto_fire,
            &self.boss,
            &self.budget,
            &self.indicators,
            &self.stats,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Replace the high-score table (e.g. with one loaded from disk).
    pub fn set_high_scores(&mut self, scores: HighScores) {
        self.high_scores = scores;
    }

    /// Get a read-only reference to the high-score table, e.g. to persist
    /// it after a game over.
    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub(crate) fn budget(&self) -> &WaveBudget {
        &self.budget
    }

    #[cfg(test)]
    pub(crate) fn boss_config(&self) -> &BossConfig {
        &self.boss
    }

    #[cfg(test)]
    pub(crate) fn regen_pending(&self) -> bool {
        self.regen_countdown_ms.is_some()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SelectMode { mode } => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.mode = mode;
                }
            }
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.start_game();
                }
            }
            PlayerCommand::SetInput {
                move_left,
                move_right,
                fire,
            } => {
                self.input = InputState {
                    move_left,
                    move_right,
                    fire,
                };
            }
            PlayerCommand::ToggleAutoFire => {
                self.auto_fire = !self.auto_fire;
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase == GamePhase::GameOver {
                    self.phase = GamePhase::MainMenu;
                }
            }
        }
    }

    /// Reset session state and spawn the first wave.
    fn start_game(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.wave = 1;
        self.score = 0;
        self.lives = self.mode.settings().lives;
        self.budget.reset();
        self.attack_timer = 0.0;
        self.boss = BossConfig::new(self.difficulty);
        self.regen_countdown_ms = None;
        self.indicators.clear();
        self.stats = WaveStats::default();
        self.input = InputState::default();
        self.fire_was_held = false;
        self.last_auto_fire_ms = 0.0;

        self.world.spawn((
            PlayerShip,
            Position::new(self.canvas_width / 2.0, self.canvas_height - 50.0),
            Hitbox {
                width: PLAYER_WIDTH,
                height: PLAYER_HEIGHT,
            },
            PlayerStatus {
                base_speed: PLAYER_SPEED,
                ..Default::default()
            },
        ));

        formation::spawn_wave(
            &mut self.world,
            &mut self.rng,
            self.wave,
            self.mode,
            self.difficulty,
            &mut self.boss,
            self.canvas_width,
            self.canvas_height,
        );
        self.events.push(GameEvent::WaveStarted {
            wave: self.wave,
            boss_wave: formation::is_boss_wave(self.wave),
        });
        self.phase = GamePhase::Playing;
    }

    /// Current player position, for systems that aim at the ship.
    fn player_position(&self) -> Position {
        self.world
            .query::<(&PlayerShip, &Position)>()
            .iter()
            .next()
            .map(|(_, (_ship, pos))| *pos)
            .unwrap_or_default()
    }

    /// Run all systems in order.
    fn run_systems(&mut self, delta: f64) {
        let now_ms = self.time.now_ms;

        // 1. Player movement and firing
        systems::player::run(
            &mut self.world,
            self.input,
            self.auto_fire,
            &mut self.fire_was_held,
            &mut self.last_auto_fire_ms,
            &mut self.stats,
            self.canvas_width,
            now_ms,
            delta,
        );

        let player = self.player_position();

        // 2. Entry paths and idle sway
        systems::entry_path::run(&mut self.world, now_ms, delta);

        // 3. Attack selection (single and formation attacks)
        systems::attack_selector::run(
            &mut self.world,
            &mut self.rng,
            self.wave,
            self.mode,
            self.difficulty,
            &mut self.budget,
            &mut self.attack_timer,
            &mut self.indicators,
            &mut self.events,
            player,
            self.canvas_width,
            self.canvas_height,
            now_ms,
            delta,
        );

        // 4. Advance attacking enemies along their patterns
        systems::attack_patterns::run(
            &mut self.world,
            &mut self.rng,
            now_ms,
            delta,
            player,
            self.canvas_width,
            self.canvas_height,
        );

        // 5. Stochastic enemy fire and pattern volleys
        systems::shooting::run(
            &mut self.world,
            &mut self.rng,
            self.wave,
            self.mode,
            &mut self.budget,
            player,
            now_ms,
            delta,
        );

        // 6. Boss barrage cycles
        systems::boss_barrage::run(
            &mut self.world,
            &mut self.rng,
            self.wave,
            now_ms,
            delta,
            player,
        );

        // 7. Projectile and drop movement
        systems::movement::run(&mut self.world, delta);

        // 8. Collision resolution
        systems::collision::run(
            &mut self.world,
            &mut self.rng,
            self.wave,
            self.mode,
            self.difficulty,
            &mut self.boss,
            &mut self.score,
            &mut self.lives,
            &mut self.phase,
            &mut self.high_scores,
            &mut self.stats,
            &mut self.events,
            now_ms,
            self.canvas_width,
            self.canvas_height,
        );

        // 9. Timed power-up expiry
        systems::power_ups::sweep(&mut self.world, now_ms, &mut self.events);

        // 10. Indicator decay
        self.indicators.retain_mut(|indicator| {
            indicator.alpha -= INDICATOR_FADE_PER_STEP * delta;
            indicator.alpha > 0.0
        });

        // 11. Wave progression and regeneration
        systems::wave_progress::run(
            &mut self.world,
            &mut self.rng,
            &mut self.wave,
            self.mode,
            self.difficulty,
            &mut self.boss,
            &mut self.budget,
            &mut self.attack_timer,
            &mut self.regen_countdown_ms,
            &mut self.indicators,
            &mut self.stats,
            &mut self.events,
            &mut self.despawn_buffer,
            self.canvas_width,
            self.canvas_height,
            delta,
        );

        // 12. Off-canvas cleanup
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            self.canvas_width,
            self.canvas_height,
        );
    }
}
