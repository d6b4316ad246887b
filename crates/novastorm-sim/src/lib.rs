//! NOVASTORM simulation engine.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands, runs
//! all systems in a fixed order each tick, and produces `GameSnapshot`s.
//! Completely headless (no rendering, audio, or input dependency),
//! enabling deterministic testing: equal seeds and command streams yield
//! identical snapshot streams.

pub mod boss;
pub mod engine;
pub mod formation;
pub mod scores;
pub mod systems;
pub mod waves;
