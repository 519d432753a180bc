//! Block Breaker - a rectangular arena Breakout/Pong simulation
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (ball, paddle, block grid)
//! - `error`: Configuration errors reported at session start
//! - `web`: wasm-bindgen host binding (wasm32 only)
//!
//! Rendering, pointer capture and frame pacing belong to the host. The host
//! feeds paddle targets in, calls [`sim::Engine::advance_frame`] once per
//! frame and draws the [`sim::Snapshot`] it reads back.

pub mod error;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::ConfigError;
pub use sim::{BouncePolicy, Engine, EngineConfig, SessionState, Snapshot, SpawnPolicy};

/// Default configuration constants (the classic 410x400 board)
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 410.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Block grid layout
    pub const BLOCK_ROWS: u32 = 5;
    pub const BLOCK_COLS: u32 = 5;
    pub const BLOCK_WIDTH: f32 = 75.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_GAP: f32 = 10.0;
    /// Largest grid a session accepts
    pub const MAX_BLOCKS: usize = 10_000;

    /// Paddle defaults (pinned to the arena floor)
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Initial velocity in units per frame (up and to the right)
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;
    /// Distance above the floor for the fixed spawn point
    pub const BALL_SPAWN_OFFSET: f32 = 30.0;

    /// Maximum deflection off the paddle edge for the angled bounce
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
}
