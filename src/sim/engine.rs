//! Session owner
//!
//! [`Engine`] is the only thing that mutates a session. The host calls
//! [`Engine::set_paddle_target`] on pointer movement and
//! [`Engine::advance_frame`] once per frame, then reads a [`Snapshot`].

use super::config::EngineConfig;
use super::snapshot::Snapshot;
use super::state::{GameState, SessionState};
use super::tick::{FrameEvents, TickInput, tick};
use crate::error::ConfigError;

/// A single block-breaker session
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    state: GameState,
}

impl Engine {
    /// Start a new session. Invalid configuration is rejected here and
    /// nowhere else.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config);
        log::info!(
            "Session started: {}x{} arena, {} blocks, spawn={}, bounce={}, seed={}",
            config.arena_width,
            config.arena_height,
            state.blocks.len(),
            config.spawn_policy.as_str(),
            config.bounce_policy.as_str(),
            state.seed
        );
        Ok(Self { config, state })
    }

    /// Start over with the same configuration. A configured seed replays
    /// the same spawn; without one a fresh seed is drawn.
    pub fn restart(&self) -> Self {
        let state = GameState::new(&self.config);
        log::info!("Session restarted, seed={}", state.seed);
        Self {
            config: self.config.clone(),
            state,
        }
    }

    /// Center the paddle on `x` (arena space). Targets outside
    /// `(0, arena_width)` are ignored, as is any input after the session
    /// ended.
    pub fn set_paddle_target(&mut self, x: f32) {
        if self.state.session.is_terminal() {
            return;
        }
        self.state.paddle.track(x, self.state.arena_width);
    }

    /// Run one frame. No-op once the session is Won or Lost.
    pub fn advance_frame(&mut self) {
        self.step(&TickInput::default());
    }

    /// Run one frame with explicit input and report what happened
    pub fn step(&mut self, input: &TickInput) -> FrameEvents {
        tick(&mut self.state, input, &self.config)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    pub fn state(&self) -> SessionState {
        self.state.session
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Full internal state, for inspection
    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    pub fn frame(&self) -> u64 {
        self.state.frame
    }

    pub fn seed(&self) -> u64 {
        self.state.seed
    }
}
