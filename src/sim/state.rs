//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives in [`GameState`]. It is built
//! once per session from a validated [`EngineConfig`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::config::{EngineConfig, SpawnPolicy};

/// Session outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Frames advance the simulation
    Playing,
    /// Every block destroyed
    Won,
    /// Ball dropped past the paddle
    Lost,
}

impl SessionState {
    /// Won and Lost are absorbing
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Playing => "playing",
            SessionState::Won => "won",
            SessionState::Lost => "lost",
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center, arena-local
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    pub radius: f32,
}

/// The player's paddle, pinned to the arena floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centered horizontally in an arena of the given width
    pub fn centered(arena_width: f32, width: f32, height: f32) -> Self {
        Self {
            x: (arena_width - width) / 2.0,
            width,
            height,
        }
    }

    /// Move so the paddle center sits at `center_x`, unless `center_x` is
    /// outside `(0, arena_width)`. Out-of-range targets are dropped, not
    /// clamped. Returns whether the paddle moved.
    pub fn track(&mut self, center_x: f32, arena_width: f32) -> bool {
        if center_x > 0.0 && center_x < arena_width {
            self.x = center_x - self.width / 2.0;
            true
        } else {
            false
        }
    }
}

/// A destructible block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    /// Only ever goes false -> true
    pub destroyed: bool,
}

impl Block {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            destroyed: false,
        }
    }
}

/// Lay out the block grid in column-major order: column 0 top to bottom,
/// then column 1, and so on. Collision scans and snapshots use this order.
pub fn build_grid(config: &EngineConfig) -> Vec<Block> {
    let step_x = config.block_width + config.block_gap;
    let step_y = config.block_height + config.block_gap;

    let mut blocks = Vec::with_capacity(config.block_count());
    for col in 0..config.cols {
        for row in 0..config.rows {
            blocks.push(Block::new(Rect::new(
                config.grid_offset.x + col as f32 * step_x,
                config.grid_offset.y + row as f32 * step_y,
                config.block_width,
                config.block_height,
            )));
        }
    }
    blocks
}

/// Pick the ball's starting center according to the spawn policy
pub fn spawn_position(config: &EngineConfig, rng: &mut Pcg32) -> Vec2 {
    let r = config.ball_radius;
    match config.spawn_policy {
        SpawnPolicy::Fixed => Vec2::new(
            config.arena_width / 2.0,
            config.arena_height - config.spawn_offset,
        ),
        SpawnPolicy::Random => Vec2::new(
            rng.random_range(r..=config.arena_width - r),
            rng.random_range(r..=config.arena_height - r),
        ),
    }
}

/// Complete per-session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena_width: f32,
    pub arena_height: f32,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Column-major grid order
    pub blocks: Vec<Block>,
    pub session: SessionState,
    /// Completed Playing frames
    pub frame: u64,
    /// Seed the spawn RNG was created from
    pub seed: u64,
}

impl GameState {
    /// Build the opening position. `config` must already be validated.
    pub fn new(config: &EngineConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = Pcg32::seed_from_u64(seed);

        let ball = Ball {
            pos: spawn_position(config, &mut rng),
            vel: config.initial_velocity,
            radius: config.ball_radius,
        };

        Self {
            arena_width: config.arena_width,
            arena_height: config.arena_height,
            ball,
            paddle: Paddle::centered(config.arena_width, config.paddle_width, config.paddle_height),
            blocks: build_grid(config),
            session: SessionState::Playing,
            frame: 0,
            seed,
        }
    }

    pub fn destroyed_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.destroyed).count()
    }

    pub fn remaining_blocks(&self) -> usize {
        self.blocks.len() - self.destroyed_count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.blocks.iter().all(|b| b.destroyed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_column_major() {
        let config = EngineConfig::default();
        let blocks = build_grid(&config);
        assert_eq!(blocks.len(), 25);

        // Second block is row 1 of column 0
        assert_eq!(blocks[1].rect, Rect::new(0.0, 30.0, 75.0, 20.0));
        // Sixth block starts column 1
        assert_eq!(blocks[5].rect, Rect::new(85.0, 0.0, 75.0, 20.0));
        assert_eq!(blocks[24].rect, Rect::new(340.0, 120.0, 75.0, 20.0));
        assert!(blocks.iter().all(|b| !b.destroyed));
    }

    #[test]
    fn test_grid_offset_applies() {
        let config = EngineConfig {
            grid_offset: Vec2::new(5.0, 40.0),
            rows: 1,
            cols: 2,
            ..Default::default()
        };
        let blocks = build_grid(&config);
        assert_eq!(blocks[0].rect.x, 5.0);
        assert_eq!(blocks[0].rect.y, 40.0);
        assert_eq!(blocks[1].rect.x, 90.0);
    }

    #[test]
    fn test_initial_state_fixed_spawn() {
        let state = GameState::new(&EngineConfig::default());
        assert_eq!(state.session, SessionState::Playing);
        assert_eq!(state.ball.pos, Vec2::new(205.0, 370.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.paddle.x, 167.5);
        assert_eq!(state.frame, 0);
        assert_eq!(state.destroyed_count(), 0);
        assert_eq!(state.remaining_blocks(), 25);
    }

    #[test]
    fn test_random_spawn_is_seeded() {
        let config = EngineConfig {
            spawn_policy: SpawnPolicy::Random,
            seed: Some(42),
            ..Default::default()
        };
        let a = GameState::new(&config);
        let b = GameState::new(&config);
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.seed, 42);
    }

    #[test]
    fn test_random_spawn_stays_off_walls() {
        for seed in 0..200 {
            let config = EngineConfig {
                spawn_policy: SpawnPolicy::Random,
                seed: Some(seed),
                ..Default::default()
            };
            let state = GameState::new(&config);
            let p = state.ball.pos;
            let r = config.ball_radius;
            assert!(p.x >= r && p.x <= config.arena_width - r, "seed {seed}: {p}");
            assert!(p.y >= r && p.y <= config.arena_height - r, "seed {seed}: {p}");
        }
    }

    #[test]
    fn test_session_state_json_matches_as_str() {
        for state in [SessionState::Playing, SessionState::Won, SessionState::Lost] {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_str()));
            let back: SessionState = serde_json::from_str(&json).unwrap();
            assert_eq!(back, state);
        }
    }

    #[test]
    fn test_all_destroyed_tracks_remaining() {
        let mut state = GameState::new(&EngineConfig::default());
        for block in state.blocks.iter_mut().skip(1) {
            block.destroyed = true;
        }
        assert_eq!(state.remaining_blocks(), 1);
        assert!(!state.all_destroyed());
        state.blocks[0].destroyed = true;
        assert_eq!(state.remaining_blocks(), 0);
        assert!(state.all_destroyed());
    }

    #[test]
    fn test_paddle_track_rejects_out_of_range() {
        let mut paddle = Paddle::centered(410.0, 75.0, 10.0);
        assert!(paddle.track(100.0, 410.0));
        assert_eq!(paddle.x, 62.5);

        assert!(!paddle.track(0.0, 410.0));
        assert!(!paddle.track(-20.0, 410.0));
        assert!(!paddle.track(410.0, 410.0));
        assert_eq!(paddle.x, 62.5);
    }
}
