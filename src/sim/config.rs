//! Engine configuration
//!
//! Loaded from JSON (every field optional, missing fields take the classic
//! board defaults) and validated once when a session starts.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Where the ball starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpawnPolicy {
    /// Horizontal center, `spawn_offset` above the floor
    #[default]
    Fixed,
    /// Uniform over the area where the ball touches no wall
    Random,
}

/// How the ball leaves the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BouncePolicy {
    /// Flip the vertical velocity, keep the horizontal one
    #[default]
    Simple,
    /// Steer by hit offset from the paddle center, up to +-45 degrees
    Angled,
}

impl SpawnPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnPolicy::Fixed => "fixed",
            SpawnPolicy::Random => "random",
        }
    }
}

impl BouncePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BouncePolicy::Simple => "simple",
            BouncePolicy::Angled => "angled",
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Block grid ===
    pub rows: u32,
    pub cols: u32,
    pub block_width: f32,
    pub block_height: f32,
    /// Spacing between neighbouring blocks, both axes
    pub block_gap: f32,
    /// Top-left corner of the first block
    pub grid_offset: Vec2,

    // === Ball ===
    pub ball_radius: f32,
    /// Speed magnitude used by the angled bounce (units per frame)
    pub ball_speed: f32,
    /// Velocity at session start (units per frame)
    pub initial_velocity: Vec2,
    /// Fixed spawn distance above the arena floor
    pub spawn_offset: f32,
    pub spawn_policy: SpawnPolicy,
    /// Seed for the random spawn policy; drawn from OS entropy when absent
    pub seed: Option<u64>,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub bounce_policy: BouncePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let initial_velocity = Vec2::new(BALL_START_DX, BALL_START_DY);
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            rows: BLOCK_ROWS,
            cols: BLOCK_COLS,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            block_gap: BLOCK_GAP,
            grid_offset: Vec2::ZERO,

            ball_radius: BALL_RADIUS,
            ball_speed: initial_velocity.length(),
            initial_velocity,
            spawn_offset: BALL_SPAWN_OFFSET,
            spawn_policy: SpawnPolicy::Fixed,
            seed: None,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            bounce_policy: BouncePolicy::Simple,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn fits(what: &'static str, size: f32, available: f32) -> Result<(), ConfigError> {
    if size <= available {
        Ok(())
    } else {
        Err(ConfigError::DoesNotFit {
            what,
            size,
            available,
        })
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded engine config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field; invalid values are rejected, never coerced.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("block_width", self.block_width)?;
        positive("block_height", self.block_height)?;
        non_negative("block_gap", self.block_gap)?;
        non_negative("grid_offset.x", self.grid_offset.x)?;
        non_negative("grid_offset.y", self.grid_offset.y)?;
        positive("ball_radius", self.ball_radius)?;
        positive("ball_speed", self.ball_speed)?;
        non_negative("spawn_offset", self.spawn_offset)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;

        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        // u64 so the product cannot wrap on 32-bit targets
        let count = u64::from(self.rows) * u64::from(self.cols);
        if count > MAX_BLOCKS as u64 {
            return Err(ConfigError::TooManyBlocks {
                count,
                max: MAX_BLOCKS,
            });
        }

        let v = self.initial_velocity;
        if !v.is_finite() || v == Vec2::ZERO {
            return Err(ConfigError::InvalidVelocity { dx: v.x, dy: v.y });
        }

        let diameter = self.ball_radius * 2.0;
        fits("ball diameter", diameter, self.arena_width)?;
        fits("ball diameter", diameter, self.arena_height)?;
        fits("paddle width", self.paddle_width, self.arena_width)?;
        fits("paddle height", self.paddle_height, self.arena_height)?;

        // The grid may hang past the right wall; each column must still be
        // reachable by the ball center.
        let (_, grid_h) = self.grid_extent();
        let last_col_x =
            self.grid_offset.x + (self.cols - 1) as f32 * (self.block_width + self.block_gap);
        if last_col_x >= self.arena_width - self.ball_radius {
            return Err(ConfigError::DoesNotFit {
                what: "last block column",
                size: last_col_x,
                available: self.arena_width - self.ball_radius,
            });
        }
        fits("block grid height", self.grid_offset.y + grid_h, self.arena_height)?;

        // The ball center never goes above `ball_radius` or left of it, so
        // the first column and the top row have to extend past that line.
        let first_col_right = self.grid_offset.x + self.block_width;
        if first_col_right <= self.ball_radius {
            return Err(ConfigError::OutOfReach {
                what: "first block column",
                edge: first_col_right,
                reach: self.ball_radius,
            });
        }
        let top_row_bottom = self.grid_offset.y + self.block_height;
        if top_row_bottom <= self.ball_radius {
            return Err(ConfigError::OutOfReach {
                what: "top block row",
                edge: top_row_bottom,
                reach: self.ball_radius,
            });
        }

        if self.spawn_policy == SpawnPolicy::Fixed {
            let spawn_y = self.arena_height - self.spawn_offset;
            if spawn_y < self.ball_radius || spawn_y > self.arena_height - self.ball_radius {
                return Err(ConfigError::DoesNotFit {
                    what: "fixed spawn point",
                    size: spawn_y,
                    available: self.arena_height - self.ball_radius,
                });
            }
        }

        Ok(())
    }

    /// Width and height covered by the block grid (no trailing gap)
    pub fn grid_extent(&self) -> (f32, f32) {
        let w = self.cols as f32 * self.block_width
            + self.cols.saturating_sub(1) as f32 * self.block_gap;
        let h = self.rows as f32 * self.block_height
            + self.rows.saturating_sub(1) as f32 * self.block_gap;
        (w, h)
    }

    /// Total number of blocks in the grid
    pub fn block_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}
