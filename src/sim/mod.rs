//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - One step per host frame, no wall-clock time
//! - Seeded RNG only (random spawn)
//! - Stable iteration order (column-major block grid)
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod engine;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Rect, VerticalHit, paddle_bounce, relative_hit_position};
pub use config::{BouncePolicy, EngineConfig, SpawnPolicy};
pub use engine::Engine;
pub use snapshot::{BallView, BlockView, PaddleView, Snapshot};
pub use state::{Ball, Block, GameState, Paddle, SessionState, build_grid};
pub use tick::{FrameEvents, TickInput, tick};
