//! Configuration error types
//!
//! Everything that can go wrong is caught when a session is created.
//! Once an [`Engine`](crate::sim::Engine) exists, frames never fail.

use thiserror::Error;

/// Errors reported while building or loading an engine configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A length that must be strictly positive was zero, negative or NaN.
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A length that may be zero was negative or NaN.
    #[error("{field} must be a non-negative finite number, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// The block grid has no rows or no columns.
    #[error("block grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid {
        /// Configured row count.
        rows: u32,
        /// Configured column count.
        cols: u32,
    },

    /// The block grid has more blocks than a session supports.
    #[error("block grid has {count} blocks, at most {max} are supported")]
    TooManyBlocks {
        /// Configured rows times columns.
        count: u64,
        /// Upper limit.
        max: usize,
    },

    /// Part of the block grid lies where the ball center can never go.
    #[error("{what} ends at {edge}, the ball center never gets past {reach}")]
    OutOfReach {
        /// Which part of the grid.
        what: &'static str,
        /// Far edge of that part.
        edge: f32,
        /// Closest the ball center gets to the wall.
        reach: f32,
    },

    /// The initial velocity is zero or not finite.
    #[error("initial velocity must be finite and non-zero, got ({dx}, {dy})")]
    InvalidVelocity {
        /// Horizontal component.
        dx: f32,
        /// Vertical component.
        dy: f32,
    },

    /// Some element does not fit inside the arena.
    #[error("{what} ({size}) does not fit in the arena ({available})")]
    DoesNotFit {
        /// What was too large.
        what: &'static str,
        /// Required extent.
        size: f32,
        /// Available extent.
        available: f32,
    },

    /// Configuration JSON could not be parsed.
    #[error("invalid configuration json: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}
