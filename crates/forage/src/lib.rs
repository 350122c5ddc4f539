//! # Forage
//!
//! Self-contained simulation environments for reinforcement learning.
//!
//! ## Overview
//!
//! Forage provides:
//! - The [`Environment`](env::Environment) trait — the uniform contract a
//!   training loop drives: reset, observe, action masking, stepping,
//!   termination, and plain-text rendering
//! - Environment wrappers such as [`EpisodeStats`](env::EpisodeStats)
//! - A shared error taxonomy distinguishing fatal logic defects from
//!   ordinary step outcomes
//!
//! Environment implementations live in the `forage-envs` crate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use forage::env::Environment;
//! use forage_envs::Maze;
//!
//! let mut env = Maze::seeded(42)?;
//! env.reset()?;
//!
//! let obs = env.observe()?;
//! let mask = env.action_mask();
//! let reward = env.step(0)?;
//! ```

pub mod env;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::env::{Environment, EpisodeStats};
    pub use crate::{EnvError, Result};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// A guarantee of the generation phase was broken. Signals a logic
    /// defect; the episode should be aborted, not retried.
    #[error("generation invariant violated: {0}")]
    GenerationInvariant(String),

    /// A cell kind that `observe()` does not recognize was visible in the
    /// observation window. Transient render-only kinds must never exist
    /// outside rendering, so this too signals a logic defect.
    #[error("unexpected {cell} cell at ({x}, {y}) in observation window")]
    ObservationInconsistency {
        x: usize,
        y: usize,
        cell: &'static str,
    },

    /// Action index outside `0..dims`. Distinct from a legal-but-blocked
    /// action, which is an ordinary step outcome with reward 0.
    #[error("action {action} out of range for {dims} actions")]
    InvalidAction { action: usize, dims: usize },
}

pub type Result<T> = core::result::Result<T, EnvError>;
