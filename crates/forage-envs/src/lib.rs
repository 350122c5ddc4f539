//! Built-in environments for Forage.
//!
//! Provides the two self-contained simulation environments:
//! - `Maze` - Procedural maze foraging with a depleting life resource
//! - `Prisoner` - Iterated two-player matrix game with a four-stage
//!   turn cycle

mod maze;
mod prisoner;

pub use maze::{
    generate, Cell, Direction, DistanceField, Generated, Grid, Maze, MazeConfig, Position,
    TraceEntry,
};
pub use prisoner::Prisoner;
