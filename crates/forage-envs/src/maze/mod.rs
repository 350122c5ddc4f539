//! Procedural maze foraging environment.
//!
//! The agent wanders a generated maze with a depleting life budget:
//! every successful move costs one life, food restores two (capped), and
//! the episode ends when life runs out. Blocked moves are wasted but
//! free. See [`MazeConfig`] for the tunables.

mod distance;
mod grid;
mod render;

pub use distance::DistanceField;
pub use grid::{generate, Cell, Generated, Grid, MazeConfig, Position};

use forage::env::Environment;
use forage::{EnvError, Result};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One successful move: where the agent landed and whether it ate there.
/// Consumed only by rendering, never read back into simulation logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    pub position: Position,
    pub ate_food: bool,
}

/// The four movement actions, in action-index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Maze environment
///
/// Owns one generated grid plus the episode state: current position,
/// step counter, remaining life, and the movement trace. The grid is
/// regenerated from the environment's RNG on every `reset()`.
pub struct Maze {
    config: MazeConfig,
    rng: StdRng,
    grid: Grid,
    distances: DistanceField,
    longest_path: Vec<Position>,
    start: Position,
    current: Position,
    steps: u64,
    life: u32,
    trace: Vec<TraceEntry>,
}

impl Maze {
    pub const ACTION_DIMS: usize = 4;
    pub const OBSERVATION_DIMS: usize = 148;
    pub const PLAYER_COUNT: usize = 1;

    /// Create with the default configuration and an entropy-seeded RNG
    pub fn new() -> Result<Self> {
        Self::with_config(MazeConfig::default())
    }

    /// Create with the default configuration and a fixed seed
    pub fn seeded(seed: u64) -> Result<Self> {
        Self::with_config_seeded(MazeConfig::default(), seed)
    }

    /// Create with a custom configuration
    pub fn with_config(config: MazeConfig) -> Result<Self> {
        Self::build(config, StdRng::from_entropy())
    }

    /// Create with a custom configuration and a fixed seed
    pub fn with_config_seeded(config: MazeConfig, seed: u64) -> Result<Self> {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: MazeConfig, mut rng: StdRng) -> Result<Self> {
        let generated = Self::adopt(grid::generate(&config, &mut rng)?)?;
        let life = config.max_life;
        Ok(Self {
            config,
            rng,
            start: generated.start,
            current: generated.start,
            grid: generated.grid,
            distances: generated.distances,
            longest_path: generated.longest_path,
            steps: 0,
            life,
            trace: Vec::new(),
        })
    }

    // Verify the generation invariant and clear the start marker back to
    // empty so it plays as open floor.
    fn adopt(mut generated: Generated) -> Result<Generated> {
        let start = generated.start;
        if generated.grid.get(start) != Cell::Start {
            return Err(EnvError::GenerationInvariant(format!(
                "start marker missing at ({}, {})",
                start.x, start.y
            )));
        }
        generated.grid.set(start, Cell::Empty);
        Ok(generated)
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Current agent position
    pub fn position(&self) -> Position {
        self.current
    }

    /// Start cell of the current grid
    pub fn start(&self) -> Position {
        self.start
    }

    /// Remaining life
    pub fn life(&self) -> u32 {
        self.life
    }

    /// Actions taken this episode, including blocked moves
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// The current logical grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Distance-from-start field of the current grid
    pub fn distances(&self) -> &DistanceField {
        &self.distances
    }

    /// Maximum-distance shortest path of the current grid, farthest first
    pub fn longest_path(&self) -> &[Position] {
        &self.longest_path
    }
}

impl Environment for Maze {
    fn name(&self) -> &'static str {
        "maze"
    }

    fn action_dims(&self) -> usize {
        Self::ACTION_DIMS
    }

    fn observation_dims(&self) -> usize {
        self.config.observation_dims()
    }

    fn player_count(&self) -> usize {
        Self::PLAYER_COUNT
    }

    fn reset(&mut self) -> Result<()> {
        let generated = Self::adopt(grid::generate(&self.config, &mut self.rng)?)?;
        self.start = generated.start;
        self.current = generated.start;
        self.grid = generated.grid;
        self.distances = generated.distances;
        self.longest_path = generated.longest_path;
        self.steps = 0;
        self.life = self.config.max_life;
        self.trace.clear();
        Ok(())
    }

    fn observe(&self) -> Result<Array1<f32>> {
        let radius = self.config.observation_radius as isize;
        let mut out = Vec::with_capacity(self.observation_dims());

        for dx in -radius..=radius {
            for dy in -radius..=radius {
                let (x, y) = self.current.offset(dx, dy);
                match self.grid.cell_at(x, y) {
                    Cell::Empty => out.extend_from_slice(&[1.0, 0.0, 0.0]),
                    Cell::Wall => out.extend_from_slice(&[0.0, 1.0, 0.0]),
                    Cell::Food => out.extend_from_slice(&[0.0, 0.0, 1.0]),
                    // Start is cleared in reset() and render markers never
                    // exist outside the renderer, so this is a defect.
                    other => {
                        return Err(EnvError::ObservationInconsistency {
                            x: x as usize,
                            y: y as usize,
                            cell: other.name(),
                        })
                    }
                }
            }
        }
        out.push(self.life as f32 / self.config.max_life as f32);

        Ok(Array1::from_vec(out))
    }

    fn action_mask(&self) -> Vec<bool> {
        Direction::ALL
            .iter()
            .map(|dir| {
                let (dx, dy) = dir.offset();
                let (x, y) = self.current.offset(dx, dy);
                self.grid.cell_at(x, y) != Cell::Wall
            })
            .collect()
    }

    fn step(&mut self, action: usize) -> Result<f32> {
        let direction = Direction::from_index(action).ok_or(EnvError::InvalidAction {
            action,
            dims: Self::ACTION_DIMS,
        })?;

        if self.is_finished() {
            return Ok(0.0);
        }
        self.steps += 1;

        let (dx, dy) = direction.offset();
        let (x, y) = self.current.offset(dx, dy);
        if self.grid.cell_at(x, y) == Cell::Wall {
            // Wasted move: no movement and no life cost.
            return Ok(0.0);
        }
        let target = Position::new(x as usize, y as usize);

        self.life -= 1;
        self.current = target;

        let ate_food = self.grid.get(target) == Cell::Food;
        self.trace.push(TraceEntry {
            position: target,
            ate_food,
        });

        if ate_food {
            self.life = (self.life + 2).min(self.config.max_life);
            self.grid.set(target, Cell::Empty);
            Ok(0.1)
        } else {
            Ok(0.0)
        }
    }

    fn is_finished(&self) -> bool {
        self.life == 0
    }

    fn render(&self) -> String {
        render::render_trace(&self.grid, self.start, &self.trace, self.steps)
    }
}
