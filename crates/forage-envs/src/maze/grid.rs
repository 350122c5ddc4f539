//! Maze grid generation.
//!
//! Builds a bordered, perfectly-connected grid with extra shortcut
//! passages, picks a start cell, and places food along the distance
//! field. Topology is immutable after generation except for food
//! consumption and clearing of the start marker during play.

use forage::{EnvError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use super::distance::DistanceField;

/// Logical cell kinds.
///
/// Render-only overlay kinds (visited/eaten) are a separate alphabet in
/// the renderer and can never appear in a `Grid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Start,
    Food,
}

impl Cell {
    pub fn name(self) -> &'static str {
        match self {
            Cell::Empty => "empty",
            Cell::Wall => "wall",
            Cell::Start => "start",
            Cell::Food => "food",
        }
    }
}

/// Integer cell coordinates within the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offset by a signed delta, possibly landing out of bounds
    pub fn offset(self, dx: isize, dy: isize) -> (isize, isize) {
        (self.x as isize + dx, self.y as isize + dy)
    }
}

/// Row-major grid of cell kinds
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub(crate) fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell at an in-bounds position
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.idx(pos.x, pos.y)]
    }

    /// Cell at signed coordinates; anything outside the grid reads as
    /// `Wall`, so the boundary is handled uniformly.
    pub fn cell_at(&self, x: isize, y: isize) -> Cell {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Cell::Wall;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        let i = self.idx(pos.x, pos.y);
        self.cells[i] = cell;
    }

    /// All interior positions holding `cell`, in row-major order
    fn find_all(&self, cell: Cell) -> Vec<Position> {
        let mut out = Vec::new();
        for y in 1..self.height - 1 {
            for x in 1..self.width - 1 {
                let pos = Position::new(x, y);
                if self.get(pos) == cell {
                    out.push(pos);
                }
            }
        }
        out
    }
}

/// Maze environment configuration
#[derive(Clone, Debug)]
pub struct MazeConfig {
    /// Grid width including the wall border. Forced odd and at least 5.
    pub width: usize,
    /// Grid height including the wall border. Forced odd and at least 5.
    pub height: usize,
    /// Food is placed on every cell whose distance from the start is a
    /// multiple of this interval (1 = every reachable cell).
    pub food_every: u32,
    /// Starting life; each successful move costs 1, each food restores 2.
    pub max_life: u32,
    /// Radius of the square observation window around the agent.
    pub observation_radius: usize,
}

impl MazeConfig {
    /// Observation vector length: a 3-wide one-hot per window cell plus
    /// the life scalar.
    pub fn observation_dims(&self) -> usize {
        let side = 2 * self.observation_radius + 1;
        side * side * 3 + 1
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 31,
            height: 31,
            food_every: 1,
            max_life: 20,
            observation_radius: 3,
        }
    }
}

/// Everything produced by one generation pass
#[derive(Clone, Debug)]
pub struct Generated {
    pub grid: Grid,
    pub start: Position,
    pub distances: DistanceField,
    /// Cells of the maximum-distance shortest path, farthest first,
    /// ending next to the start.
    pub longest_path: Vec<Position>,
}

/// Generate a maze grid.
///
/// The result is always fully connected: every `Empty` cell is reachable
/// from the start, and the border ring is entirely `Wall`.
pub fn generate<R: Rng>(config: &MazeConfig, rng: &mut R) -> Result<Generated> {
    // Room lattice needs odd dimensions; clamp rather than reject.
    let width = config.width.max(5) | 1;
    let height = config.height.max(5) | 1;

    let mut grid = Grid::filled(width, height, Cell::Wall);
    carve_rooms(&mut grid, rng);

    let start = *grid
        .find_all(Cell::Empty)
        .choose(rng)
        .ok_or_else(|| EnvError::GenerationInvariant("no empty cell to start from".into()))?;

    // Shortcut budget scales with the larger (clamped) dimension.
    let shortcuts = carve_shortcuts(&mut grid, width.max(height) * 3, rng);

    let distances = DistanceField::from_grid(&grid, start);
    let longest_path = distances.longest_path();

    let food_every = config.food_every.max(1);
    for y in 0..height {
        for x in 0..width {
            let pos = Position::new(x, y);
            if let Some(d) = distances.get(pos) {
                if d % food_every == 0 {
                    grid.set(pos, Cell::Food);
                }
            }
        }
    }
    grid.set(start, Cell::Start);

    tracing::debug!(
        width,
        height,
        shortcuts,
        longest = longest_path.len(),
        "generated maze grid"
    );

    Ok(Generated {
        grid,
        start,
        distances,
        longest_path,
    })
}

// Rooms live on the odd-coordinate lattice; carving opens the wall cell
// between two rooms. Iterative backtracker, so stack depth is constant.
fn carve_rooms<R: Rng>(grid: &mut Grid, rng: &mut R) {
    const ROOM_STEPS: [(isize, isize); 4] = [(0, -2), (0, 2), (-2, 0), (2, 0)];

    let first = Position::new(1, 1);
    grid.set(first, Cell::Empty);

    let mut stack = vec![first];
    while let Some(&room) = stack.last() {
        let mut unvisited: [(Position, Position); 4] = [(room, room); 4];
        let mut n = 0usize;

        for (dx, dy) in ROOM_STEPS {
            let (nx, ny) = room.offset(dx, dy);
            if grid.cell_at(nx, ny) != Cell::Wall {
                continue;
            }
            if nx < 1
                || ny < 1
                || nx as usize >= grid.width() - 1
                || ny as usize >= grid.height() - 1
            {
                continue;
            }
            let next = Position::new(nx as usize, ny as usize);
            let wall = Position::new(
                (room.x + next.x) / 2,
                (room.y + next.y) / 2,
            );
            unvisited[n] = (wall, next);
            n += 1;
        }

        if n == 0 {
            stack.pop();
            continue;
        }

        let (wall, next) = unvisited[rng.gen_range(0..n)];
        grid.set(wall, Cell::Empty);
        grid.set(next, Cell::Empty);
        stack.push(next);
    }
}

// A shortcut candidate is an interior wall separating exactly two empty
// cells horizontally or vertically. Removing one merges two passages that
// are already connected through the spanning tree, so connectivity is
// preserved while cycles appear.
fn carve_shortcuts<R: Rng>(grid: &mut Grid, budget: usize, rng: &mut R) -> usize {
    let mut candidates = Vec::new();
    for y in 1..grid.height() - 1 {
        for x in 1..grid.width() - 1 {
            let pos = Position::new(x, y);
            if grid.get(pos) != Cell::Wall {
                continue;
            }
            let (x, y) = (x as isize, y as isize);
            let horizontal =
                grid.cell_at(x - 1, y) == Cell::Empty && grid.cell_at(x + 1, y) == Cell::Empty;
            let vertical =
                grid.cell_at(x, y - 1) == Cell::Empty && grid.cell_at(x, y + 1) == Cell::Empty;
            if horizontal || vertical {
                candidates.push(pos);
            }
        }
    }

    candidates.shuffle(rng);
    let carved = candidates.len().min(budget);
    for &pos in &candidates[..carved] {
        grid.set(pos, Cell::Empty);
    }
    carved
}
