//! Shortest-path distance field and longest-path extraction.

use std::collections::VecDeque;

use super::grid::{Cell, Grid, Position};

// Orthogonal neighbor order: left, right, up, down. The order is the
// tie-break rule for the backward walk in `longest_path`.
const NEIGHBOR_STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Per-cell shortest distance (in orthogonal moves) from the start cell,
/// `None` where unreachable.
///
/// Invariant: the start holds `Some(0)`, and every reachable cell has an
/// orthogonal neighbor exactly one step closer.
#[derive(Clone, Debug)]
pub struct DistanceField {
    width: usize,
    height: usize,
    cells: Vec<Option<u32>>,
}

impl DistanceField {
    /// Breadth-first flood fill from `start` over `Empty` cells.
    ///
    /// One pass yields true shortest-path distances regardless of the
    /// cycles introduced by shortcut carving, with work bounded by the
    /// grid area.
    pub fn from_grid(grid: &Grid, start: Position) -> Self {
        let width = grid.width();
        let height = grid.height();
        let mut cells = vec![None; width * height];

        let mut frontier = VecDeque::new();
        if grid.get(start) == Cell::Empty {
            cells[start.y * width + start.x] = Some(0);
            frontier.push_back((start, 0u32));
        }

        while let Some((pos, d)) = frontier.pop_front() {
            for (dx, dy) in NEIGHBOR_STEPS {
                let (nx, ny) = pos.offset(dx, dy);
                if grid.cell_at(nx, ny) != Cell::Empty {
                    continue;
                }
                let next = Position::new(nx as usize, ny as usize);
                let slot = &mut cells[next.y * width + next.x];
                if slot.is_none() {
                    *slot = Some(d + 1);
                    frontier.push_back((next, d + 1));
                }
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    /// Distance at an in-bounds position
    pub fn get(&self, pos: Position) -> Option<u32> {
        self.cells[pos.y * self.width + pos.x]
    }

    fn at(&self, x: isize, y: isize) -> Option<u32> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// Maximum finite distance and its cell, first hit in row-major scan
    /// order winning ties. `None` when the field is entirely unreachable.
    pub fn max_cell(&self) -> Option<(Position, u32)> {
        let mut best: Option<(Position, u32)> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Position::new(x, y);
                if let Some(d) = self.get(pos) {
                    if best.map_or(true, |(_, bd)| d > bd) {
                        best = Some((pos, d));
                    }
                }
            }
        }
        best
    }

    /// Walk greedily backward from the farthest cell to the start,
    /// choosing at each step the first orthogonal neighbor exactly one
    /// step closer (left, right, up, down). The returned path is farthest
    /// first, excludes the start itself, and its length equals the
    /// maximum finite distance.
    pub fn longest_path(&self) -> Vec<Position> {
        let Some((mut pos, mut d)) = self.max_cell() else {
            return Vec::new();
        };

        let mut path = Vec::with_capacity(d as usize);
        while d > 0 {
            path.push(pos);
            d -= 1;

            let closer = NEIGHBOR_STEPS.iter().find_map(|&(dx, dy)| {
                let (nx, ny) = pos.offset(dx, dy);
                (self.at(nx, ny) == Some(d)).then(|| Position::new(nx as usize, ny as usize))
            });
            match closer {
                Some(next) => pos = next,
                // Unreachable while the field invariant holds.
                None => break,
            }
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 5x4 grid with an L-shaped corridor:
    //   #####
    //   #   #
    //   ### #
    //   #####
    fn corridor() -> (Grid, Position) {
        let mut grid = Grid::filled(5, 4, Cell::Wall);
        for pos in [
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(3, 1),
            Position::new(3, 2),
        ] {
            grid.set(pos, Cell::Empty);
        }
        (grid, Position::new(1, 1))
    }

    #[test]
    fn test_corridor_distances() {
        let (grid, start) = corridor();
        let field = DistanceField::from_grid(&grid, start);

        assert_eq!(field.get(start), Some(0));
        assert_eq!(field.get(Position::new(2, 1)), Some(1));
        assert_eq!(field.get(Position::new(3, 1)), Some(2));
        assert_eq!(field.get(Position::new(3, 2)), Some(3));
        assert_eq!(field.get(Position::new(1, 2)), None);
    }

    #[test]
    fn test_corridor_longest_path() {
        let (grid, start) = corridor();
        let field = DistanceField::from_grid(&grid, start);

        let path = field.longest_path();
        assert_eq!(
            path,
            vec![
                Position::new(3, 2),
                Position::new(3, 1),
                Position::new(2, 1),
            ]
        );
        assert_eq!(path.len() as u32, field.max_cell().unwrap().1);
    }

    #[test]
    fn test_start_on_wall_is_unreachable_everywhere() {
        let (grid, _) = corridor();
        let field = DistanceField::from_grid(&grid, Position::new(2, 2));
        assert_eq!(field.max_cell(), None);
        assert!(field.longest_path().is_empty());
    }
}
