//! ASCII rendering of a maze episode.
//!
//! The renderer works on a throwaway overlay buffer, never on the logical
//! grid, so rendering is idempotent and transient markers cannot leak
//! into simulation state.

use super::grid::{Cell, Grid, Position};
use super::TraceEntry;

/// Overlay alphabet: a logical cell or a trace marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Overlay {
    Base(Cell),
    Visited,
    Eaten,
}

fn glyph(cell: Overlay) -> char {
    match cell {
        Overlay::Base(Cell::Empty) => ' ',
        Overlay::Base(Cell::Wall) => '#',
        Overlay::Base(Cell::Food) => '.',
        Overlay::Base(Cell::Start) => 'S',
        Overlay::Visited => '-',
        Overlay::Eaten => '+',
    }
}

/// Serialize the grid with the episode trace overlaid.
///
/// Each traced position becomes a visited or eaten marker, the start cell
/// is re-marked, and the first line reports the step counter.
pub(super) fn render_trace(
    grid: &Grid,
    start: Position,
    trace: &[TraceEntry],
    steps: u64,
) -> String {
    let width = grid.width();
    let height = grid.height();

    let mut buf = vec![Overlay::Base(Cell::Wall); width * height];
    for y in 0..height {
        for x in 0..width {
            buf[y * width + x] = Overlay::Base(grid.get(Position::new(x, y)));
        }
    }

    for entry in trace {
        let marker = if entry.ate_food {
            Overlay::Eaten
        } else {
            Overlay::Visited
        };
        buf[entry.position.y * width + entry.position.x] = marker;
    }
    buf[start.y * width + start.x] = Overlay::Base(Cell::Start);

    // One glyph per cell, one newline per row, plus the header.
    let mut out = String::with_capacity((width + 1) * (height + 1) + 16);
    out.push_str(&format!("Steps: {steps}\n"));
    for y in 0..height {
        for x in 0..width {
            out.push(glyph(buf[y * width + x]));
        }
        if y + 1 < height {
            out.push('\n');
        }
    }
    out
}
