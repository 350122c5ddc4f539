//! Property tests for maze generation and episode semantics.

use forage::env::Environment;
use forage_envs::{Cell, Direction, Maze, MazeConfig, Position};

const SEEDS: [u64; 8] = [0, 1, 2, 3, 42, 99, 1234, 0xDEAD_BEEF];

/// A config with food too sparse to ever appear on the floor, so every
/// successful move costs life with no way to earn it back.
fn foodless_config() -> MazeConfig {
    MazeConfig {
        food_every: 10_000,
        ..MazeConfig::default()
    }
}

fn first_legal_action(env: &Maze) -> usize {
    env.action_mask()
        .iter()
        .position(|&legal| legal)
        .expect("reachable cell must have a legal move")
}

#[test]
fn border_is_wall_for_all_seeds() {
    for seed in SEEDS {
        let env = Maze::seeded(seed).unwrap();
        let grid = env.grid();
        let (w, h) = (grid.width(), grid.height());
        for x in 0..w {
            assert_eq!(grid.get(Position::new(x, 0)), Cell::Wall);
            assert_eq!(grid.get(Position::new(x, h - 1)), Cell::Wall);
        }
        for y in 0..h {
            assert_eq!(grid.get(Position::new(0, y)), Cell::Wall);
            assert_eq!(grid.get(Position::new(w - 1, y)), Cell::Wall);
        }
    }
}

#[test]
fn start_distance_is_zero_and_food_is_reachable() {
    for seed in SEEDS {
        let env = Maze::seeded(seed).unwrap();
        assert_eq!(env.distances().get(env.start()), Some(0));

        let grid = env.grid();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let pos = Position::new(x, y);
                if grid.get(pos) == Cell::Food {
                    assert!(
                        env.distances().get(pos).is_some(),
                        "seed {seed}: unreachable food at {pos:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn longest_path_is_an_adjacent_descending_chain() {
    for seed in SEEDS {
        let env = Maze::seeded(seed).unwrap();
        let path = env.longest_path();
        let (_, max_distance) = env.distances().max_cell().unwrap();

        assert_eq!(path.len() as u32, max_distance, "seed {seed}");

        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let adjacent = a.x.abs_diff(b.x) + a.y.abs_diff(b.y) == 1;
            assert!(adjacent, "seed {seed}: {a:?} -> {b:?} not orthogonal");

            let da = env.distances().get(a).unwrap();
            let db = env.distances().get(b).unwrap();
            assert_eq!(da, db + 1, "seed {seed}: distances not descending by 1");
        }

        // The chain ends one step from the start.
        if let Some(&last) = path.last() {
            assert_eq!(env.distances().get(last), Some(1));
        }
    }
}

#[test]
fn action_mask_never_all_blocked() {
    for seed in SEEDS {
        let env = Maze::seeded(seed).unwrap();
        assert!(
            env.action_mask().iter().any(|&legal| legal),
            "seed {seed}: start cell has no legal move"
        );
    }
}

#[test]
fn blocked_move_costs_a_step_but_nothing_else() {
    let mut found_blocked_start = false;

    for seed in SEEDS {
        let mut env = Maze::seeded(seed).unwrap();
        let mask = env.action_mask();
        let Some(blocked) = mask.iter().position(|&legal| !legal) else {
            continue;
        };
        found_blocked_start = true;

        let position = env.position();
        let life = env.life();
        let reward = env.step(blocked).unwrap();

        assert_eq!(reward, 0.0);
        assert_eq!(env.position(), position);
        assert_eq!(env.life(), life);
        assert_eq!(env.steps(), 1);
    }

    assert!(
        found_blocked_start,
        "no seed produced a start with a wall neighbor"
    );
}

#[test]
fn first_move_eats_food_with_capped_life() {
    // Default config: every reachable cell is food, so the first
    // successful move always eats.
    let mut env = Maze::seeded(42).unwrap();
    let action = first_legal_action(&env);
    let start = env.position();

    let reward = env.step(action).unwrap();

    assert_eq!(reward, 0.1);
    assert_eq!(env.steps(), 1);
    assert_eq!(env.life(), 20, "life 20 - 1 + 2 capped at 20");
    assert_ne!(env.position(), start);
    // Food is consumed exactly once.
    assert_eq!(env.grid().get(env.position()), Cell::Empty);
}

#[test]
fn revisiting_an_eaten_cell_pays_nothing() {
    let mut env = Maze::seeded(42).unwrap();
    let action = first_legal_action(&env);
    assert_eq!(env.step(action).unwrap(), 0.1);

    // Step back onto the start (cleared floor), then re-enter the eaten
    // cell: both moves pay zero.
    let back = match Direction::from_index(action).unwrap() {
        Direction::Up => Direction::Down,
        Direction::Down => Direction::Up,
        Direction::Left => Direction::Right,
        Direction::Right => Direction::Left,
    };
    let back_idx = Direction::ALL.iter().position(|&d| d == back).unwrap();

    assert_eq!(env.step(back_idx).unwrap(), 0.0);
    assert_eq!(env.step(action).unwrap(), 0.0);
}

#[test]
fn life_depletes_to_termination_without_food() {
    let mut env = Maze::with_config_seeded(foodless_config(), 7).unwrap();
    assert_eq!(env.life(), 20);

    let mut successful = 0;
    while successful < 20 {
        assert!(!env.is_finished());
        let reward = env.step(first_legal_action(&env)).unwrap();
        assert_eq!(reward, 0.0, "no food should exist in this config");
        successful += 1;
    }

    assert!(env.is_finished());
    assert_eq!(env.life(), 0);

    // Further steps are no-ops.
    let steps = env.steps();
    let position = env.position();
    assert_eq!(env.step(0).unwrap(), 0.0);
    assert_eq!(env.steps(), steps);
    assert_eq!(env.position(), position);
}

#[test]
fn render_is_idempotent_and_tracks_steps() {
    let mut env = Maze::seeded(3).unwrap();

    let before = env.render();
    assert_eq!(env.render(), before);
    assert!(before.starts_with("Steps: 0\n"));

    env.step(first_legal_action(&env)).unwrap();

    let after = env.render();
    assert_eq!(env.render(), after);
    assert!(after.starts_with("Steps: 1\n"));
    assert_ne!(before, after);

    // Eaten cells render as '+', and the start stays marked.
    assert!(after.contains('+'));
    assert!(after.contains('S'));
}

#[test]
fn render_rows_are_uniform() {
    let env = Maze::seeded(11).unwrap();
    let text = env.render();
    let mut lines = text.lines();

    let header = lines.next().unwrap();
    assert!(header.starts_with("Steps: "));

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), env.grid().height());
    for row in &rows {
        assert_eq!(row.chars().count(), env.grid().width());
        assert!(row
            .chars()
            .all(|c| matches!(c, ' ' | '#' | '.' | 'S' | '-' | '+')));
    }
}

#[test]
fn reset_regenerates_and_clears_episode() {
    let mut env = Maze::seeded(8).unwrap();
    for _ in 0..5 {
        env.step(first_legal_action(&env)).unwrap();
    }
    assert_eq!(env.steps(), 5);

    env.reset().unwrap();
    assert_eq!(env.steps(), 0);
    assert_eq!(env.life(), 20);
    assert_eq!(env.position(), env.start());
    assert!(env.render().starts_with("Steps: 0\n"));
}
