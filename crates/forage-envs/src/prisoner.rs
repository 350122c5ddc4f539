//! Iterated prisoner's dilemma environment.

use forage::env::Environment;
use forage::{EnvError, Result};
use ndarray::Array1;

// Votes: 0 = defect, 1 = cooperate. Action 2 acknowledges the payout.
const DEFECT: usize = 0;
const COOPERATE: usize = 1;

/// Two-player matrix game environment
///
/// Each round is a four-stage turn cycle: both players vote (stages 0
/// and 1), then both collect their payout (stages 2 and 3). Mutual
/// cooperation pays 1.0 each, a lone defector collects 1.2 at its payout
/// stage, and mutual defection costs both 0.5. The game iterates
/// indefinitely; the trainer truncates episodes externally.
pub struct Prisoner {
    /// Both votes of the previous round, -1 before the first round
    last_round: [i32; 2],
    /// Votes of the round in progress
    stack: Vec<usize>,
    /// Position in the four-stage cycle
    stage: usize,
    rounds: u64,
    /// Completed rounds, kept for rendering only
    trace: Vec<[usize; 2]>,
}

impl Prisoner {
    pub const ACTION_DIMS: usize = 3;
    pub const OBSERVATION_DIMS: usize = 2;
    pub const PLAYER_COUNT: usize = 2;

    pub fn new() -> Self {
        Self {
            last_round: [-1, -1],
            stack: Vec::new(),
            stage: 0,
            rounds: 0,
            trace: Vec::new(),
        }
    }

    /// Completed rounds so far
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Position in the four-stage turn cycle
    pub fn stage(&self) -> usize {
        self.stage
    }

    fn payout(&self) -> f32 {
        let votes = (self.stack.first().copied(), self.stack.get(1).copied());
        match votes {
            (Some(COOPERATE), Some(COOPERATE)) => 1.0,
            // A lone defector collects only at its own payout stage.
            (Some(DEFECT), Some(COOPERATE)) => {
                if self.stage == 2 {
                    1.2
                } else {
                    0.0
                }
            }
            (Some(COOPERATE), Some(DEFECT)) => {
                if self.stage == 3 {
                    1.2
                } else {
                    0.0
                }
            }
            (Some(DEFECT), Some(DEFECT)) => -0.5,
            _ => 0.0,
        }
    }
}

impl Default for Prisoner {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for Prisoner {
    fn name(&self) -> &'static str {
        "prisoner"
    }

    fn action_dims(&self) -> usize {
        Self::ACTION_DIMS
    }

    fn observation_dims(&self) -> usize {
        Self::OBSERVATION_DIMS
    }

    fn player_count(&self) -> usize {
        Self::PLAYER_COUNT
    }

    fn reset(&mut self) -> Result<()> {
        self.last_round = [-1, -1];
        self.stack.clear();
        self.stage = 0;
        self.rounds = 0;
        self.trace.clear();
        Ok(())
    }

    fn observe(&self) -> Result<Array1<f32>> {
        // Each player sees its own previous vote first.
        let [a, b] = self.last_round;
        let view = if self.stage % 2 == 0 { [a, b] } else { [b, a] };
        Ok(Array1::from_vec(vec![view[0] as f32, view[1] as f32]))
    }

    fn action_mask(&self) -> Vec<bool> {
        // First they vote, then they collect the payout.
        if self.stage < 2 {
            vec![true, true, false]
        } else {
            vec![false, false, true]
        }
    }

    fn step(&mut self, action: usize) -> Result<f32> {
        if action >= Self::ACTION_DIMS {
            return Err(EnvError::InvalidAction {
                action,
                dims: Self::ACTION_DIMS,
            });
        }

        let reward = if self.stage < 2 {
            self.stack.push(action);
            0.0
        } else {
            self.payout()
        };

        self.stage = (self.stage + 1) % 4;
        if self.stage == 0 {
            let committed = [
                self.stack.first().copied().unwrap_or(DEFECT),
                self.stack.get(1).copied().unwrap_or(DEFECT),
            ];
            self.trace.push(committed);
            self.last_round = [committed[0] as i32, committed[1] as i32];
            self.rounds += 1;
            self.stack.clear();
        }

        Ok(reward)
    }

    fn is_finished(&self) -> bool {
        false
    }

    fn render(&self) -> String {
        self.trace
            .iter()
            .map(|round| format!("{}-{}", round[0], round[1]))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
