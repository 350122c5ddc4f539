//! Environment wrappers for common functionality.

use super::Environment;
use crate::Result;
use ndarray::Array1;

/// Wrapper that tracks episode statistics (return and length).
///
/// Counters accumulate across `step()` calls and clear on `reset()`.
pub struct EpisodeStats<E: Environment> {
    env: E,
    episode_return: f32,
    episode_length: u32,
}

impl<E: Environment> EpisodeStats<E> {
    /// Wrap an environment with episode statistics tracking
    pub fn new(env: E) -> Self {
        Self {
            env,
            episode_return: 0.0,
            episode_length: 0,
        }
    }

    /// Get a reference to the inner environment
    pub fn inner(&self) -> &E {
        &self.env
    }

    /// Get a mutable reference to the inner environment
    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// Total reward accumulated this episode
    pub fn episode_return(&self) -> f32 {
        self.episode_return
    }

    /// Number of steps taken this episode
    pub fn episode_length(&self) -> u32 {
        self.episode_length
    }
}

impl<E: Environment> Environment for EpisodeStats<E> {
    fn name(&self) -> &'static str {
        self.env.name()
    }

    fn action_dims(&self) -> usize {
        self.env.action_dims()
    }

    fn observation_dims(&self) -> usize {
        self.env.observation_dims()
    }

    fn player_count(&self) -> usize {
        self.env.player_count()
    }

    fn reset(&mut self) -> Result<()> {
        self.episode_return = 0.0;
        self.episode_length = 0;
        self.env.reset()
    }

    fn observe(&self) -> Result<Array1<f32>> {
        self.env.observe()
    }

    fn action_mask(&self) -> Vec<bool> {
        self.env.action_mask()
    }

    fn step(&mut self, action: usize) -> Result<f32> {
        let reward = self.env.step(action)?;
        self.episode_return += reward;
        self.episode_length += 1;
        Ok(reward)
    }

    fn is_finished(&self) -> bool {
        self.env.is_finished()
    }

    fn render(&self) -> String {
        self.env.render()
    }
}
