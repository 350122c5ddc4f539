//! Core environment trait definition.

use crate::Result;
use ndarray::Array1;

/// Core trait for Forage environments.
///
/// The external training loop is the sole consumer of this contract and
/// drives it in strict call/response order: one `reset()`, then repeated
/// `observe()`/`action_mask()` to choose an action and `step(action)` to
/// advance, with `render()` on demand for diagnostics. No two operations
/// on the same instance are ever in flight concurrently, and every call
/// completes immediately — there is no cancellation or timeout.
///
/// Dimension accessors are instance methods so the trait stays
/// object-safe; concrete environments additionally expose them as
/// `ACTION_DIMS` / `OBSERVATION_DIMS` / `PLAYER_COUNT` associated
/// constants.
///
/// # Example
///
/// ```rust,ignore
/// use forage::env::Environment;
///
/// fn rollout(env: &mut dyn Environment) -> forage::Result<f32> {
///     env.reset()?;
///     let mut total = 0.0;
///     while !env.is_finished() {
///         let mask = env.action_mask();
///         let action = mask.iter().position(|&legal| legal).unwrap_or(0);
///         total += env.step(action)?;
///     }
///     Ok(total)
/// }
/// ```
pub trait Environment {
    /// Short identifier for this environment (e.g. `"maze"`)
    fn name(&self) -> &'static str;

    /// Number of discrete actions
    fn action_dims(&self) -> usize;

    /// Length of the observation vector
    fn observation_dims(&self) -> usize;

    /// Number of players driven through this instance
    fn player_count(&self) -> usize;

    /// Reset to a fresh episode
    ///
    /// # Errors
    /// `EnvError::GenerationInvariant` if initial-state generation broke
    /// one of its guarantees — a logic defect, not a recoverable fault.
    fn reset(&mut self) -> Result<()>;

    /// Produce the observation vector for the current state
    ///
    /// # Errors
    /// `EnvError::ObservationInconsistency` if a state element is visible
    /// that the encoding does not recognize.
    fn observe(&self) -> Result<Array1<f32>>;

    /// Legality of each action from the current state
    ///
    /// Returns `action_dims()` booleans, `true` where the action is legal.
    /// Stepping an illegal action is still allowed and is an ordinary
    /// outcome (reward 0, no movement), not an error.
    fn action_mask(&self) -> Vec<bool>;

    /// Apply one action and return the scalar reward
    ///
    /// # Errors
    /// `EnvError::InvalidAction` if `action >= action_dims()`.
    fn step(&mut self, action: usize) -> Result<f32>;

    /// Whether the episode has ended
    fn is_finished(&self) -> bool;

    /// Render a human-readable trace of the episode so far
    ///
    /// Diagnostic only — no other component parses the output. Must not
    /// mutate logical state: two consecutive calls yield identical text.
    fn render(&self) -> String;
}
