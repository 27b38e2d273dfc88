use ndarray::ArrayView1;

use crate::error::Result;

/// Interface every agent variant exposes to its driver.
///
/// The driver loop calls [`sample`](Agent::sample) once per environment step
/// and [`accumulate`](Agent::accumulate) once at episode end; `accumulate`
/// turns the episode's scratch state into training pairs and triggers a
/// training batch, after which the scratch state is cleared.
pub trait Agent {
    /// Tag identifying the algorithm variant, e.g. `"PG"`.
    fn kind(&self) -> &'static str;

    /// Clear per-episode scratch state.
    fn reset(&mut self);

    /// Select a discrete action for `state`, given the reward earned since
    /// the previous step (drivers pass `0.0` before the first transition).
    fn sample(&mut self, state: ArrayView1<f32>, reward: f32) -> Result<usize>;

    /// Close the episode with its final reward: build training targets from
    /// the recorded scratch state, store them, reset, and learn a batch.
    fn accumulate(&mut self, reward: f32) -> Result<()>;

    /// Per-step bookkeeping hook for variants that need it.
    fn update(&mut self) {}
}
