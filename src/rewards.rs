//! Discounted-return arithmetic shared by the episodic agents.

use ndarray::{Array1, ArrayView1};

/// Discounted returns `G_t = r_t + gamma * G_{t+1}`, with
/// `G_{T-1} = r_{T-1}`. With `gamma = 0` the rewards come back unchanged.
pub fn discount(rewards: ArrayView1<f32>, gamma: f32) -> Array1<f32> {
    let mut returns = rewards.to_owned();
    let mut running = 0.0;
    for g in returns.iter_mut().rev() {
        running = *g + gamma * running;
        *g = running;
    }
    returns
}

/// Shift and scale to zero mean and unit variance.
///
/// A single step has no spread to normalize and comes back untouched; a
/// zero-variance sequence is centered but not scaled.
pub fn standardize(mut returns: Array1<f32>) -> Array1<f32> {
    if returns.len() <= 1 {
        return returns;
    }
    let mean = returns.mean().unwrap_or(0.0);
    returns -= mean;
    let std = returns.std(0.0);
    if std > 0.0 {
        returns /= std;
    }
    returns
}
