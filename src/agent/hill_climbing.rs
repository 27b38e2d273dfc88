use ndarray::{Array1, ArrayView1};
use ndarray_rand::RandomExt;
use rand_distr::Normal;

use crate::agent::core::AgentCore;
use crate::agent::traits::Agent;
use crate::config::AgentConfig;
use crate::error::Result;
use crate::model::Model;

/// Standard deviation of the per-weight Gaussian perturbation
const NOISE_STD: f32 = 0.1;

/// Hill-Climbing agent: weight-space random search with elitism.
///
/// No gradients and no experience replay. Every episode ends with a
/// Gaussian perturbation of every live weight; the shadow vector keeps the
/// best-scoring weights seen so far, recoverable with
/// [`pull_weights`](AgentCore::pull_weights).
pub struct HillClimbing<M: Model> {
    core: AgentCore<M>,
    episode_reward: f32,
    best_reward: f32,
}

impl<M: Model> HillClimbing<M> {
    pub const KIND: &'static str = "HillClimbing";

    pub fn new(model: M, cfg: AgentConfig) -> Self {
        HillClimbing {
            core: AgentCore::new(model, cfg),
            episode_reward: 0.0,
            best_reward: 0.0,
        }
    }

    /// Seed the injected RNG for deterministic runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.core = self.core.with_seed(seed);
        self
    }

    pub fn core(&self) -> &AgentCore<M> {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut AgentCore<M> {
        &mut self.core
    }

    pub fn best_reward(&self) -> f32 {
        self.best_reward
    }
}

impl<M: Model> Agent for HillClimbing<M> {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn reset(&mut self) {
        self.episode_reward = 0.0;
    }

    fn sample(&mut self, state: ArrayView1<f32>, reward: f32) -> Result<usize> {
        self.episode_reward += reward;
        let output = self.core.model.predict_one(state);
        let action = output
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .unwrap_or(0);
        Ok(action)
    }

    // The terminal reward is ignored here: only rewards fed through
    // `sample` count toward the elitism comparison.
    fn accumulate(&mut self, _reward: f32) -> Result<()> {
        let weights = self.core.model.weights_flat();
        if self.episode_reward > self.best_reward {
            self.best_reward = self.episode_reward;
            self.core.shadow = weights.clone();
        }
        // perturb every weight regardless of outcome
        let noise = Array1::random_using(
            weights.len(),
            Normal::new(0.0, NOISE_STD).unwrap(),
            &mut self.core.rng,
        );
        self.core.model.set_weights_flat((&weights + &noise).view());
        self.reset();
        Ok(())
    }
}
