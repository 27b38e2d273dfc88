use ndarray::{Array1, Array2, ArrayView1};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::agent::core::AgentCore;
use crate::agent::traits::Agent;
use crate::config::AgentConfig;
use crate::error::{ReinforceError, Result};
use crate::model::Model;
use crate::rewards::{discount, standardize};

/// Policy-Gradient (REINFORCE-style) agent.
///
/// The model is treated as a stochastic policy: `predict` yields an
/// action-probability distribution per state. Episode returns are
/// discounted, standardized, and scaled into the one-hot action labels so
/// that well-rewarded actions are reinforced and poorly-rewarded ones
/// suppressed.
pub struct PolicyGradient<M: Model> {
    core: AgentCore<M>,
    nactions: usize,
    states: Vec<Array1<f32>>,
    labels: Vec<Array1<f32>>,
    rewards: Vec<f32>,
}

impl<M: Model> PolicyGradient<M> {
    pub const KIND: &'static str = "PG";

    pub fn new(model: M, nactions: usize, cfg: AgentConfig) -> Self {
        PolicyGradient {
            core: AgentCore::new(model, cfg),
            nactions,
            states: Vec::new(),
            labels: Vec::new(),
            rewards: Vec::new(),
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
}

impl<M: Model> Agent for PolicyGradient<M> {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn reset(&mut self) {
        self.states.clear();
        self.labels.clear();
        self.rewards.clear();
    }

    fn sample(&mut self, state: ArrayView1<f32>, reward: f32) -> Result<usize> {
        self.states.push(state.to_owned());
        self.rewards.push(reward);

        let probabilities = self.core.model.predict_one(state);
        if probabilities.len() != self.nactions {
            return Err(ReinforceError::DimensionMismatch {
                expected: format!("{} action probabilities", self.nactions),
                actual: probabilities.len().to_string(),
            });
        }

        // TODO: confirm the exploration gate direction. The stochastic-policy
        // branch fires when the draw lands *under* epsilon, which inverts the
        // usual epsilon-greedy split; kept for parity with the behavior the
        // agents were tuned against.
        let action = if self.core.rng.gen::<f32>() < self.core.cfg.epsilon {
            let dist = WeightedIndex::new(probabilities.iter().cloned())
                .map_err(|e| ReinforceError::NumericalError(format!("invalid policy distribution: {}", e)))?;
            dist.sample(&mut self.core.rng)
        } else {
            self.core.rng.gen_range(0..self.nactions)
        };

        let mut label = Array1::zeros(self.nactions);
        label[action] = 1.0;
        self.labels.push(label);
        Ok(action)
    }

    fn accumulate(&mut self, reward: f32) -> Result<()> {
        if !self.states.is_empty() {
            // Reward r_{t+1} lands on the action taken at s_t: drop the
            // first recorded reward, close the sequence with the terminal one.
            let mut returns: Array1<f32> = self.rewards[1..]
                .iter()
                .copied()
                .chain(std::iter::once(reward))
                .collect();
            if self.core.cfg.gamma > 0.0 {
                returns = standardize(discount(returns.view(), self.core.cfg.gamma));
            }

            let mut inputs = Array2::zeros((self.states.len(), self.states[0].len()));
            let mut targets = Array2::zeros((self.labels.len(), self.nactions));
            for (t, (state, label)) in self.states.iter().zip(&self.labels).enumerate() {
                inputs.row_mut(t).assign(state);
                // scaling the one-hot row only touches the taken action
                targets.row_mut(t).assign(&(label * returns[t]));
            }
            self.core.xp.remember(inputs.view(), targets.view());
        }

        self.reset();
        let _ = self.core.learn_batch();
        Ok(())
    }
}
