use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;

use crate::agent::core::AgentCore;
use crate::agent::traits::Agent;
use crate::config::AgentConfig;
use crate::error::{ReinforceError, Result};
use crate::model::Model;

/// Deep Q-Learning agent.
///
/// The model predicts a Q-value per action. Actions are chosen greedily
/// with probability `1 - epsilon` and uniformly at random otherwise. At
/// episode end each transition's predicted Q-vector becomes a training
/// target with only the taken action's entry replaced by the Bellman value
/// `r + gamma * max(Q_next)`, so gradient flows through that entry alone.
pub struct DeepQ<M: Model> {
    core: AgentCore<M>,
    nactions: usize,
    states: Vec<Array1<f32>>,
    qs: Vec<Array1<f32>>,
    rewards: Vec<f32>,
    actions: Vec<usize>,
}

fn argmax(values: &Array1<f32>) -> usize {
    values
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

impl<M: Model> DeepQ<M> {
    pub const KIND: &'static str = "DeepQLearning";

    pub fn new(model: M, nactions: usize, cfg: AgentConfig) -> Self {
        DeepQ {
            core: AgentCore::new(model, cfg),
            nactions,
            states: Vec::new(),
            qs: Vec::new(),
            rewards: Vec::new(),
            actions: Vec::new(),
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

impl<M: Model> Agent for DeepQ<M> {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn reset(&mut self) {
        self.states.clear();
        self.qs.clear();
        self.rewards.clear();
        self.actions.clear();
    }

    fn sample(&mut self, state: ArrayView1<f32>, reward: f32) -> Result<usize> {
        self.states.push(state.to_owned());
        self.rewards.push(reward);

        let q = self.core.model.predict_one(state);
        if q.len() != self.nactions {
            return Err(ReinforceError::DimensionMismatch {
                expected: format!("{} Q-values", self.nactions),
                actual: q.len().to_string(),
            });
        }

        let action = if self.core.rng.gen::<f32>() < self.core.cfg.epsilon {
            self.core.rng.gen_range(0..self.nactions)
        } else {
            argmax(&q)
        };
        self.qs.push(q);
        self.actions.push(action);
        Ok(action)
    }

    fn accumulate(&mut self, reward: f32) -> Result<()> {
        let n = self.states.len();
        // The final state has no successor prediction, so its transition is
        // dropped; episodes shorter than two steps store nothing.
        if n >= 2 {
            let rseq: Vec<f32> = self.rewards[1..]
                .iter()
                .copied()
                .chain(std::iter::once(reward))
                .collect();

            let mut inputs = Array2::zeros((n - 1, self.states[0].len()));
            let mut targets = Array2::zeros((n - 1, self.nactions));
            for t in 0..n - 1 {
                inputs.row_mut(t).assign(&self.states[t]);
                // (s_t, a_t, r_{t+1}, Q_{t+1})
                let mut target = self.qs[t].clone();
                let q_next_max = self.qs[t + 1]
                    .iter()
                    .fold(f32::NEG_INFINITY, |max, &v| max.max(v));
                target[self.actions[t]] = rseq[t] + self.core.cfg.gamma * q_next_max;
                targets.row_mut(t).assign(&target);
            }
            self.core.xp.remember(inputs.view(), targets.view());
        }

        self.reset();
        let _ = self.core.learn_batch();
        Ok(())
    }
}
