use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AgentConfig;
use crate::model::Model;
use crate::replay_buffer::ExperienceBuffer;

/// Diagnostics from one training batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LearnOutcome {
    /// Scalar cost reported by the model for the batch
    pub cost: f32,
    /// Euclidean distance the shadow weights lagged behind the live
    /// weights, normalized by parameter count
    pub weight_drift: f32,
}

/// Shared lifecycle state embedded by every agent variant.
///
/// Owns the live model, a shadow copy of its flattened weights (the target
/// network anchor), the experience buffer, the configuration, and the RNG
/// all stochastic decisions draw from. The shadow vector is never aliased
/// with the model's own parameters: it only changes through
/// [`push_weights`](AgentCore::push_weights).
pub struct AgentCore<M: Model> {
    pub(crate) model: M,
    pub(crate) shadow: Array1<f32>,
    pub(crate) xp: ExperienceBuffer,
    pub(crate) cfg: AgentConfig,
    pub(crate) rng: StdRng,
}

impl<M: Model> AgentCore<M> {
    pub fn new(model: M, cfg: AgentConfig) -> Self {
        let shadow = model.weights_flat();
        let xp = ExperienceBuffer::new(cfg.xpsize);
        AgentCore {
            model,
            shadow,
            xp,
            cfg,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the injected RNG with a seeded one, for deterministic runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn config(&self) -> &AgentConfig {
        &self.cfg
    }

    pub fn config_mut(&mut self) -> &mut AgentConfig {
        &mut self.cfg
    }

    pub fn buffer(&self) -> &ExperienceBuffer {
        &self.xp
    }

    pub fn shadow_weights(&self) -> &Array1<f32> {
        &self.shadow
    }

    /// Replay up to `bsize` stored pairs and train the model on them.
    ///
    /// An empty replay is a legitimate no-op (`None`): training needs at
    /// least one example. Otherwise performs one gradient step, soft-updates
    /// the shadow weights and reports the cost and weight drift.
    pub fn learn_batch(&mut self) -> Option<LearnOutcome> {
        let (inputs, targets) = self.xp.replay(self.cfg.bsize, &mut self.rng);
        if inputs.nrows() == 0 {
            return None;
        }
        let cost = self.model.train_on_batch(inputs.view(), targets.view());
        let weight_drift = self.push_weights();
        Some(LearnOutcome { cost, weight_drift })
    }

    /// Soft-update the shadow weights toward the live weights:
    /// `shadow <- (1 - tau) * shadow + tau * live`. Returns how far the
    /// shadow had drifted from the live weights, normalized by parameter
    /// count.
    pub fn push_weights(&mut self) -> f32 {
        let live = self.model.weights_flat();
        if live.is_empty() {
            return 0.0;
        }
        let drift = (&self.shadow - &live).mapv(|d| d * d).sum().sqrt();
        self.shadow *= 1.0 - self.cfg.tau;
        self.shadow.scaled_add(self.cfg.tau, &live);
        drift / live.len() as f32
    }

    /// Overwrite the live model's weights with the shadow weights.
    pub fn pull_weights(&mut self) {
        self.model.set_weights_flat(self.shadow.view());
    }
}
