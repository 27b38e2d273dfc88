use ndarray::ArrayView1;

use crate::agent::core::AgentCore;
use crate::agent::traits::Agent;
use crate::config::AgentConfig;
use crate::error::{ReinforceError, Result};
use crate::model::Model;

/// Deep Deterministic Policy Gradient placeholder.
///
/// Carries the shared lifecycle so a concrete continuous-control algorithm
/// can be filled in behind the same interface; until then `sample` reports
/// [`ReinforceError::Unsupported`] and the episode hooks do nothing.
pub struct Ddpg<M: Model> {
    core: AgentCore<M>,
}

impl<M: Model> Ddpg<M> {
    pub const KIND: &'static str = "DDPG";

    pub fn new(model: M, cfg: AgentConfig) -> Self {
        Ddpg {
            core: AgentCore::new(model, cfg),
        }
    }

    pub fn core(&self) -> &AgentCore<M> {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut AgentCore<M> {
        &mut self.core
    }
}

impl<M: Model> Agent for Ddpg<M> {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn reset(&mut self) {}

    fn sample(&mut self, _state: ArrayView1<f32>, _reward: f32) -> Result<usize> {
        Err(ReinforceError::Unsupported("DDPG action sampling"))
    }

    fn accumulate(&mut self, _reward: f32) -> Result<()> {
        Ok(())
    }
}
