//! Agent hyperparameter configuration.
//!
//! Every option has a canonical long name and a short alias; `get`/`set`
//! accept either and resolve to the same stored value. Values are validated
//! against their domain both at construction and on every `set`.

use serde::{Deserialize, Serialize};

use crate::error::{ReinforceError, Result};

/// Validated hyperparameter set shared by all agent variants.
///
/// | canonical                 | alias     | default | domain           |
/// |---------------------------|-----------|---------|------------------|
/// | `training_batch_size`     | `bsize`   | 300     | positive integer |
/// | `discount_factor`         | `gamma`   | 0.99    | `[0, 1)`         |
/// | `knowledge_transfer_rate` | `tau`     | 0.1     | `(0, 1]`         |
/// | `epsilon_greedy_rate`     | `epsilon` | 0.1     | `[0, 1]`         |
/// | `replay_memory_size`      | `xpsize`  | 9000    | positive integer |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Number of replayed pairs per training step
    pub bsize: usize,
    /// Reward discount factor
    pub gamma: f32,
    /// Soft-update rate for the shadow weights
    pub tau: f32,
    /// Exploration rate
    pub epsilon: f32,
    /// Experience buffer capacity
    pub xpsize: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            bsize: 300,
            gamma: 0.99,
            tau: 0.1,
            epsilon: 0.1,
            xpsize: 9000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Bsize,
    Gamma,
    Tau,
    Epsilon,
    Xpsize,
}

fn resolve(name: &str) -> Result<Field> {
    match name {
        "training_batch_size" | "bsize" => Ok(Field::Bsize),
        "discount_factor" | "gamma" => Ok(Field::Gamma),
        "knowledge_transfer_rate" | "tau" => Ok(Field::Tau),
        "epsilon_greedy_rate" | "epsilon" => Ok(Field::Epsilon),
        "replay_memory_size" | "xpsize" => Ok(Field::Xpsize),
        _ => Err(ReinforceError::unknown_option(name)),
    }
}

fn check_unit(name: &str, value: f32, lo_open: bool, hi_open: bool) -> Result<()> {
    let lo_ok = if lo_open { value > 0.0 } else { value >= 0.0 };
    let hi_ok = if hi_open { value < 1.0 } else { value <= 1.0 };
    if value.is_finite() && lo_ok && hi_ok {
        Ok(())
    } else {
        let lo = if lo_open { "(0" } else { "[0" };
        let hi = if hi_open { "1)" } else { "1]" };
        Err(ReinforceError::invalid_configuration(
            name.to_string(),
            format!("{} is outside {}, {}", value, lo, hi),
        ))
    }
}

fn check_size(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 1.0 {
        Ok(())
    } else {
        Err(ReinforceError::invalid_configuration(
            name.to_string(),
            format!("{} is not a positive size", value),
        ))
    }
}

impl AgentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AgentConfigBuilder {
        AgentConfigBuilder::new()
    }

    /// Look up an option by canonical name or alias.
    pub fn get(&self, name: &str) -> Result<f32> {
        Ok(match resolve(name)? {
            Field::Bsize => self.bsize as f32,
            Field::Gamma => self.gamma,
            Field::Tau => self.tau,
            Field::Epsilon => self.epsilon,
            Field::Xpsize => self.xpsize as f32,
        })
    }

    /// Overwrite an option by canonical name or alias, validating its domain.
    /// Integer options are truncated from the given value.
    pub fn set(&mut self, name: &str, value: f32) -> Result<()> {
        match resolve(name)? {
            Field::Bsize => {
                check_size(name, value)?;
                self.bsize = value as usize;
            }
            Field::Gamma => {
                check_unit(name, value, false, true)?;
                self.gamma = value;
            }
            Field::Tau => {
                check_unit(name, value, true, false)?;
                self.tau = value;
            }
            Field::Epsilon => {
                check_unit(name, value, false, false)?;
                self.epsilon = value;
            }
            Field::Xpsize => {
                check_size(name, value)?;
                self.xpsize = value as usize;
            }
        }
        Ok(())
    }

    /// Validate every field against its domain.
    pub fn validate(&self) -> Result<()> {
        check_size("training_batch_size", self.bsize as f32)?;
        check_unit("discount_factor", self.gamma, false, true)?;
        check_unit("knowledge_transfer_rate", self.tau, true, false)?;
        check_unit("epsilon_greedy_rate", self.epsilon, false, false)?;
        check_size("replay_memory_size", self.xpsize as f32)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a configuration from JSON, rejecting out-of-domain values.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: AgentConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Builder pattern for [`AgentConfig`]
pub struct AgentConfigBuilder {
    cfg: AgentConfig,
}

impl AgentConfigBuilder {
    pub fn new() -> Self {
        AgentConfigBuilder {
            cfg: AgentConfig::default(),
        }
    }

    pub fn batch_size(mut self, bsize: usize) -> Self {
        self.cfg.bsize = bsize;
        self
    }

    pub fn discount_factor(mut self, gamma: f32) -> Self {
        self.cfg.gamma = gamma;
        self
    }

    pub fn transfer_rate(mut self, tau: f32) -> Self {
        self.cfg.tau = tau;
        self
    }

    pub fn epsilon(mut self, epsilon: f32) -> Self {
        self.cfg.epsilon = epsilon;
        self
    }

    pub fn memory_size(mut self, xpsize: usize) -> Self {
        self.cfg.xpsize = xpsize;
        self
    }

    pub fn build(self) -> Result<AgentConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

impl Default for AgentConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
