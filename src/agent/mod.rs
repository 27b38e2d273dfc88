//! # Agent variants and shared lifecycle
//!
//! Every variant embeds an [`AgentCore`]: the live model, a shadow copy of
//! its flattened weights, the experience buffer, the configuration and the
//! injected RNG. The variants differ only in how they turn `(state, reward)`
//! observations into actions and into training targets:
//!
//! - [`PolicyGradient`]: samples from the model's action distribution and
//!   scales one-hot labels by discounted, standardized episode returns
//! - [`DeepQ`]: epsilon-greedy over predicted Q-values, Bellman targets
//!   through the taken action only
//! - [`HillClimbing`]: gradient-free weight-space search with elitism
//! - [`Ddpg`]: placeholder for a continuous-control algorithm
//!
//! A driver loop owns the environment and calls [`Agent::sample`] each step
//! and [`Agent::accumulate`] at episode end:
//!
//! ```rust,no_run
//! use reinforce::agent::{Agent, DeepQ};
//! use reinforce::config::AgentConfig;
//! # use reinforce::model::Model;
//! # fn run<M: Model>(model: M) -> reinforce::error::Result<()> {
//! # let (state, reward, done) = (ndarray::Array1::zeros(4), 0.0, true);
//! let cfg = AgentConfig::builder().batch_size(32).epsilon(0.05).build()?;
//! let mut agent = DeepQ::new(model, 2, cfg);
//!
//! loop {
//!     let action = agent.sample(state.view(), reward)?;
//!     // step the environment with `action`...
//!     if done {
//!         agent.accumulate(reward)?;
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod traits;

mod ddpg;
mod dqn;
mod hill_climbing;
mod pg;

pub use self::core::{AgentCore, LearnOutcome};
pub use ddpg::Ddpg;
pub use dqn::DeepQ;
pub use hill_climbing::HillClimbing;
pub use pg::PolicyGradient;
pub use traits::Agent;
