//! # Reinforce - Experience-Replay Reinforcement Learning Agents
//!
//! Reinforce is a small reinforcement-learning agent toolkit built around an
//! experience-replay training loop. Agents interact with an environment
//! step-by-step through an external driver, buffer labeled training pairs,
//! and periodically update a predictive model from randomly sampled batches
//! while a shadow copy of the model's weights tracks it through soft
//! (exponential-moving-average) updates.
//!
//! The predictive model itself is an external collaborator behind the
//! [`model::Model`] trait; this crate owns the credit-assignment logic:
//! reward discounting, training-target construction and exploration policy.
//!
//! ## Key Pieces
//!
//! - **Experience buffer**: fixed-capacity FIFO store of `(input, target)`
//!   pairs with uniform random batch sampling
//! - **Agent configuration**: validated hyperparameters addressable by
//!   canonical name or alias
//! - **Agent core**: shared lifecycle (batch training, shadow-weight
//!   synchronization, drift diagnostics)
//! - **Agent variants**: Policy-Gradient, Deep-Q, Hill-Climbing, and a
//!   deterministic-policy-gradient placeholder
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reinforce::agent::{Agent, PolicyGradient};
//! use reinforce::config::AgentConfig;
//! # struct MyModel;
//! # impl reinforce::model::Model for MyModel {
//! #     fn predict(&mut self, x: ndarray::ArrayView2<f32>) -> ndarray::Array2<f32> { x.to_owned() }
//! #     fn train_on_batch(&mut self, _: ndarray::ArrayView2<f32>, _: ndarray::ArrayView2<f32>) -> f32 { 0.0 }
//! #     fn weights_flat(&self) -> ndarray::Array1<f32> { ndarray::Array1::zeros(1) }
//! #     fn set_weights_flat(&mut self, _: ndarray::ArrayView1<f32>) {}
//! # }
//! # let model = MyModel;
//! let cfg = AgentConfig::builder()
//!     .batch_size(64)
//!     .discount_factor(0.95)
//!     .build()
//!     .unwrap();
//!
//! // A policy-gradient agent over 3 discrete actions
//! let mut agent = PolicyGradient::new(model, 3, cfg);
//!
//! let state = ndarray::array![0.1, -0.2, 0.3, -0.1];
//! let action = agent.sample(state.view(), 0.0).unwrap();
//! // ...step the environment, then at episode end:
//! agent.accumulate(1.0).unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`agent`] - Agent variants and the shared training lifecycle
//! - [`config`] - Hyperparameter set with alias lookup and validation
//! - [`error`] - Error types and result handling
//! - [`model`] - The external predictive-model contract
//! - [`replay_buffer`] - Experience replay storage and sampling
//! - [`rewards`] - Discounted-return helpers

pub mod agent;
pub mod config;
pub mod error;
pub mod model;
pub mod replay_buffer;
pub mod rewards;

#[cfg(test)]
mod tests;
