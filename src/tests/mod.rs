// Test modules for all components
pub mod support;
pub mod test_replay_buffer;
pub mod test_rewards;
