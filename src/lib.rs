//! Fixed-tick simulation core for a 2.5D shooter: entity state machines,
//! monster AI, collision, and sector light/texture animation.

pub mod arena;
pub mod config;
pub mod debug;
pub mod defs;
pub mod ecs;
pub mod environment;
pub mod error;
pub mod hooks;
pub mod input;
pub mod level;
pub mod logging;
pub mod math;
pub mod publish;
pub mod scheduler;
pub mod sim;
pub mod spatial;

#[cfg(test)]
mod fixtures;

pub use config::SimConfig;
pub use error::ConfigError;
pub use scheduler::Scheduler;
pub use sim::Sim;
