//! Host-side runtime for the item and combat rules.
//!
//! This crate plays the part of the game engine around `rpg-core`:
//! - [`engine`] records effect requests and owns a roster of enemies
//! - [`session`] replays scripted commands against a player
//! - [`config`] and [`logging`] set up a process from the environment
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod session;

pub use config::RuntimeConfig;
pub use engine::{HostEngine, TrainingDummy};
pub use error::{Result, RuntimeError};
pub use logging::setup_logging;
pub use session::{Session, SessionReport};
