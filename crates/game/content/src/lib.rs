//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Item catalogs (data-driven via RON)
//! - Player configuration (data-driven via TOML)
//! - Scripted play sessions (data-driven via RON)
//!
//! Content feeds the runtime; the rules themselves live in `rpg-core`.

pub mod script;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use script::{Command, SessionScript};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, ScriptLoader};
