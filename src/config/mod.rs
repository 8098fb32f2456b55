// src/config/mod.rs

//! Configuration for the `plandag` binary.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk, or fall back to defaults (`loader.rs`).

pub mod loader;
pub mod model;

pub use loader::{load_from_path, load_or_default};
pub use model::{ConfigFile, OutputSection, PlannerSection};
