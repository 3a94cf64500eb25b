//! Configuration loading for the Leave Coverage Reconciliation Engine.
//!
//! This module provides functionality to load the reconciliation settings
//! from a YAML file, chiefly the reference window the coverage analysis runs
//! against.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config").unwrap();
//! println!("Reconciling against {:?}", loader.window());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ReconcilerConfig, WindowConfig};
