//! # Configuration Module
//!
//! This module provides the validated run configuration shared by the CLI and the library.

pub mod config;

pub use config::{DEFAULT_QUALITY, RunConfig};
