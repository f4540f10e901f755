// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for running inference.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the prediction driver.

// Modules
/// CLI arguments.
pub mod args;

/// Diagnostic output macros.
pub mod logging;

/// Prediction logic.
pub mod predict;
