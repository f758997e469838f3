//! ODT: Odds Distribution Toolkit
//!
//! Build and visualize probability-distribution scenarios as plain text
//! files. A scenario is an ordered list of named probability components;
//! the engine turns each component into a density curve and computes the
//! discretized convolution of all components (the distribution of their
//! sum), renormalized to unit area.

pub mod cli;
pub mod core;
pub mod engine;
pub mod model;
pub mod yaml;
