//! Engine error types
//!
//! Numeric edge cases (nonpositive spread, collapsed uniform) fall back to
//! well-defined behavior instead of erroring; only genuinely degenerate
//! input - shapes with no defined density - is rejected, always naming the
//! offending component.

use miette::Diagnostic;
use thiserror::Error;

/// Validation failure for a scenario component
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum EngineError {
    #[error("component '{name}': uniform bounds are inverted (min {min} > max {max})")]
    #[diagnostic(
        code(odt::engine::inverted_bounds),
        help("set min <= max; equal bounds are treated as a point mass")
    )]
    InvertedBounds { name: String, min: f64, max: f64 },

    #[error("component '{name}': a linear shape needs at least 2 control points")]
    #[diagnostic(code(odt::engine::too_few_points))]
    TooFewPoints { name: String },

    #[error("component '{name}': linear control points must have strictly increasing x")]
    #[diagnostic(code(odt::engine::non_increasing_x))]
    NonIncreasingX { name: String },

    #[error("component '{name}': linear control points must have y >= 0")]
    #[diagnostic(code(odt::engine::negative_density))]
    NegativeDensity { name: String },

    #[error("component '{name}': linear shape encloses zero area, its density is undefined")]
    #[diagnostic(
        code(odt::engine::zero_area),
        help("raise at least one interior control point above zero")
    )]
    ZeroArea { name: String },
}

impl EngineError {
    /// Name of the component that failed validation
    pub fn component_name(&self) -> &str {
        match self {
            EngineError::InvertedBounds { name, .. }
            | EngineError::TooFewPoints { name }
            | EngineError::NonIncreasingX { name }
            | EngineError::NegativeDensity { name }
            | EngineError::ZeroArea { name } => name,
        }
    }
}
