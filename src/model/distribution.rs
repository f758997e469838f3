//! Distribution model - one probability component per scenario entry
//!
//! Each component wraps one distribution family with typed parameters.
//! Construction through [`Distribution::default_for`] always yields a fully
//! populated variant; a partially-initialized distribution can never reach
//! density evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single (x, y) sample or control point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Supported distribution families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum DistributionKind {
    /// Normal (Gaussian) distribution
    #[default]
    Normal,
    /// Uniform distribution
    Uniform,
    /// Exponential distribution
    Exponential,
    /// Dirac delta (point mass)
    Dirac,
    /// Piecewise-linear density shape
    Linear,
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionKind::Normal => write!(f, "normal"),
            DistributionKind::Uniform => write!(f, "uniform"),
            DistributionKind::Exponential => write!(f, "exponential"),
            DistributionKind::Dirac => write!(f, "dirac"),
            DistributionKind::Linear => write!(f, "linear"),
        }
    }
}

impl FromStr for DistributionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(DistributionKind::Normal),
            "uniform" => Ok(DistributionKind::Uniform),
            "exponential" => Ok(DistributionKind::Exponential),
            "dirac" => Ok(DistributionKind::Dirac),
            "linear" => Ok(DistributionKind::Linear),
            other => Err(format!(
                "unknown distribution kind '{other}' (expected normal, uniform, exponential, dirac, or linear)"
            )),
        }
    }
}

/// A probability distribution with typed, constrained parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Distribution {
    /// Normal (Gaussian) with mean μ and standard deviation σ > 0
    Normal { mean: f64, std_dev: f64 },

    /// Uniform on [min, max], min <= max
    Uniform { min: f64, max: f64 },

    /// Exponential with rate λ > 0
    Exponential { lambda: f64 },

    /// Point mass at a single location; has no finite-valued density
    Dirac { location: f64 },

    /// Piecewise-linear density shape over control points with strictly
    /// increasing x; not pre-normalized by the caller
    Linear { points: Vec<Point> },
}

impl Default for Distribution {
    fn default() -> Self {
        Self::default_for(DistributionKind::Normal)
    }
}

/// Error from a linear-shape editing operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("operation only applies to linear distributions")]
    NotLinear,

    #[error("linear distributions must keep at least 3 control points")]
    MinimumPoints,

    #[error("the first and last control points cannot be removed")]
    EndpointFixed,

    #[error("no control point at index {0}")]
    IndexOutOfRange(usize),
}

impl Distribution {
    /// Canonical defaults for each family
    pub fn default_for(kind: DistributionKind) -> Self {
        match kind {
            DistributionKind::Normal => Distribution::Normal {
                mean: 50.0,
                std_dev: 10.0,
            },
            DistributionKind::Uniform => Distribution::Uniform {
                min: 0.0,
                max: 100.0,
            },
            DistributionKind::Exponential => Distribution::Exponential { lambda: 1.0 },
            DistributionKind::Dirac => Distribution::Dirac { location: 0.0 },
            DistributionKind::Linear => Distribution::Linear {
                points: vec![
                    Point::new(0.0, 0.0),
                    Point::new(50.0, 1.0),
                    Point::new(100.0, 0.0),
                ],
            },
        }
    }

    /// The family this distribution belongs to
    pub fn kind(&self) -> DistributionKind {
        match self {
            Distribution::Normal { .. } => DistributionKind::Normal,
            Distribution::Uniform { .. } => DistributionKind::Uniform,
            Distribution::Exponential { .. } => DistributionKind::Exponential,
            Distribution::Dirac { .. } => DistributionKind::Dirac,
            Distribution::Linear { .. } => DistributionKind::Linear,
        }
    }

    /// Insert an interior control point before the last one, at the midpoint
    /// x of its neighbors and the left neighbor's y
    pub fn insert_linear_point(&mut self) -> Result<(), EditError> {
        let Distribution::Linear { points } = self else {
            return Err(EditError::NotLinear);
        };
        if points.len() < 2 {
            return Err(EditError::MinimumPoints);
        }
        let last = points.len() - 1;
        let prev = points[last - 1];
        let end = points[last];
        points.insert(last, Point::new((prev.x + end.x) / 2.0, prev.y));
        Ok(())
    }

    /// Remove an interior control point. Rejected when it would leave fewer
    /// than 3 points or when it targets an endpoint.
    pub fn remove_linear_point(&mut self, index: usize) -> Result<(), EditError> {
        let Distribution::Linear { points } = self else {
            return Err(EditError::NotLinear);
        };
        if index >= points.len() {
            return Err(EditError::IndexOutOfRange(index));
        }
        if index == 0 || index == points.len() - 1 {
            return Err(EditError::EndpointFixed);
        }
        if points.len() <= 3 {
            return Err(EditError::MinimumPoints);
        }
        points.remove(index);
        Ok(())
    }
}

/// One named component of a scenario
///
/// Order among components is significant for series order and color
/// assignment, not for the convolution result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Display name (not required to be unique)
    pub name: String,

    /// The component's distribution
    pub distribution: Distribution,
}

impl Component {
    pub fn new(name: impl Into<String>, distribution: Distribution) -> Self {
        Self {
            name: name.into(),
            distribution,
        }
    }

    /// Create a component with a family's canonical defaults
    pub fn with_defaults(name: impl Into<String>, kind: DistributionKind) -> Self {
        Self::new(name, Distribution::default_for(kind))
    }

    /// Switch the distribution family, discarding prior parameters and
    /// reinitializing to the new family's defaults
    pub fn set_kind(&mut self, kind: DistributionKind) {
        self.distribution = Distribution::default_for(kind);
    }
}
