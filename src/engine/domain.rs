//! Evaluation domain selection
//!
//! Picks a finite window that captures essentially all probability mass for
//! unbounded-support families, and the exact support for bounded ones.

use crate::engine::MIN_SPREAD;
use crate::model::distribution::Distribution;

/// A derived (min, max) evaluation window; recomputed whenever needed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Evaluation domain used as input to convolution.
///
/// normal: ±4σ (≈ 99.994% of mass); uniform: exact support; exponential:
/// [0, 5/λ] (≥ 99.3% of mass); dirac: degenerate single point; linear:
/// exact control-point span.
pub fn evaluation_domain(dist: &Distribution) -> Domain {
    match dist {
        Distribution::Normal { mean, std_dev } => {
            let sd = std_dev.max(MIN_SPREAD);
            Domain::new(mean - 4.0 * sd, mean + 4.0 * sd)
        }
        Distribution::Uniform { min, max } => Domain::new(*min, *max),
        Distribution::Exponential { lambda } => {
            let rate = lambda.max(MIN_SPREAD);
            Domain::new(0.0, 5.0 / rate)
        }
        Distribution::Dirac { location } => Domain::new(*location, *location),
        Distribution::Linear { points } => match (points.first(), points.last()) {
            (Some(first), Some(last)) => Domain::new(first.x, last.x),
            _ => Domain::new(0.0, 0.0),
        },
    }
}

/// Domain used for standalone plotting.
///
/// Same as [`evaluation_domain`] except uniform is widened by 10% of its
/// range on each side for visual clarity. Presentation only; must never
/// feed convolution math.
pub fn display_domain(dist: &Distribution) -> Domain {
    match dist {
        Distribution::Uniform { min, max } => {
            let pad = (max - min) * 0.1;
            Domain::new(min - pad, max + pad)
        }
        other => evaluation_domain(other),
    }
}

/// The exact location of a degenerate (zero-width) distribution, if any.
///
/// Covers dirac and a uniform whose support has collapsed to a point. Point
/// masses have no finite-valued density; the scenario pipeline treats them
/// as an exact shift instead of discretizing them.
pub fn point_mass(dist: &Distribution) -> Option<f64> {
    match dist {
        Distribution::Dirac { location } => Some(*location),
        Distribution::Uniform { min, max } if (max - min).abs() < MIN_SPREAD => Some(*min),
        _ => None,
    }
}
