//! Scenario computation - the engine's single entry point
//!
//! `compute_scenario` turns an ordered component list into per-component
//! display series plus the renormalized convolution of all components.

use crate::engine::convolve::{convolve, renormalize};
use crate::engine::density::{linear_area, sample_series, sample_values};
use crate::engine::domain::{display_domain, evaluation_domain, point_mass, Domain};
use crate::engine::error::EngineError;
use crate::model::distribution::{Component, Distribution, Point};

/// Sampling resolution for standalone display series
pub const DISPLAY_POINTS: usize = 200;

/// Sampling resolution for the shared convolution grid (denser than the
/// display grid for accuracy)
pub const CONVOLUTION_POINTS: usize = 400;

/// One named display series, in input order
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ComponentSeries {
    pub name: String,
    /// Empty for point-mass components, which have no finite density curve;
    /// kept in order so callers can align names and colors by index
    pub points: Vec<Point>,
}

/// Output of [`compute_scenario`]; owned by the caller, never cached
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct ScenarioSeries {
    /// One display series per input component, same order as the input
    pub per_component: Vec<ComponentSeries>,

    /// Normalized density of the sum of all components; empty when the
    /// scenario is empty or collapses to a pure point mass
    pub convolution: Vec<Point>,

    /// Set when every component is a point mass: the sum concentrates all
    /// probability at exactly this location and no finite series exists
    pub point_mass: Option<f64>,
}

/// Check a component for input the engine cannot evaluate.
///
/// Nonpositive `std_dev`/`lambda` pass here (they are clamped at
/// evaluation); degenerate uniform passes as a point mass. Only shapes
/// whose density is undefined everywhere are errors.
pub fn validate_component(component: &Component) -> Result<(), EngineError> {
    let name = || component.name.clone();
    match &component.distribution {
        Distribution::Uniform { min, max } => {
            if min > max {
                return Err(EngineError::InvertedBounds {
                    name: name(),
                    min: *min,
                    max: *max,
                });
            }
        }
        Distribution::Linear { points } => {
            if points.len() < 2 {
                return Err(EngineError::TooFewPoints { name: name() });
            }
            if points.windows(2).any(|pair| pair[1].x <= pair[0].x) {
                return Err(EngineError::NonIncreasingX { name: name() });
            }
            if points.iter().any(|p| p.y < 0.0) {
                return Err(EngineError::NegativeDensity { name: name() });
            }
            if linear_area(points) <= 0.0 {
                return Err(EngineError::ZeroArea { name: name() });
            }
        }
        Distribution::Normal { .. }
        | Distribution::Exponential { .. }
        | Distribution::Dirac { .. } => {}
    }
    Ok(())
}

/// Compute display series and the normalized sum-distribution for a
/// component list.
///
/// The convolution grid shares one step across all components:
/// `step = (Σ domain maxes − Σ domain mins) / 400`. Point masses enter the
/// domain sums exactly and are never discretized - their whole effect is
/// the x-axis shift already carried by the summed minimum. Convolution is
/// commutative, so input order affects only series order.
pub fn compute_scenario(components: &[Component]) -> Result<ScenarioSeries, EngineError> {
    if components.is_empty() {
        return Ok(ScenarioSeries::default());
    }

    for component in components {
        validate_component(component)?;
    }

    let per_component = components
        .iter()
        .map(|c| ComponentSeries {
            name: c.name.clone(),
            points: if point_mass(&c.distribution).is_some() {
                Vec::new()
            } else {
                sample_series(&c.distribution, display_domain(&c.distribution), DISPLAY_POINTS)
            },
        })
        .collect();

    let domains: Vec<Domain> = components
        .iter()
        .map(|c| evaluation_domain(&c.distribution))
        .collect();
    let total_min: f64 = domains.iter().map(|d| d.min).sum();
    let total_max: f64 = domains.iter().map(|d| d.max).sum();

    let finite: Vec<(&Component, Domain)> = components
        .iter()
        .zip(domains)
        .filter(|(c, _)| point_mass(&c.distribution).is_none())
        .collect();

    if finite.is_empty() {
        // Every component is a point mass: the sum is exact, not a curve
        return Ok(ScenarioSeries {
            per_component,
            convolution: Vec::new(),
            point_mass: Some(total_min),
        });
    }

    let step = (total_max - total_min) / CONVOLUTION_POINTS as f64;

    let mut result: Vec<f64> = Vec::new();
    for (component, dom) in finite {
        // The ratio can land a hair above an integer when the width is an
        // exact multiple of the step
        let len = ((dom.width() / step) - 1e-9).ceil() as usize + 1;
        let values = sample_values(&component.distribution, dom.min, step, len);
        result = if result.is_empty() {
            values
        } else {
            convolve(&result, &values, step)
        };
    }
    renormalize(&mut result, step);

    let convolution = result
        .iter()
        .enumerate()
        .map(|(k, &y)| Point::new(total_min + k as f64 * step, y))
        .collect();

    Ok(ScenarioSeries {
        per_component,
        convolution,
        point_mass: None,
    })
}
