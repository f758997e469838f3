//! Closed-form density evaluation and grid sampling

use crate::engine::domain::Domain;
use crate::engine::MIN_SPREAD;
use crate::model::distribution::{Distribution, Point};

/// Area under the raw control polygon by the trapezoid rule.
///
/// The linear density divides by this so the evaluated curve integrates
/// to 1 over its span. Zero area means the density is undefined; the
/// validation pass rejects such shapes before evaluation.
pub fn linear_area(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| (pair[1].x - pair[0].x) * (pair[0].y + pair[1].y) / 2.0)
        .sum()
}

/// Evaluate a distribution's probability density at a point.
///
/// Point masses (dirac, collapsed uniform) have no finite-valued density;
/// callers route around them via [`crate::engine::domain::point_mass`] and
/// this function returns 0 for them.
pub fn density(dist: &Distribution, x: f64) -> f64 {
    match dist {
        Distribution::Normal { mean, std_dev } => {
            let sd = std_dev.max(MIN_SPREAD);
            let variance = sd * sd;
            (1.0 / (2.0 * std::f64::consts::PI * variance).sqrt())
                * (-(x - mean).powi(2) / (2.0 * variance)).exp()
        }
        Distribution::Uniform { min, max } => {
            let width = max - min;
            if width < MIN_SPREAD || x < *min || x > *max {
                0.0
            } else {
                1.0 / width
            }
        }
        Distribution::Exponential { lambda } => {
            let rate = lambda.max(MIN_SPREAD);
            if x < 0.0 {
                0.0
            } else {
                rate * (-rate * x).exp()
            }
        }
        Distribution::Dirac { .. } => 0.0,
        Distribution::Linear { points } => {
            let area = linear_area(points);
            if area <= 0.0 {
                return 0.0;
            }
            for pair in points.windows(2) {
                let (p0, p1) = (pair[0], pair[1]);
                if x >= p0.x && x <= p1.x {
                    let t = (x - p0.x) / (p1.x - p0.x);
                    return (p0.y + t * (p1.y - p0.y)) / area;
                }
            }
            0.0
        }
    }
}

/// Sample a density at `num_points + 1` equally spaced x-values spanning
/// `domain`, inclusive of both endpoints.
pub fn sample_series(dist: &Distribution, domain: Domain, num_points: usize) -> Vec<Point> {
    let step = domain.width() / num_points as f64;
    (0..=num_points)
        .map(|i| {
            let x = domain.min + i as f64 * step;
            Point::new(x, density(dist, x))
        })
        .collect()
}

/// Sample density values on a fixed-step grid starting at `min`.
///
/// Used to build convolution operands, where every component must share
/// the same step.
pub fn sample_values(dist: &Distribution, min: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| density(dist, min + i as f64 * step))
        .collect()
}
