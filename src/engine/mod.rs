//! Density & convolution engine
//!
//! Pure, stateless computation: given a component list, derive evaluation
//! domains, evaluate densities, convolve the discretized arrays and
//! renormalize the result to unit area. No I/O, no caching across calls;
//! every call is idempotent given identical input.
//!
//! Convolution uses the direct O(N²) method, acceptable at the fixed grid
//! of a few hundred samples used here. Worst case over a scenario is
//! O(components × samples²).

pub mod convolve;
pub mod density;
pub mod domain;
pub mod error;
pub mod scenario;

pub use convolve::{convolve, renormalize};
pub use density::{density, sample_series};
pub use domain::{display_domain, evaluation_domain, point_mass, Domain};
pub use error::EngineError;
pub use scenario::{
    compute_scenario, validate_component, ComponentSeries, ScenarioSeries, CONVOLUTION_POINTS,
    DISPLAY_POINTS,
};

/// Smallest spread parameter the engine will evaluate with.
///
/// `std_dev` and `lambda` are clamped here rather than rejected, and a
/// uniform narrower than this counts as a point mass.
pub const MIN_SPREAD: f64 = 1e-9;
