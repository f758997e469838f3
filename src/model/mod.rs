//! Scenario data model - distributions and the scenario entity

pub mod distribution;
pub mod scenario;

pub use distribution::{Component, Distribution, DistributionKind, EditError, Point};
pub use scenario::Scenario;
