//! Scenario identifiers - prefixed ULIDs
//!
//! Every scenario file carries a `SCN-<ulid>` identifier. ULIDs are
//! lexicographically sortable by creation time, which keeps directory
//! listings in chronological order for free.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ulid::Ulid;

/// Prefix for scenario identifiers
pub const SCENARIO_PREFIX: &str = "SCN";

/// Error parsing a scenario identifier
#[derive(Debug, thiserror::Error)]
pub enum IdParseError {
    #[error("missing '{SCENARIO_PREFIX}-' prefix in id '{0}'")]
    MissingPrefix(String),

    #[error("invalid ULID in id '{0}'")]
    InvalidUlid(String),
}

/// A scenario identifier: `SCN-<26-char ULID>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScenarioId(Ulid);

impl ScenarioId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ScenarioId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", SCENARIO_PREFIX, self.0)
    }
}

impl FromStr for ScenarioId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(SCENARIO_PREFIX)
            .and_then(|r| r.strip_prefix('-'))
            .ok_or_else(|| IdParseError::MissingPrefix(s.to_string()))?;
        let ulid = Ulid::from_string(rest).map_err(|_| IdParseError::InvalidUlid(s.to_string()))?;
        Ok(Self(ulid))
    }
}

impl Serialize for ScenarioId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ScenarioId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
