//! YAML parsing with error handling

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::model::scenario::Scenario;
use crate::yaml::diagnostics::{YamlError, YamlSyntaxError};

/// Parse YAML content into a typed value with nice error messages
pub fn parse_yaml<T: DeserializeOwned + 'static>(content: &str, filename: &str) -> Result<T, YamlError> {
    serde_yml::from_str(content)
        .map_err(|e| YamlError::Syntax(YamlSyntaxError::from_serde_error(&e, content, filename)))
}

/// Parse YAML from a file path
pub fn parse_yaml_file<T: DeserializeOwned + 'static>(path: &Path) -> Result<T, YamlError> {
    let content = std::fs::read_to_string(path)?;
    let filename = path.display().to_string();
    parse_yaml(&content, &filename)
}

/// Serialize a scenario back to its file
pub fn write_scenario(scenario: &Scenario, path: &Path) -> Result<(), YamlError> {
    let content = serde_yml::to_string(scenario).map_err(YamlError::Serialize)?;
    std::fs::write(path, content)?;
    Ok(())
}
