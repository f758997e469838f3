//! Scenario entity - the ordered list of components being edited
//!
//! Scenarios are stored as plain-text YAML files (`*.odt.yaml`). The engine
//! never mutates a scenario; it reads the component list once per
//! computation call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::identity::ScenarioId;
use crate::model::distribution::{Component, DistributionKind};

/// A probability scenario: metadata plus an ordered component list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique identifier (SCN-...)
    pub id: ScenarioId,

    /// Scenario title
    pub title: String,

    /// Detailed description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered list of probability components
    #[serde(default)]
    pub components: Vec<Component>,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Author name
    pub author: String,
}

impl Scenario {
    /// Create a scenario seeded with one default normal component
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: ScenarioId::new(),
            title: title.into(),
            description: None,
            components: vec![Component::with_defaults(
                "Component 1",
                DistributionKind::Normal,
            )],
            created: Utc::now(),
            author: author.into(),
        }
    }

    /// Append a component with a family's defaults, auto-named by position
    pub fn add_component(&mut self, kind: DistributionKind, name: Option<String>) -> &Component {
        let name = name.unwrap_or_else(|| format!("Component {}", self.components.len() + 1));
        let index = self.components.len();
        self.components.push(Component::with_defaults(name, kind));
        &self.components[index]
    }

    /// Remove a component by zero-based index
    pub fn remove_component(&mut self, index: usize) -> Option<Component> {
        if index < self.components.len() {
            Some(self.components.remove(index))
        } else {
            None
        }
    }

    /// Replace a component in place by index
    pub fn replace_component(&mut self, index: usize, component: Component) -> bool {
        match self.components.get_mut(index) {
            Some(slot) => {
                *slot = component;
                true
            }
            None => false,
        }
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}
