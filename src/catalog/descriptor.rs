//! Tool descriptors: static records describing one catalog entry.

use crate::types::{InputSpec, ToolCategory};
use crate::utility::Utility;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// How a tool produces its output. Fixed when the descriptor is built.
#[derive(Clone)]
pub enum Strategy {
    /// Send this template plus the form values to the generation service.
    Prompt(String),
    /// Compute the result locally.
    Utility(Arc<dyn Utility>),
}

impl Strategy {
    pub fn utility<U: Utility + 'static>(utility: U) -> Self {
        Self::Utility(Arc::new(utility))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Prompt(_) => "prompt",
            Self::Utility(_) => "utility",
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prompt(template) => f.debug_tuple("Prompt").field(template).finish(),
            Self::Utility(utility) => f.debug_tuple("Utility").field(&utility.name()).finish(),
        }
    }
}

impl Serialize for Strategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.kind())
    }
}

/// One entry of the tool catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub id: String,
    pub name: String,
    pub category: ToolCategory,
    pub description: String,
    pub icon: String,
    pub inputs: Vec<InputSpec>,
    pub strategy: Strategy,
}

impl ToolDescriptor {
    /// A prompt-driven tool.
    pub fn prompt(
        id: &str,
        name: &str,
        category: ToolCategory,
        icon: &str,
        description: &str,
        inputs: Vec<InputSpec>,
        template: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            description: description.to_string(),
            icon: icon.to_string(),
            inputs,
            strategy: Strategy::Prompt(template.to_string()),
        }
    }

    /// A utility-driven tool.
    pub fn utility<U: Utility + 'static>(
        id: &str,
        name: &str,
        category: ToolCategory,
        icon: &str,
        description: &str,
        inputs: Vec<InputSpec>,
        utility: U,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            description: description.to_string(),
            icon: icon.to_string(),
            inputs,
            strategy: Strategy::utility(utility),
        }
    }

    pub fn input(&self, id: &str) -> Option<&InputSpec> {
        self.inputs.iter().find(|i| i.id == id)
    }
}
