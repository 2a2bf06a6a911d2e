//! Tool catalog: the ordered, validated set of tool descriptors.

pub mod builtin;
pub mod descriptor;

pub use builtin::builtin;
pub use descriptor::{Strategy, ToolDescriptor};

use crate::error::CatalogError;
use crate::types::{InputKind, ToolCategory};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Validated, immutable collection of tools.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<Arc<ToolDescriptor>>,
}

impl Catalog {
    /// Validate descriptors once and build the catalog.
    pub fn new(tools: Vec<ToolDescriptor>) -> Result<Self, CatalogError> {
        if tools.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for tool in &tools {
            validate_tool(tool)?;
            if !seen.insert(tool.id.as_str()) {
                return Err(CatalogError::DuplicateTool(tool.id.clone()));
            }
        }

        debug!("Catalog validated with {} tools", tools.len());
        Ok(Self {
            tools: tools.into_iter().map(Arc::new).collect(),
        })
    }

    /// Look up a tool by id.
    pub fn get(&self, id: &str) -> Option<&Arc<ToolDescriptor>> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// The first tool; a catalog is never empty.
    pub fn first(&self) -> &Arc<ToolDescriptor> {
        &self.tools[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ToolDescriptor>> {
        self.tools.iter()
    }

    /// Tools of one category, in catalog order.
    pub fn by_category(&self, category: ToolCategory) -> impl Iterator<Item = &Arc<ToolDescriptor>> {
        self.tools.iter().filter(move |t| t.category == category)
    }

    /// Tools grouped by category in display order. Empty groups are skipped.
    pub fn grouped(&self) -> Vec<(ToolCategory, Vec<&Arc<ToolDescriptor>>)> {
        ToolCategory::ALL
            .into_iter()
            .map(|c| (c, self.by_category(c).collect::<Vec<_>>()))
            .filter(|(_, tools)| !tools.is_empty())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

fn validate_tool(tool: &ToolDescriptor) -> Result<(), CatalogError> {
    if tool.id.trim().is_empty() {
        return Err(CatalogError::EmptyId(tool.name.clone()));
    }

    if let Strategy::Prompt(template) = &tool.strategy {
        if template.trim().is_empty() {
            return Err(CatalogError::BlankPrompt(tool.id.clone()));
        }
    }

    let mut input_ids = HashSet::new();
    for input in &tool.inputs {
        if !input_ids.insert(input.id.as_str()) {
            return Err(CatalogError::DuplicateInput {
                tool: tool.id.clone(),
                input: input.id.clone(),
            });
        }

        match (input.kind, input.choices.is_empty()) {
            (InputKind::Choice, true) => {
                return Err(CatalogError::MissingChoices {
                    tool: tool.id.clone(),
                    input: input.id.clone(),
                })
            }
            (kind, false) if kind != InputKind::Choice => {
                return Err(CatalogError::UnexpectedChoices {
                    tool: tool.id.clone(),
                    input: input.id.clone(),
                })
            }
            _ => {}
        }

        if let (InputKind::Choice, Some(fixed)) = (input.kind, &input.fixed) {
            if !input.choices.contains(fixed) {
                return Err(CatalogError::FixedNotAChoice {
                    tool: tool.id.clone(),
                    input: input.id.clone(),
                    value: fixed.clone(),
                });
            }
        }
    }

    Ok(())
}
