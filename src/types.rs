//! Shared types used across the toolkit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Tool categories
// ---------------------------------------------------------------------------

/// Groups the catalog is displayed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    /// Prompt-driven content generators.
    Generator,
    /// URL extractors and local utilities.
    Extractor,
    /// Analysis and planning helpers.
    Analyzer,
}

impl ToolCategory {
    /// All categories in display order.
    pub const ALL: [ToolCategory; 3] = [Self::Generator, Self::Extractor, Self::Analyzer];

    /// Human-readable group label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Generator => "AI Generators",
            Self::Extractor => "Extractors & Utilities",
            Self::Analyzer => "Analysis & Planning",
        }
    }

    /// Short slug accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Generator => "generator",
            Self::Extractor => "extractor",
            Self::Analyzer => "analyzer",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToolCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(wanted) || c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "unknown category '{}' (expected one of: generator, extractor, analyzer)",
                    s
                )
            })
    }
}

// ---------------------------------------------------------------------------
// Form inputs
// ---------------------------------------------------------------------------

/// How an input is presented and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    MultiLine,
    Choice,
    Url,
    Number,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::MultiLine => write!(f, "multi-line text"),
            Self::Choice => write!(f, "choice"),
            Self::Url => write!(f, "url"),
            Self::Number => write!(f, "number"),
        }
    }
}

/// One field of a tool's form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSpec {
    pub id: String,
    pub label: String,
    pub kind: InputKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    /// Fixed value; the field is read-only when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<String>,
}

impl InputSpec {
    fn new(id: &str, label: &str, kind: InputKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            placeholder: None,
            choices: Vec::new(),
            fixed: None,
        }
    }

    pub fn text(id: &str, label: &str) -> Self {
        Self::new(id, label, InputKind::Text)
    }

    pub fn multi_line(id: &str, label: &str) -> Self {
        Self::new(id, label, InputKind::MultiLine)
    }

    pub fn url(id: &str, label: &str) -> Self {
        Self::new(id, label, InputKind::Url)
    }

    pub fn number(id: &str, label: &str) -> Self {
        Self::new(id, label, InputKind::Number)
    }

    pub fn choice(id: &str, label: &str, choices: &[&str]) -> Self {
        Self {
            choices: choices.iter().map(|c| c.to_string()).collect(),
            ..Self::new(id, label, InputKind::Choice)
        }
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn fixed(mut self, value: &str) -> Self {
        self.fixed = Some(value.to_string());
        self
    }

    pub fn is_read_only(&self) -> bool {
        self.fixed.is_some()
    }
}

/// Values entered for the active tool, keyed by input id.
///
/// Keeps insertion order; overwriting a key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputValues {
    entries: Vec<(String, String)>,
}

impl InputValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Drop a key entirely; a later `set` appends it at the end.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InputValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (k, v) in iter {
            values.set(k, v);
        }
        values
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// A link to one thumbnail rendition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub label: String,
    pub url: String,
}

/// Structured output that the presentation layer knows how to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Renderable {
    ThumbnailGallery {
        video_id: String,
        thumbnails: Vec<Thumbnail>,
    },
}

/// Result of one generation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// Formatted (Markdown) text.
    Text(String),
    Rendered(Renderable),
    /// Human-readable failure message.
    Error(String),
}

impl GenerationOutcome {
    /// The formatted text, if this outcome carries any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

// ---------------------------------------------------------------------------
// Run lifecycle
// ---------------------------------------------------------------------------

/// Lifecycle of the active tool's invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Pending => write!(f, "pending"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Which variant of a text result to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFormat {
    /// The raw Markdown.
    Formatted,
    /// Markdown markers stripped.
    Plain,
}

/// Transient acknowledgement shown after a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyAck {
    #[default]
    Idle,
    CopiedFormatted,
    CopiedPlain,
}

impl From<CopyFormat> for CopyAck {
    fn from(format: CopyFormat) -> Self {
        match format {
            CopyFormat::Formatted => Self::CopiedFormatted,
            CopyFormat::Plain => Self::CopiedPlain,
        }
    }
}
