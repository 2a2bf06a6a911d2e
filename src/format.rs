//! Post-processing of formatted (Markdown) results.

use crate::types::CopyFormat;
use once_cell::sync::Lazy;
use regex::Regex;

static MARKER_SYMBOLS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[#*`_]").expect("valid pattern"));
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]\(.*?\)").expect("valid pattern"));
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*-\s").expect("valid pattern"));
static ORDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\.\s").expect("valid pattern"));

/// Best-effort Markdown stripping.
///
/// Removes heading and emphasis symbols, keeps only the visible label of
/// links and drops leading list bullets and ordinals. Nested or malformed
/// structures are not handled.
pub fn strip_formatting(text: &str) -> String {
    let text = MARKER_SYMBOLS.replace_all(text, "");
    let text = LINK.replace_all(&text, "$1");
    let text = BULLET.replace_all(&text, "");
    let text = ORDINAL.replace_all(&text, "");
    text.trim().to_string()
}

impl CopyFormat {
    /// Produce the variant of `text` this format copies.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Formatted => text.to_string(),
            Self::Plain => strip_formatting(text),
        }
    }
}
