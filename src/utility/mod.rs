//! Local utilities that produce a result without calling the generation service.

pub mod thumbnail;

pub use thumbnail::{extract_video_id, thumbnail_links, ThumbnailDownloader};

use crate::types::{InputValues, Renderable};
use anyhow::Result;
use async_trait::async_trait;

/// What a utility hands back to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UtilityOutput {
    Text(String),
    Rendered(Renderable),
}

/// A locally computed tool strategy.
///
/// Implementations only read the input values; invalid input is reported as
/// explanatory text, while `Err` is reserved for unexpected failures.
#[async_trait]
pub trait Utility: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    async fn run(&self, inputs: &InputValues) -> Result<UtilityOutput>;
}
