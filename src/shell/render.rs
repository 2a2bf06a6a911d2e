//! Terminal presentation of catalog entries and outcomes.

use crate::catalog::{Catalog, ToolDescriptor};
use crate::types::*;
use colored::Colorize;
use std::fmt::Write as _;

/// The catalog grouped by category, with the active tool marked.
pub fn render_catalog(catalog: &Catalog, active_id: Option<&str>) -> String {
    let mut out = String::new();
    for (category, tools) in catalog.grouped() {
        let _ = writeln!(out, "\n── {} ──", category.label().to_uppercase().purple().bold());
        for tool in tools {
            let marker = if Some(tool.id.as_str()) == active_id { "▶" } else { " " };
            let _ = writeln!(
                out,
                " {} {} {:<18} {}",
                marker,
                tool.icon,
                tool.id.bold(),
                tool.name
            );
        }
    }
    out
}

/// Header, description and form of one tool with its current values.
pub fn render_tool(tool: &ToolDescriptor, values: &InputValues) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{} {}", tool.icon, tool.name.bold());
    let _ = writeln!(out, "{}", tool.description.dimmed());
    let _ = writeln!(out, "[{} · {}]", tool.category, tool.strategy.kind());

    if tool.inputs.is_empty() {
        let _ = writeln!(out, "\n(no inputs)");
    }

    for input in &tool.inputs {
        let _ = writeln!(out, "\n  {} ({}, {})", input.label.to_uppercase(), input.id, input.kind);

        let current = values.get(&input.id).filter(|v| !v.is_empty());
        let shown = match (current, input.kind) {
            (Some(value), _) => value.to_string(),
            (None, InputKind::Choice) => "Select an option".dimmed().to_string(),
            (None, _) => input
                .placeholder
                .as_deref()
                .unwrap_or("")
                .dimmed()
                .to_string(),
        };
        let lock = if input.is_read_only() { " [read-only]" } else { "" };
        let _ = writeln!(out, "    > {}{}", shown, lock);

        if !input.choices.is_empty() {
            let _ = writeln!(out, "    options: {}", input.choices.join(" | "));
        }
    }
    out
}

/// Display an outcome; the presentation decides how structured results look.
pub fn render_outcome(outcome: &GenerationOutcome) -> String {
    let mut out = format!("\n{} Result\n\n", "⚡".purple());
    match outcome {
        GenerationOutcome::Text(text) => out.push_str(text),
        GenerationOutcome::Error(message) => out.push_str(&message.red().to_string()),
        GenerationOutcome::Rendered(Renderable::ThumbnailGallery {
            video_id,
            thumbnails,
        }) => {
            let _ = writeln!(out, "Thumbnails for {}", video_id.bold());
            for thumb in thumbnails {
                let _ = writeln!(out, "\n  {}", thumb.label.purple().bold());
                let _ = write!(out, "  {}", thumb.url.underline());
            }
        }
    }
    out.push('\n');
    out
}

pub fn render_state(state: RunState) -> String {
    match state {
        RunState::Idle => state.to_string().dimmed().to_string(),
        RunState::Pending => "Generating...".yellow().to_string(),
        RunState::Succeeded => state.to_string().green().to_string(),
        RunState::Failed => state.to_string().red().to_string(),
    }
}

pub fn render_copy_ack(ack: CopyAck) -> String {
    match ack {
        CopyAck::Idle => String::new(),
        CopyAck::CopiedFormatted => "Copied! ✓".green().to_string(),
        CopyAck::CopiedPlain => "Copied plain text! ✓".green().to_string(),
    }
}
