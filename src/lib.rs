//! tubekit: a catalog of AI-assisted YouTube SEO tools.
//!
//! Each tool is either prompt-driven (a fixed template plus the user's form
//! values sent to a text-generation service) or utility-driven (computed
//! locally). The dispatcher runs the active tool and owns its session.

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod format;
pub mod generation;
pub mod shell;
pub mod types;
pub mod utility;
