//! tubekit: AI-assisted YouTube SEO tools in the terminal.
//!
//! Usage:
//!   tubekit list                    Show the tool catalog
//!   tubekit show <tool>             Describe one tool and its inputs
//!   tubekit run <tool> -i key=value Run a tool once
//!   tubekit shell                   Interactive session
//!   tubekit init                    Write a default config file

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use tubekit::catalog::{self, Catalog};
use tubekit::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
use tubekit::config::{self, ToolkitConfig};
use tubekit::dispatcher::{Dispatcher, RunReport};
use tubekit::generation::{GeminiBackend, GenerationClient};
use tubekit::shell::{pages, render, Shell};
use tubekit::types::*;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "tubekit")]
#[command(version)]
#[command(about = "AI-assisted YouTube SEO toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file.
    #[arg(long)]
    config: Option<String>,

    /// Log level (debug, info, warn, error). Overrides the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Keep copied results in memory instead of the system clipboard.
    #[arg(long)]
    no_clipboard: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tool catalog grouped by category.
    List {
        /// Only show one category (generator, extractor, analyzer).
        #[arg(long)]
        category: Option<ToolCategory>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Describe one tool and its inputs.
    Show {
        tool: String,

        #[arg(long)]
        json: bool,
    },

    /// Run one tool and print its result.
    Run {
        tool: String,

        /// Input value as key=value; repeat for several inputs.
        #[arg(short = 'i', long = "input", value_parser = parse_key_value)]
        inputs: Vec<(String, String)>,

        /// Print and copy the plain-text variant.
        #[arg(long)]
        plain: bool,

        /// Copy the result to the clipboard.
        #[arg(long)]
        copy: bool,

        #[arg(long)]
        json: bool,
    },

    /// Start the interactive shell.
    Shell,

    /// Show the about page.
    About,

    /// Show the contact page.
    Contact,

    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    if key.trim().is_empty() {
        return Err(format!("missing key in '{}'", s));
    }
    Ok((key.trim().to_string(), value.to_string()))
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(config::resolve_path)
        .unwrap_or_else(config::default_config_path);
    let cfg = config::load_config(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // Initialize logging
    let level = cli.log_level.clone().unwrap_or_else(|| cfg.log_level.clone());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List { category, json } => cmd_list(category, json),
        Commands::Show { tool, json } => cmd_show(&tool, json),
        Commands::Run {
            tool,
            inputs,
            plain,
            copy,
            json,
        } => cmd_run(&cfg, cli.no_clipboard, &tool, inputs, plain, copy, json).await,
        Commands::Shell => cmd_shell(&cfg, cli.no_clipboard).await,
        Commands::About => {
            println!("{}", pages::ABOUT);
            Ok(())
        }
        Commands::Contact => {
            println!("{}", pages::contact());
            Ok(())
        }
        Commands::Init { force } => cmd_init(&config_path, force),
    }
}

// ---------------------------------------------------------------------------
// Command implementations
// ---------------------------------------------------------------------------

fn cmd_list(category: Option<ToolCategory>, json: bool) -> Result<()> {
    let catalog = load_catalog()?;

    if json {
        let tools: Vec<_> = catalog
            .iter()
            .filter(|t| category.map_or(true, |c| t.category == c))
            .map(|t| t.as_ref())
            .collect();
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    match category {
        Some(c) => {
            println!("\n── {} ──", c.label().to_uppercase().purple().bold());
            for tool in catalog.by_category(c) {
                println!("   {} {:<18} {}", tool.icon, tool.id.bold(), tool.name);
            }
        }
        None => print!("{}", render::render_catalog(&catalog, None)),
    }
    println!();
    Ok(())
}

fn cmd_show(id: &str, json: bool) -> Result<()> {
    let catalog = load_catalog()?;
    let Some(tool) = catalog.get(id) else {
        bail!("Unknown tool '{}'. Run `tubekit list` to see the catalog.", id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(tool.as_ref())?);
    } else {
        println!("{}", render::render_tool(tool, &InputValues::new()));
    }
    Ok(())
}

async fn cmd_run(
    cfg: &ToolkitConfig,
    no_clipboard: bool,
    id: &str,
    inputs: Vec<(String, String)>,
    plain: bool,
    copy: bool,
    json: bool,
) -> Result<()> {
    let clipboard = open_clipboard(no_clipboard || !copy, ClipboardUse::OneShot);
    let dispatcher = build_dispatcher(cfg, clipboard)?;
    dispatcher
        .select_tool(id)
        .await
        .context("Run `tubekit list` to see the catalog")?;

    for (key, value) in &inputs {
        dispatcher.set_input(key, value).await?;
    }

    let outcome = match dispatcher.run().await {
        RunReport::Completed(outcome) => outcome,
        other => bail!("Run did not complete: {:?}", other),
    };

    let format = if plain { CopyFormat::Plain } else { CopyFormat::Formatted };
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if let Some(text) = outcome.text() {
        println!("{}", format.apply(text));
    } else {
        println!("{}", render::render_outcome(&outcome));
    }

    if copy && outcome.text().is_some() {
        if cfg!(target_os = "linux") && !no_clipboard {
            eprintln!("Keeping the copied text available until another copy replaces it...");
        }
        let ack = dispatcher.copy(format).await?;
        eprintln!("{}", render::render_copy_ack(ack));
    }

    if outcome.is_error() {
        std::process::exit(1);
    }
    Ok(())
}

async fn cmd_shell(cfg: &ToolkitConfig, no_clipboard: bool) -> Result<()> {
    let clipboard = open_clipboard(no_clipboard, ClipboardUse::Session);
    let dispatcher = Arc::new(build_dispatcher(cfg, clipboard)?);
    let mut shell = Shell::new(dispatcher);
    shell.run().await
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    config::save_config(&ToolkitConfig::default(), path)?;
    println!(
        "{} Wrote default config to {}",
        ">>>".green().bold(),
        path.display()
    );
    println!("Set your API key there or export {}.", config::schema::API_KEY_ENV);
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_catalog() -> Result<Catalog> {
    catalog::builtin().context("Built-in tool catalog failed validation")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClipboardUse {
    /// Shell session; the handle lives as long as the process.
    Session,
    /// Single `run --copy`; the process waits for the selection to be taken over.
    OneShot,
}

/// Open the system clipboard, falling back to memory when disabled or unavailable.
fn open_clipboard(disabled: bool, usage: ClipboardUse) -> Arc<dyn Clipboard> {
    if disabled {
        return Arc::new(MemoryClipboard::new());
    }
    let opened = match usage {
        ClipboardUse::Session => SystemClipboard::new(),
        ClipboardUse::OneShot => SystemClipboard::one_shot(),
    };
    match opened {
        Ok(clipboard) => Arc::new(clipboard),
        Err(e) => {
            warn!("System clipboard unavailable ({:#}); copies stay in memory", e);
            Arc::new(MemoryClipboard::new())
        }
    }
}

/// Wire the catalog, generation backend and clipboard into a dispatcher.
fn build_dispatcher(cfg: &ToolkitConfig, clipboard: Arc<dyn Clipboard>) -> Result<Dispatcher> {
    let catalog = Arc::new(load_catalog()?);

    let api_key = cfg.api_key().unwrap_or_else(|| {
        warn!(
            "No API key configured; set {} or api_key in the config file",
            config::schema::API_KEY_ENV
        );
        ""
    });
    let backend = GeminiBackend::new(&cfg.api_base_url, api_key, cfg.request_timeout())
        .context("Failed to build generation backend")?;

    info!("Loaded {} tools", catalog.len());
    Ok(Dispatcher::new(
        catalog,
        GenerationClient::new(Arc::new(backend)),
        clipboard,
    ))
}
