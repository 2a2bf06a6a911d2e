//! Interactive view shell: navigation between pages and the tool catalog.

pub mod pages;
pub mod render;

pub use pages::View;

use crate::dispatcher::{Dispatcher, RunReport};
use crate::error::DispatchError;
use crate::types::CopyFormat;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = r#"
Commands:
  home | about | contact     switch page
  tools                      list the catalog
  use <tool>                 make a tool active (clears its form)
  show                       show the active tool and its form
  set <input> <value...>     fill one field (empty value clears it)
  run                        generate a result
  copy [plain]               copy the result (formatted or plain text)
  help                       this text
  quit | exit                leave the shell
"#;

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Page(View),
    Tools,
    Use(String),
    Show,
    Set { input: String, value: String },
    Run,
    Copy(CopyFormat),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "home" | "about" | "contact" => Ok(Self::Page(word.parse()?)),
            "tools" | "list" => Ok(Self::Tools),
            "use" if !rest.is_empty() => Ok(Self::Use(rest.to_string())),
            "use" => Err("usage: use <tool>".into()),
            "show" => Ok(Self::Show),
            "set" => match rest.split_once(char::is_whitespace) {
                Some((input, value)) => Ok(Self::Set {
                    input: input.to_string(),
                    value: value.trim().to_string(),
                }),
                None if !rest.is_empty() => Ok(Self::Set {
                    input: rest.to_string(),
                    value: String::new(),
                }),
                None => Err("usage: set <input> <value...>".into()),
            },
            "run" | "generate" => Ok(Self::Run),
            "copy" => match rest {
                "" | "formatted" | "md" => Ok(Self::Copy(CopyFormat::Formatted)),
                "plain" | "text" => Ok(Self::Copy(CopyFormat::Plain)),
                other => Err(format!("unknown copy format '{}'", other)),
            },
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err("empty command".into()),
            other => Err(format!("unknown command '{}' (try 'help')", other)),
        }
    }
}

/// Owns the current page and drives the dispatcher.
pub struct Shell {
    dispatcher: Arc<Dispatcher>,
    view: View,
}

impl Shell {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            dispatcher,
            view: View::Home,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Execute one command and return the text to display.
    pub async fn execute(&mut self, command: Command) -> Result<String, DispatchError> {
        match command {
            Command::Page(view) => {
                self.view = view;
                Ok(self.render_page().await)
            }
            Command::Tools => {
                let active = self.dispatcher.active_tool().await;
                Ok(render::render_catalog(self.dispatcher.catalog(), Some(&active.id)))
            }
            Command::Use(id) => {
                let tool = self.dispatcher.select_tool(&id).await?;
                self.view = View::Home;
                Ok(render::render_tool(&tool, &self.dispatcher.inputs().await))
            }
            Command::Show => Ok(self.render_panel().await),
            Command::Set { input, value } => {
                self.dispatcher.set_input(&input, &value).await?;
                if value.is_empty() {
                    Ok(format!("{} cleared", input))
                } else {
                    Ok(format!("{} = {}", input, value))
                }
            }
            Command::Run => Ok(match self.dispatcher.run().await {
                RunReport::Completed(outcome) => render::render_outcome(&outcome),
                RunReport::Busy => "A generation is already in progress.".yellow().to_string(),
                RunReport::Discarded => "Result discarded: the active tool changed.".dimmed().to_string(),
            }),
            Command::Copy(format) => {
                let ack = self.dispatcher.copy(format).await?;
                Ok(render::render_copy_ack(ack))
            }
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }

    async fn render_page(&self) -> String {
        match self.view {
            View::Home => {
                let active = self.dispatcher.active_tool().await;
                let mut out = pages::HERO.to_string();
                out.push_str(&render::render_catalog(self.dispatcher.catalog(), Some(&active.id)));
                out.push_str(&self.render_panel().await);
                out
            }
            View::About => pages::ABOUT.to_string(),
            View::Contact => pages::contact(),
        }
    }

    async fn render_panel(&self) -> String {
        let tool = self.dispatcher.active_tool().await;
        let mut out = render::render_tool(&tool, &self.dispatcher.inputs().await);
        out.push_str(&format!("\nstatus: {}\n", render::render_state(self.dispatcher.state().await)));

        let ack = render::render_copy_ack(self.dispatcher.copy_ack().await);
        if !ack.is_empty() {
            out.push_str(&format!("{}\n", ack));
        }
        if let Some(outcome) = self.dispatcher.outcome().await {
            out.push_str(&render::render_outcome(&outcome));
        }
        out
    }

    /// Read commands from stdin until `quit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        println!("{}", self.render_page().await);
        println!("Type 'help' for commands.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let tool = self.dispatcher.active_tool().await;
            print!("{} ", format!("tubekit:{}>", tool.id).purple().bold());
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => match self.execute(command).await {
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
                },
                Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
            }
        }
        Ok(())
    }
}
