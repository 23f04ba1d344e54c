use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;

use super::traits::Renderer;
use crate::presentation::view_models::CommandResultViewModel;
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self {
            json_mode: format == OutputFormat::Json,
            color,
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn tips_heading(&self) -> String {
        if self.color {
            "💡 Tips:".yellow().bold().to_string()
        } else {
            "💡 Tips:".to_string()
        }
    }

    fn command(&self, cmd: &str) -> String {
        if self.color {
            cmd.cyan().to_string()
        } else {
            cmd.to_string()
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!("{} {}", badge.icon(), self.bold(&badge.label));
            println!();
        }

        print!("{}", result.content);

        if !result.suggestions.is_empty() {
            println!("\n{}", self.tips_heading());
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    print!(": {}", self.command(cmd));
                }
                println!();
            }
        }

        Ok(())
    }
}
