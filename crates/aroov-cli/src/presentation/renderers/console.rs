use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;

use super::traits::Renderer;
use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::views::DocumentView;
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn render_text<T>(&self, result: &CommandResultViewModel<T>)
    where
        T: Serialize + Display,
    {
        if let Some(badge) = &result.badge {
            println!("{} {}", badge.icon(), badge.label.bold());
            println!();
        }

        print!("{}", result.content);

        if !result.suggestions.is_empty() {
            println!("\n{}", "💡 Tips:".yellow().bold());
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    print!(": {}", cmd.cyan());
                }
                println!();
            }
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            // Commands that touch no page fall back to text.
            OutputFormat::Html => match &result.page {
                Some(page) => print!("{}", DocumentView::new(page)),
                None => self.render_text(&result),
            },
            OutputFormat::Plain => self.render_text(&result),
        }
        Ok(())
    }
}
