//! Interactive wizard for building poll categories
//!
//! Walks the operator through category and option prompts, accumulating
//! entries until the operator declines another category, then hands the
//! list to the exporter.

pub mod colors;

use anyhow::{Context, Result, anyhow};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::Path;

use crate::export;
use crate::model::{Category, PollOption};

/// Wizard session state
pub struct Wizard {
    /// Readline editor with in-session history
    editor: DefaultEditor,
    /// Channel offered as the default for the next category
    last_channel: String,
    /// Categories entered so far, in entry order
    categories: Vec<Category>,
}

/// True only for the exact case-folded tokens "y" and "yes".
///
/// Anything else, empty input included, means "no". No trimming: the
/// comparison is against the line as typed.
pub fn parse_yes_no(resp: &str) -> bool {
    let resp = resp.to_lowercase();
    resp == "y" || resp == "yes"
}

/// Empty input reuses the remembered channel
fn resolve_channel(entered: String, last: &str) -> String {
    if entered.is_empty() {
        last.to_string()
    } else {
        entered
    }
}

impl Wizard {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            last_channel: String::new(),
            categories: Vec::new(),
        })
    }

    /// Run the category loop until the operator declines, then export
    pub fn run(mut self) -> Result<()> {
        loop {
            println!("{}", colors::section(":= Category =:"));
            let category = self.ask_category()?;
            tracing::debug!(
                "Entered category {:?} with {} options",
                category.name,
                category.options.len()
            );
            self.categories.push(category);

            if !self.ask_yes_no("One more category?")? {
                break;
            }
        }
        self.write_out()
    }

    /// Prompt for the output path and export the accumulated categories
    fn write_out(&mut self) -> Result<()> {
        println!();
        println!();
        let path = self.read_line("Output File: ")?;
        export::export(&self.categories, Path::new(&path))
    }

    /// Read one line; EOF or Ctrl-C aborts the run without writing
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(&line);
                Ok(line)
            }
            Err(ReadlineError::Interrupted) => Err(anyhow!("interrupted")),
            Err(ReadlineError::Eof) => Err(anyhow!("input stream closed")),
            Err(err) => Err(err).context("readline failed"),
        }
    }

    /// Ask a yes/no question; unrecognized answers count as "no"
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        let resp = self.read_line(&format!("{} [Y/n] ", prompt))?;
        Ok(parse_yes_no(&resp))
    }

    /// Collect one category: name, channel (defaulting to the previous
    /// one), and at least one option
    fn ask_category(&mut self) -> Result<Category> {
        let name = self.read_line("Category name: ")?;
        let entered = self.read_line(&format!(
            "Category Channel (Blank for last: {}): ",
            self.last_channel
        ))?;

        let channel = resolve_channel(entered, &self.last_channel);
        self.last_channel = channel.clone();

        println!("Inputting options");
        let mut options = Vec::new();
        loop {
            options.push(self.ask_option()?);
            if !self.ask_yes_no("One More?")? {
                break;
            }
        }
        Ok(Category::new(name, channel, options))
    }

    /// Collect one option; the custom question is only reachable when an
    /// emote was entered
    fn ask_option(&mut self) -> Result<PollOption> {
        let name = self.read_line("Enter the option name: ")?;
        let emote = self.read_line("Enter the option emote: ")?;
        let custom_confirmed = if emote.is_empty() {
            false
        } else {
            self.ask_yes_no("Custom")?
        };
        Ok(PollOption::new(name, emote, custom_confirmed))
    }
}
