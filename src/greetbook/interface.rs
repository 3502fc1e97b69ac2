//! The I/O boundary of the session loop. [`Interface`] is the only place
//! the dispatch loop touches input or output, so the whole loop runs
//! against [`ScriptedInterface`] in tests without a terminal.

use crate::commands::MessageLevel;
use crate::error::{GreetbookError, Result};
use colored::Colorize;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

pub trait Interface {
    /// Read one line of input. `Ok(None)` signals end of input.
    fn get_input(&mut self, prompt: &str) -> Result<Option<String>>;

    fn show_message(&mut self, level: MessageLevel, text: &str);

    fn show_help(&mut self, text: &str);
}

/// Terminal variant: prompts on stdout, reads lines from stdin, styles
/// messages by level.
#[derive(Debug, Default)]
pub struct ConsoleInterface;

impl ConsoleInterface {
    pub fn new() -> Self {
        Self
    }
}

impl Interface for ConsoleInterface {
    fn get_input(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush().map_err(GreetbookError::Io)?;

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(GreetbookError::Io)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn show_message(&mut self, level: MessageLevel, text: &str) {
        match level {
            MessageLevel::Info => println!("{}", text),
            MessageLevel::Success => println!("{}", text.green()),
            MessageLevel::Warning => println!("{}", text.yellow()),
            MessageLevel::Error => println!("{}", text.red()),
        }
    }

    fn show_help(&mut self, text: &str) {
        println!("{}", text.dimmed());
    }
}

/// Scripted variant for tests: input comes from a fixed list of lines,
/// output is recorded for assertions.
#[derive(Debug, Default)]
pub struct ScriptedInterface {
    inputs: VecDeque<String>,
    pub output: Vec<String>,
}

impl ScriptedInterface {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything shown so far, joined for substring assertions.
    pub fn output_text(&self) -> String {
        self.output.join("\n")
    }
}

impl Interface for ScriptedInterface {
    fn get_input(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }

    fn show_message(&mut self, _level: MessageLevel, text: &str) {
        self.output.push(text.to_string());
    }

    fn show_help(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}
