//! Line input sources

use std::collections::VecDeque;

use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

/// One read from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text, already trimmed
    Line(String),
    /// Ctrl+C
    Interrupted,
    /// Ctrl+D or end of piped input
    Eof,
}

/// Where the session reads user input from
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input>;
}

/// Interactive terminal input with line editing and history
pub struct TerminalInput {
    editor: DefaultEditor,
}

impl TerminalInput {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
        Ok(Self { editor })
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let input = line.trim().to_string();
                if !input.is_empty() {
                    let _ = self.editor.add_history_entry(input.as_str());
                }
                Ok(Input::Line(input))
            }
            Err(ReadlineError::Interrupted) => {
                debug!("TerminalInput::read_line: interrupted");
                Ok(Input::Interrupted)
            }
            Err(ReadlineError::Eof) => {
                debug!("TerminalInput::read_line: eof");
                Ok(Input::Eof)
            }
            Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
        }
    }
}

/// Replays a fixed list of lines, then reports end of input
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<Input>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(|l| Input::Line(l.into().trim().to_string())).collect(),
            prompts: Vec::new(),
        }
    }

    /// Queue a Ctrl+C after the lines queued so far
    pub fn then_interrupt(mut self) -> Self {
        self.lines.push_back(Input::Interrupted);
        self
    }

    /// Prompts that were shown, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().unwrap_or(Input::Eof))
    }
}
