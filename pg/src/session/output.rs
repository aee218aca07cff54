//! Showing the generated prompt and asking what next

use colored::Colorize;
use eyre::Result;
use tracing::{info, warn};

use super::input::{Input, LineSource};
use crate::clipboard::Clipboard;

/// What happened when the prompt was offered to the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(String),
    Unavailable,
}

/// Answer to "Generate another prompt?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continue {
    Yes,
    No,
    Interrupted,
}

/// Print the prompt between fences, then try the clipboard
///
/// A clipboard failure is reported to the user but never affects the prompt.
pub fn present_prompt(prompt: &str, clipboard: Option<&dyn Clipboard>) -> CopyOutcome {
    println!();
    println!("{}", "GENERATED PROMPT".bright_white().bold());
    println!();
    println!("{}", "\"\"\"".cyan().bold());
    print!("{}", prompt);
    if !prompt.ends_with('\n') {
        println!();
    }
    println!("{}", "\"\"\"".cyan().bold());
    println!();

    let outcome = match clipboard {
        Some(clipboard) => match clipboard.copy(prompt) {
            Ok(()) => {
                info!("Prompt copied via {}", clipboard.name());
                println!("{}", "✓ Prompt copied to clipboard!".bright_green());
                CopyOutcome::Copied
            }
            Err(e) => {
                warn!("Clipboard copy failed: {}", e);
                println!("{}", "⚠ Could not copy to clipboard. Please copy manually.".bright_yellow());
                CopyOutcome::Failed(e.to_string())
            }
        },
        None => {
            println!("{}", "ℹ Please copy manually (no clipboard available).".yellow());
            CopyOutcome::Unavailable
        }
    };
    println!();
    outcome
}

/// Interpret a yes/no answer; `None` for anything else
pub fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask whether to generate another prompt, re-asking until the answer is clear
pub fn ask_continue<I: LineSource>(input: &mut I) -> Result<Continue> {
    let prompt = format!("{} {} ", "→".bright_cyan().bold(), "Generate another prompt? (y/n):".cyan());
    loop {
        let line = match input.read_line(&prompt)? {
            Input::Line(line) => line,
            Input::Interrupted | Input::Eof => return Ok(Continue::Interrupted),
        };
        match parse_yes_no(&line) {
            Some(true) => {
                println!("{}\n", "✓ Starting new prompt generation...".bright_green());
                return Ok(Continue::Yes);
            }
            Some(false) => return Ok(Continue::No),
            None => println!("{} {}", "⚠".bright_red(), "Please enter 'y' or 'n'.".red()),
        }
    }
}
