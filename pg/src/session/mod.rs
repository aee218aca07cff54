//! Interactive prompt generation session
//!
//! One session is a loop of: pick a category, answer its questions, get the
//! assembled prompt (optionally copied to the clipboard), decide whether to go
//! again. Entering nothing or `abort` at any question drops back to the menu.
//! Ctrl+C or end of input at any prompt ends the session cleanly.

mod collect;
mod input;
mod menu;
mod output;

pub use collect::{Collection, collect_answers, is_abort};
pub use input::{Input, LineSource, ScriptedInput, TerminalInput};
pub use menu::{Choice, Selection, choose_category, parse_selection, print_menu};
pub use output::{Continue, CopyOutcome, ask_continue, parse_yes_no, present_prompt};

use colored::Colorize;
use eyre::Result;
use questionset::Catalog;
use tracing::{debug, info};

use crate::clipboard::Clipboard;
use crate::effects::Effects;
use crate::prompt::PromptTemplate;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// `0` at the menu or `n` at the continue prompt
    UserExit,
    /// Ctrl+C or end of input
    Interrupted,
}

/// Summary of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub prompts: usize,
    pub aborted: usize,
    pub exit: ExitReason,
}

pub struct Session {
    catalog: Catalog,
    template: PromptTemplate,
    clipboard: Option<Box<dyn Clipboard>>,
    effects: Effects,
}

impl Session {
    pub fn new(catalog: Catalog, template: PromptTemplate) -> Self {
        Self {
            catalog,
            template,
            clipboard: None,
            effects: Effects::disabled(),
        }
    }

    pub fn with_clipboard(mut self, clipboard: Option<Box<dyn Clipboard>>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_effects(mut self, effects: Effects) -> Self {
        self.effects = effects;
        self
    }

    /// Run until the user exits or input ends
    pub fn run<I: LineSource>(&self, input: &mut I) -> Result<SessionOutcome> {
        debug!(
            categories = self.catalog.len(),
            clipboard = self.clipboard.as_ref().map(|c| c.name()),
            "Session::run: called"
        );
        self.effects.startup();

        let mut prompts = 0;
        let mut aborted = 0;

        let exit = loop {
            print_menu(&self.catalog);

            let category = match choose_category(&self.catalog, input)? {
                Choice::Category(category) => category,
                Choice::Exit => break ExitReason::UserExit,
                Choice::Interrupted => break ExitReason::Interrupted,
            };

            let answers = match collect_answers(category, input)? {
                Collection::Complete(answers) => answers,
                Collection::Aborted => {
                    aborted += 1;
                    continue;
                }
                Collection::Interrupted => break ExitReason::Interrupted,
            };

            self.effects.processing();
            let prompt = self.template.render(&category.name, &answers);
            present_prompt(&prompt, self.clipboard.as_deref());
            prompts += 1;
            info!("Generated prompt #{} for '{}' ({} answers)", prompts, category.name, answers.len());

            match ask_continue(input)? {
                Continue::Yes => continue,
                Continue::No => break ExitReason::UserExit,
                Continue::Interrupted => break ExitReason::Interrupted,
            }
        };

        match exit {
            ExitReason::UserExit => println!("\n{}", "Goodbye!".bright_green().bold()),
            ExitReason::Interrupted => println!("\n{}", "Exiting...".yellow()),
        }

        let outcome = SessionOutcome { prompts, aborted, exit };
        info!(?outcome, "Session finished");
        Ok(outcome)
    }
}
