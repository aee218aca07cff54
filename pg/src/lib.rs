//! PromptGen - guided prompt generator for student advice
//!
//! Walks a student through the questions of one category from a
//! [`questionset`] catalog and turns the answers into a ready-to-paste prompt
//! for an AI assistant acting as a student advisor.
//!
//! # Modules
//!
//! - [`session`] - the interactive menu / questions / output loop
//! - [`prompt`] - fixed-template prompt assembly
//! - [`clipboard`] - optional copy-to-clipboard capability
//! - [`effects`] - retro loading animations
//! - [`interrupt`] - Ctrl+C exits cleanly wherever it lands
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod effects;
pub mod interrupt;
pub mod prompt;
pub mod session;

pub use clipboard::{Clipboard, ClipboardError, ClipboardMode, CommandClipboard};
pub use config::Config;
pub use effects::Effects;
pub use prompt::{PromptTemplate, assemble};
pub use session::{ExitReason, Session, SessionOutcome};
