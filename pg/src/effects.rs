//! Retro terminal effects
//!
//! Typewriter-style "loading" sequences shown at startup and while a prompt
//! is being put together. Purely cosmetic.

use std::io::{IsTerminal, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use rand::Rng;
use rand::seq::SliceRandom;

const STARTUP_MESSAGES: &[&str] = &["LOADING", "PREPARING LAYOUT", "INITIALIZING INTERFACE", "READY"];

const PROCESSING_MESSAGES: &[&str] = &[
    "COLLECTING USER INPUTS",
    "ACCESSING CONTROL CENTER DATABASE",
    "SEEKING ROOT PARTITION",
    "INITIALIZING NEURAL MATRIX",
    "REBOOTING QUANTUM PROCESSORS",
    "SYNCHRONIZING DATA STREAMS",
    "CALIBRATING RESPONSE ALGORITHMS",
    "ESTABLISHING SECURE CONNECTION",
    "PARSING SEMANTIC STRUCTURES",
    "GENERATING OPTIMAL PROMPT",
];

const CHAR_DELAY: Duration = Duration::from_millis(30);
const DOT_DELAY: Duration = Duration::from_millis(150);

/// Terminal effect player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effects {
    enabled: bool,
}

impl Effects {
    /// Effects are only played when requested and stdout is a terminal
    pub fn new(requested: bool) -> Self {
        Self {
            enabled: requested && std::io::stdout().is_terminal(),
        }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn startup(&self) {
        if !self.enabled {
            return;
        }
        banner("PROMPT GENERATOR SYSTEM");
        for msg in STARTUP_MESSAGES {
            type_line(msg, *msg != "READY");
        }
        println!("\n{}\n", "*** SYSTEM READY ***".bright_green().bold());
    }

    pub fn processing(&self) {
        if !self.enabled {
            return;
        }
        banner("SYSTEM PROCESSING");
        for msg in processing_messages(&mut rand::rng()) {
            type_line(msg, true);
        }
        println!("\n{}\n", "✓ SYSTEM READY".bright_green().bold());
    }
}

/// Three to five distinct processing messages in random order
pub fn processing_messages<R: Rng + ?Sized>(rng: &mut R) -> Vec<&'static str> {
    let mut messages = PROCESSING_MESSAGES.to_vec();
    messages.shuffle(rng);
    messages.truncate(rng.random_range(3..=5));
    messages
}

fn banner(title: &str) {
    let rule = "═".repeat(59);
    println!();
    println!("{}", format!("╔{}╗", rule).bright_cyan().bold());
    println!("{}  {}", "║".bright_cyan().bold(), title.bright_white().bold());
    println!("{}", format!("╚{}╝", rule).bright_cyan().bold());
    println!();
}

fn type_line(msg: &str, dots: bool) {
    let mut stdout = std::io::stdout();
    let mut shown = String::new();
    for ch in msg.chars() {
        shown.push(ch);
        print!("\r{} {}█", ">".bright_cyan().bold(), shown.cyan());
        let _ = stdout.flush();
        thread::sleep(CHAR_DELAY);
    }
    if dots {
        for count in 1..=3 {
            print!("\r{} {}{}█", ">".bright_cyan().bold(), msg.cyan(), ".".repeat(count).cyan());
            let _ = stdout.flush();
            thread::sleep(DOT_DELAY);
        }
    }
    // trailing spaces clear the cursor block and dots
    println!("\r{} {}     ", ">".bright_cyan().bold(), format!("{} ✓", msg).bright_green());
}
