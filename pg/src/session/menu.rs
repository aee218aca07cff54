//! Category menu

use std::num::IntErrorKind;

use colored::Colorize;
use eyre::Result;
use questionset::{Catalog, Category};
use tracing::debug;

use super::input::{Input, LineSource};

/// What a line typed at the menu means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Exit,
    /// 1-based position in the sorted menu
    Pick(usize),
    OutOfRange,
    Invalid,
}

/// Interpret a menu answer against a menu of `count` entries
pub fn parse_selection(raw: &str, count: usize) -> Selection {
    match raw.trim().parse::<i64>() {
        Ok(0) => Selection::Exit,
        Ok(n) if n >= 1 && (n as u64) <= count as u64 => Selection::Pick(n as usize),
        Ok(_) => Selection::OutOfRange,
        // still a whole number, just too large to hold
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => Selection::OutOfRange,
        Err(_) => Selection::Invalid,
    }
}

/// Result of asking the user for a category
#[derive(Debug)]
pub enum Choice<'a> {
    Category(&'a Category),
    Exit,
    Interrupted,
}

pub fn print_menu(catalog: &Catalog) {
    println!();
    println!("{}", "Welcome to Prompt Generator CLI (Student Edition)!".bright_white().bold());
    println!();
    println!("{}", "Available categories:".bright_blue().bold());
    for (i, category) in catalog.sorted().iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).bright_green().bold(), category.name.green());
    }
    println!("  {} {}", "0.".bright_yellow().bold(), "Exit".yellow());
    println!();
}

/// Ask until the user picks a category, exits, or interrupts
pub fn choose_category<'a, I: LineSource>(catalog: &'a Catalog, input: &mut I) -> Result<Choice<'a>> {
    let count = catalog.len();
    let prompt = format!("{} {} ", "→".bright_cyan().bold(), "Select a category (number):".cyan());

    loop {
        let line = match input.read_line(&prompt)? {
            Input::Line(line) => line,
            Input::Interrupted | Input::Eof => return Ok(Choice::Interrupted),
        };

        match parse_selection(&line, count) {
            Selection::Exit => return Ok(Choice::Exit),
            Selection::Pick(number) => {
                if let Some(category) = catalog.select(number) {
                    debug!(%number, name = %category.name, "choose_category: selected");
                    println!("{} {}\n", "✓ Selected:".bright_green(), category.name.green());
                    return Ok(Choice::Category(category));
                }
            }
            Selection::OutOfRange => {
                println!(
                    "{} {}",
                    "⚠".bright_red(),
                    format!("Please enter a number between 1 and {}, or 0 to exit.", count).red()
                );
            }
            Selection::Invalid => {
                println!("{} {}", "⚠".bright_red(), "Please enter a valid number.".red());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::input::ScriptedInput;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Category::new("Stanovanje"),
            Category::new("Financije"),
            Category::new("Ispiti"),
        ])
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("0", 3), Selection::Exit);
        assert_eq!(parse_selection(" 2 ", 3), Selection::Pick(2));
        assert_eq!(parse_selection("3", 3), Selection::Pick(3));
        assert_eq!(parse_selection("4", 3), Selection::OutOfRange);
        assert_eq!(parse_selection("-1", 3), Selection::OutOfRange);
        assert_eq!(parse_selection("two", 3), Selection::Invalid);
        assert_eq!(parse_selection("", 3), Selection::Invalid);
        assert_eq!(parse_selection("1.5", 3), Selection::Invalid);
    }

    #[test]
    fn test_huge_numbers_are_out_of_range() {
        assert_eq!(parse_selection("99999999999999999999999", 3), Selection::OutOfRange);
        assert_eq!(parse_selection("-99999999999999999999999", 3), Selection::OutOfRange);

        let catalog = catalog();
        let mut input = ScriptedInput::new(["123456789012345678901234567890", "0"]);
        assert!(matches!(choose_category(&catalog, &mut input).unwrap(), Choice::Exit));
        assert_eq!(input.prompts().len(), 2);
    }

    #[test]
    fn test_choose_uses_sorted_order() {
        let catalog = catalog();
        let mut input = ScriptedInput::new(["1"]);
        match choose_category(&catalog, &mut input).unwrap() {
            Choice::Category(c) => assert_eq!(c.name, "Financije"),
            other => panic!("unexpected choice: {:?}", other),
        }
    }

    #[test]
    fn test_choose_reprompts_on_bad_input() {
        let catalog = catalog();
        let mut input = ScriptedInput::new(["abc", "9", "3"]);
        match choose_category(&catalog, &mut input).unwrap() {
            Choice::Category(c) => assert_eq!(c.name, "Stanovanje"),
            other => panic!("unexpected choice: {:?}", other),
        }
        assert_eq!(input.prompts().len(), 3);
    }

    #[test]
    fn test_choose_exit_and_interrupt() {
        let catalog = catalog();
        assert!(matches!(
            choose_category(&catalog, &mut ScriptedInput::new(["0"])).unwrap(),
            Choice::Exit
        ));
        assert!(matches!(
            choose_category(&catalog, &mut ScriptedInput::default().then_interrupt()).unwrap(),
            Choice::Interrupted
        ));
        assert!(matches!(
            choose_category(&catalog, &mut ScriptedInput::default()).unwrap(),
            Choice::Interrupted
        ));
    }
}
