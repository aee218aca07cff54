//! Line scanner for category documents
//!
//! Recognises only the handful of markers the category/question shape uses,
//! each matched at the start of a trimmed line:
//!
//! ```text
//! categories:
//!   - name: Housing
//!     questions:
//!       - question: Where do you live?
//!         instruction: Dorm, flat, with parents...
//! ```
//!
//! Anything else is skipped. Malformed entries are dropped rather than
//! reported as errors; `scan` records the dropped categories so callers can
//! tell the user about them.

use log::debug;

use crate::catalog::{Catalog, SkippedEntry};
use crate::model::{Category, Question};

const CATEGORIES_KEY: &str = "categories:";
const NAME_MARKER: &str = "- name:";
const QUESTIONS_KEY: &str = "questions:";
const QUESTION_MARKER: &str = "- question:";
const INSTRUCTION_KEY: &str = "instruction:";

enum State {
    /// Before the `categories:` key
    SeekingCategories,
    /// Inside the category list, waiting for the first `- name:`
    SeekingCategory,
    /// Collecting questions for a category that started on `line`
    ReadingCategory { category: Category, line: usize },
}

/// Parse a category document, dropping malformed entries silently
pub fn parse(document: &str) -> Vec<Category> {
    scan(document).categories
}

/// Parse a category document and keep a record of the dropped entries
pub fn scan(document: &str) -> Catalog {
    let mut catalog = Catalog::default();
    let mut lines = document.lines().map(str::trim).enumerate().peekable();
    let mut state = State::SeekingCategories;

    while let Some((index, line)) = lines.next() {
        let line_no = index + 1;
        state = match state {
            State::SeekingCategories => {
                if line.starts_with(CATEGORIES_KEY) {
                    State::SeekingCategory
                } else {
                    State::SeekingCategories
                }
            }
            State::SeekingCategory => match marker_text(line, NAME_MARKER) {
                Some(name) => State::ReadingCategory {
                    category: Category::new(name),
                    line: line_no,
                },
                None => State::SeekingCategory,
            },
            State::ReadingCategory { mut category, line: start } => {
                if let Some(name) = marker_text(line, NAME_MARKER) {
                    finish_category(&mut catalog, category, start);
                    State::ReadingCategory {
                        category: Category::new(name),
                        line: line_no,
                    }
                } else if let Some(text) = marker_text(line, QUESTION_MARKER) {
                    // The instruction, if any, must be the very next line
                    let instruction = match lines.peek() {
                        Some(&(_, next)) => marker_text(next, INSTRUCTION_KEY),
                        None => None,
                    };
                    if instruction.is_some() {
                        lines.next();
                    }
                    category
                        .questions
                        .push(Question::new(text, instruction.unwrap_or_default()));
                    State::ReadingCategory { category, line: start }
                } else {
                    // blank lines, `questions:` and anything unrecognised
                    if line.starts_with(QUESTIONS_KEY) {
                        debug!("scan: questions list for '{}' at line {}", category.name, line_no);
                    }
                    State::ReadingCategory { category, line: start }
                }
            }
        };
    }

    match state {
        State::ReadingCategory { category, line } => finish_category(&mut catalog, category, line),
        State::SeekingCategories => debug!("scan: no '{}' key found", CATEGORIES_KEY),
        State::SeekingCategory => {}
    }

    debug!(
        "scan: {} categories, {} skipped",
        catalog.categories.len(),
        catalog.skipped.len()
    );
    catalog
}

fn finish_category(catalog: &mut Catalog, category: Category, line: usize) {
    if category.name.is_empty() {
        catalog
            .skipped
            .push(SkippedEntry::new(format!("line {}", line), "category has no name"));
    } else {
        catalog.categories.push(category);
    }
}

/// Text following `marker`, trimmed, when `line` starts with it
fn marker_text<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.strip_prefix(marker).map(str::trim)
}
