//! Answer collection for one category

use colored::Colorize;
use eyre::Result;
use questionset::{Answer, Category};
use tracing::{debug, info};

use super::input::{Input, LineSource};

const ABORT_TOKEN: &str = "abort";

/// How collecting answers ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    /// One answer per question, in question order
    Complete(Vec<Answer>),
    /// Empty answer or "abort"; everything collected so far is discarded
    Aborted,
    Interrupted,
}

/// Whether an answer cancels the session
pub fn is_abort(answer: &str) -> bool {
    let answer = answer.trim();
    answer.is_empty() || answer.eq_ignore_ascii_case(ABORT_TOKEN)
}

/// Ask every question of `category` in order
pub fn collect_answers<I: LineSource>(category: &Category, input: &mut I) -> Result<Collection> {
    debug!(name = %category.name, questions = category.question_count(), "collect_answers: called");
    println!("{}", format!("── {} ──", category.name).bright_white().bold());
    println!();

    let total = category.question_count();
    let prompt = format!("{} {} ", "  →".bright_yellow(), "Your answer:".yellow());
    let mut answers = Vec::with_capacity(total);

    for (i, question) in category.questions.iter().enumerate() {
        println!("{}", format!("Question {}/{}:", i + 1, total).bright_blue().bold());
        println!("  {}", question.question.bright_white());
        if question.has_instruction() {
            println!("  {}", format!("💡 {}", question.instruction).cyan().dimmed());
        }

        let line = match input.read_line(&prompt)? {
            Input::Line(line) => line,
            Input::Interrupted | Input::Eof => return Ok(Collection::Interrupted),
        };

        if is_abort(&line) {
            info!(
                "Session for '{}' aborted at question {}/{} ({} answers discarded)",
                category.name,
                i + 1,
                total,
                answers.len()
            );
            println!("\n{}\n", "⚠ Aborted. Returning to main menu.".yellow());
            return Ok(Collection::Aborted);
        }

        answers.push(Answer::for_question(question, line));
        println!("{}\n", "  ✓ Answer saved".bright_green());
    }

    Ok(Collection::Complete(answers))
}
