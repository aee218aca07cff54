//! Structured-document parser
//!
//! Reads the category document with `serde_yaml` and maps the generic tree
//! into categories and questions, checking the two-level shape explicitly.

use log::{debug, warn};
use serde_yaml::Value;

use crate::catalog::{Catalog, SkippedEntry};
use crate::error::CatalogError;
use crate::model::{Category, Question};

/// Parse a YAML category document
///
/// Syntax errors and a missing or non-list `categories` key fail the whole
/// document. Entries inside the list that lack required fields are skipped
/// and recorded in [`Catalog::skipped`].
pub fn parse_structured(document: &str) -> Result<Catalog, CatalogError> {
    if document.trim().is_empty() {
        return Err(CatalogError::MissingCategories);
    }
    let root: Value = serde_yaml::from_str(document)?;

    let items: &[Value] = match root.get("categories") {
        Some(Value::Sequence(items)) => items.as_slice(),
        Some(Value::Null) => &[],
        Some(other) => {
            return Err(CatalogError::Shape(format!(
                "'categories' must be a list, found {}",
                kind(other)
            )));
        }
        None => return Err(CatalogError::MissingCategories),
    };

    let mut catalog = Catalog::default();
    for (index, item) in items.iter().enumerate() {
        let location = format!("category #{}", index + 1);

        if !item.is_mapping() {
            catalog
                .skipped
                .push(SkippedEntry::new(location, format!("expected a mapping, found {}", kind(item))));
            continue;
        }

        let name = item.get("name").and_then(scalar_text).unwrap_or_default();
        if name.is_empty() {
            catalog.skipped.push(SkippedEntry::new(location, "category has no name"));
            continue;
        }

        let questions = match item.get("questions") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(entries)) => read_questions(&name, entries, &mut catalog.skipped),
            Some(other) => {
                catalog.skipped.push(SkippedEntry::new(
                    format!("category '{}'", name),
                    format!("'questions' must be a list, found {}", kind(other)),
                ));
                Vec::new()
            }
        };

        catalog.categories.push(Category::with_questions(name, questions));
    }

    for entry in &catalog.skipped {
        warn!("parse_structured: skipped {}", entry);
    }
    debug!(
        "parse_structured: {} categories, {} skipped",
        catalog.categories.len(),
        catalog.skipped.len()
    );
    Ok(catalog)
}

fn read_questions(category: &str, entries: &[Value], skipped: &mut Vec<SkippedEntry>) -> Vec<Question> {
    let mut questions = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let text = entry.get("question").and_then(scalar_text).unwrap_or_default();
        if text.is_empty() {
            skipped.push(SkippedEntry::new(
                format!("category '{}' question #{}", category, index + 1),
                "question has no text",
            ));
            continue;
        }
        let instruction = entry.get("instruction").and_then(scalar_text).unwrap_or_default();
        questions.push(Question::new(text, instruction));
    }
    questions
}

/// Text of a scalar node; `None` for null, lists, mappings and tagged values
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
