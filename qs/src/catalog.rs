//! Loaded category catalogs

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::Category;
use crate::{scanner, structured};

/// Which parser reads the category document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseMode {
    /// Full YAML parse with explicit shape checks
    #[default]
    Structured,
    /// Line-oriented marker scanner
    Scanner,
}

impl ParseMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Scanner => "scanner",
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "structured" | "yaml" => Ok(Self::Structured),
            "scanner" | "lines" => Ok(Self::Scanner),
            other => Err(format!("unknown parse mode '{}' (expected structured or scanner)", other)),
        }
    }
}

/// An entry that was dropped because it lacked required fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Where the entry was found (line number or list position)
    pub location: String,
    pub reason: String,
}

impl SkippedEntry {
    pub fn new(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SkippedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.reason)
    }
}

/// Categories read from one document, plus what was dropped on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Categories in document order
    pub categories: Vec<Category>,
    pub skipped: Vec<SkippedEntry>,
    /// Problems that did not drop anything but changed how the document was read
    pub warnings: Vec<String>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            ..Self::default()
        }
    }

    /// Parse a document with the chosen parser
    ///
    /// In structured mode the line reading is authoritative for documents
    /// written in the line format: when the YAML is invalid, or when the two
    /// readings disagree (`key: value` inside a question, ` #` read as a
    /// comment), the line reading is used and a warning is recorded.
    pub fn parse(document: &str, mode: ParseMode) -> Result<Self, CatalogError> {
        match mode {
            ParseMode::Structured => parse_reconciled(document),
            ParseMode::Scanner => Ok(scanner::scan(document)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Categories ordered by name, the order menus number them in
    pub fn sorted(&self) -> Vec<&Category> {
        let mut sorted: Vec<&Category> = self.categories.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    /// Category by its 1-based position in [`Catalog::sorted`]
    pub fn select(&self, number: usize) -> Option<&Category> {
        if number == 0 {
            return None;
        }
        self.sorted().get(number - 1).copied()
    }
}

const DIVERGENCE_WARNING: &str = "YAML reading differs from the line-by-line reading; using the line-by-line reading";

fn parse_reconciled(document: &str) -> Result<Catalog, CatalogError> {
    let scanned = scanner::scan(document);
    match structured::parse_structured(document) {
        Ok(catalog) if scanned.is_empty() || catalog.categories == scanned.categories => Ok(catalog),
        Ok(_) => {
            let warning = DIVERGENCE_WARNING.to_string();
            warn!("{}", warning);
            Ok(Catalog {
                warnings: vec![warning],
                ..scanned
            })
        }
        Err(CatalogError::Syntax(e)) if !scanned.is_empty() => {
            let warning = format!("Document is not valid YAML ({}); using the line-by-line reading", e);
            warn!("{}", warning);
            Ok(Catalog {
                warnings: vec![warning],
                ..scanned
            })
        }
        Err(e) => Err(e),
    }
}

/// Read and parse the category document at `path`
///
/// Fails when the file cannot be read, cannot be parsed, or holds no
/// well-formed category at all.
pub fn load(path: impl AsRef<Path>, mode: ParseMode) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| CatalogError::from_io(path, e))?;

    let catalog = Catalog::parse(&content, mode)?;
    if catalog.is_empty() {
        return Err(CatalogError::Empty { path: path.to_path_buf() });
    }

    if !catalog.skipped.is_empty() {
        warn!(
            "{} entries skipped due to malformed structure in {}",
            catalog.skipped.len(),
            path.display()
        );
    }
    info!(
        "Loaded {} categories from {} ({} parser)",
        catalog.len(),
        path.display(),
        mode
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Category::new("Studying"),
            Category::with_questions("Housing", vec![Question::new("Where do you live?", "")]),
            Category::new("Finances"),
        ])
    }

    #[test]
    fn test_sorted_by_name() {
        let catalog = catalog();
        let names: Vec<&str> = catalog.sorted().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Finances", "Housing", "Studying"]);
        // document order is untouched
        assert_eq!(catalog.categories[0].name, "Studying");
    }

    #[test]
    fn test_select_is_one_based() {
        let catalog = catalog();
        assert_eq!(catalog.select(0), None);
        assert_eq!(catalog.select(1).map(|c| c.name.as_str()), Some("Finances"));
        assert_eq!(catalog.select(3).map(|c| c.name.as_str()), Some("Studying"));
        assert_eq!(catalog.select(4), None);
    }

    #[test]
    fn test_parse_mode_from_str() {
        assert_eq!("structured".parse::<ParseMode>(), Ok(ParseMode::Structured));
        assert_eq!("Scanner".parse::<ParseMode>(), Ok(ParseMode::Scanner));
        assert!("xml".parse::<ParseMode>().is_err());
        assert_eq!(ParseMode::default(), ParseMode::Structured);
        assert_eq!(ParseMode::Scanner.to_string(), "scanner");
    }

    #[test]
    fn test_parse_mode_serde() {
        let mode: ParseMode = serde_yaml::from_str("scanner").unwrap();
        assert_eq!(mode, ParseMode::Scanner);
    }

    #[test]
    fn test_invalid_yaml_falls_back_to_line_reading() {
        // Not valid YAML, but the scanner only looks at line prefixes
        let doc = "categories:\n  - name: Housing: Dorms\n\t- name: [broken\n";
        let scanned = Catalog::parse(doc, ParseMode::Scanner).unwrap();
        assert_eq!(scanned.len(), 2);
        assert!(scanned.warnings.is_empty());

        let structured = Catalog::parse(doc, ParseMode::Structured).unwrap();
        assert_eq!(structured.categories, scanned.categories);
        assert_eq!(structured.warnings.len(), 1);
        assert!(structured.warnings[0].contains("not valid YAML"));
    }

    #[test]
    fn test_colon_inside_question_is_kept() {
        let doc = "categories:\n  - name: Financije\n    questions:\n      - question: Rent: how much per month?\n";
        let catalog = Catalog::parse(doc, ParseMode::Structured).unwrap();
        assert_eq!(catalog.categories[0].questions[0].question, "Rent: how much per month?");
        assert_eq!(catalog.warnings.len(), 1);
    }

    #[test]
    fn test_hash_inside_question_is_not_a_comment() {
        let doc = "categories:\n  - name: Goals\n    questions:\n      - question: What is your #1 goal?\n";
        let catalog = Catalog::parse(doc, ParseMode::Structured).unwrap();
        assert_eq!(catalog.categories[0].questions[0].question, "What is your #1 goal?");
        assert!(catalog.warnings[0].contains("differs"));
    }

    #[test]
    fn test_agreeing_readings_keep_yaml_result() {
        let doc = "categories:\n  - name: Housing\n    questions:\n      - question: Where do you live?\n";
        let catalog = Catalog::parse(doc, ParseMode::Structured).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.warnings.is_empty());
    }

    #[test]
    fn test_unrecoverable_yaml_error_is_reported() {
        // The line reading finds nothing either
        let err = Catalog::parse("categories: [\n", ParseMode::Structured).unwrap_err();
        assert!(matches!(err, CatalogError::Syntax(_)));
    }

    #[test]
    fn test_skipped_entry_display() {
        let entry = SkippedEntry::new("line 4", "category has no name");
        assert_eq!(entry.to_string(), "line 4: category has no name");
    }
}
