//! QuestionSet - category and question catalogs
//!
//! Reads the category document that drives guided prompt generation and
//! turns it into an ordered list of [`Category`] records, each holding its
//! [`Question`]s in document order.
//!
//! # Document shape
//!
//! ```text
//! categories:
//!   - name: Housing
//!     questions:
//!       - question: Where do you live?
//!         instruction: Dorm, rented flat, with parents...
//!       - question: What is your monthly rent?
//! ```
//!
//! Two parsers read it:
//!
//! - [`parse_structured`] - full YAML parse, then an explicit check of the
//!   two-level shape
//! - [`parse`] / [`scan`] - a line scanner that only looks at marker prefixes
//!
//! Both drop entries without a name (or question text) instead of failing,
//! and both can report what they dropped via [`Catalog::skipped`].
//!
//! # Example
//!
//! ```ignore
//! use questionset::{ParseMode, load};
//!
//! let catalog = load("config/categories/student-life-hr.yaml", ParseMode::default())?;
//! for (i, category) in catalog.sorted().iter().enumerate() {
//!     println!("{}. {}", i + 1, category.name);
//! }
//! ```

mod catalog;
mod error;
mod model;
mod scanner;
mod structured;

pub use catalog::{Catalog, ParseMode, SkippedEntry, load};
pub use error::CatalogError;
pub use model::{Answer, Category, Question};
pub use scanner::{parse, scan};
pub use structured::parse_structured;

/// Where the category document lives, relative to the working directory
pub const DEFAULT_CATEGORIES_PATH: &str = "config/categories/student-life-hr.yaml";
