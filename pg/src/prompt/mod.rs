//! Prompt Template System
//!
//! Builds the student-advisor prompt from a category and its answers.
//! The fixed paragraphs live in `.pmt` files compiled into the binary.

mod assembler;
pub mod embedded;

pub use assembler::{DEFAULT_RESPONSE_LANGUAGE, PromptTemplate, assemble};
