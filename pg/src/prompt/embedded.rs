//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

/// Role-setting paragraph that opens every prompt
pub const ADVISOR_ROLE: &str = include_str!("../../prompts/advisor-role.pmt");

/// Closing instructions; `{language}` is replaced with the response language
pub const ADVISOR_CLOSING: &str = include_str!("../../prompts/advisor-closing.pmt");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_is_one_paragraph() {
        let role = ADVISOR_ROLE;
        assert!(role.contains("student advisor"));
        assert_eq!(role.trim_end().lines().count(), 1);
    }

    #[test]
    fn test_closing_has_one_language_slot() {
        let closing = ADVISOR_CLOSING;
        assert_eq!(closing.matches("{language}").count(), 1);
        assert!(closing.contains("- Clear headings and sections"));
        assert!(closing.contains("- Empathetic and encouraging tone"));
        assert!(closing.trim_end().ends_with("specific situation and needs."));
    }
}
