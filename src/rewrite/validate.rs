//! Input validation for rewrite attempts

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("email input is empty")]
    EmptyInput,
}

/// Check the source text before a rewrite is attempted.
///
/// The only rule: trimmed text must be non-empty. Length is bounded by the
/// editor before validation runs, and anything non-empty is acceptable input
/// to a tone rewrite — there is no email-format checking.
pub fn validate(source_text: &str) -> Result<(), ValidationError> {
    if source_text.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(validate(""), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_whitespace_only_rejected() {
        assert_eq!(validate("   \n\t  "), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_any_non_empty_text_accepted() {
        assert_eq!(validate("Hi"), Ok(()));
        assert_eq!(validate("  padded  "), Ok(()));
        assert_eq!(validate("not an email at all"), Ok(()));
    }
}
