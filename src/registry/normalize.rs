//! Helpers for normalizing names and grade tokens.

use super::types::GradeTokenError;

/// Lowest grade accepted by the registry.
pub const MIN_GRADE: u8 = 0;
/// Highest grade accepted by the registry.
pub const MAX_GRADE: u8 = 100;

/// Sentinel token (case-insensitive) that ends a grade-entry session.
pub(crate) const DONE_SENTINEL: &str = "done";

/// Lookup key for a name: surrounding whitespace stripped, lowercased.
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Trim a raw name for storage, returning `None` when nothing remains.
pub(crate) fn sanitize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Interpretation of a single accepted grade token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeToken {
    /// The sentinel ending the entry session.
    Done,
    /// A validated grade ready to record.
    Grade(u8),
}

/// Parse one raw grade token.
///
/// The sentinel is matched case-insensitively after trimming. Numeric tokens
/// must be base-10 integers within `[MIN_GRADE, MAX_GRADE]`; integers too
/// large for the parser are still classified as out of range rather than
/// malformed.
pub fn parse_grade_token(raw: &str) -> Result<GradeToken, GradeTokenError> {
    let token = raw.trim();
    if token.eq_ignore_ascii_case(DONE_SENTINEL) {
        return Ok(GradeToken::Done);
    }

    let value: i64 = match token.parse() {
        Ok(value) => value,
        Err(_) if is_integer_literal(token) => return Err(GradeTokenError::OutOfRange),
        Err(_) => return Err(GradeTokenError::InvalidFormat),
    };

    u8::try_from(value)
        .ok()
        .filter(|grade| (MIN_GRADE..=MAX_GRADE).contains(grade))
        .map(GradeToken::Grade)
        .ok_or(GradeTokenError::OutOfRange)
}

/// True when the token has integer shape (optional sign, then digits).
fn is_integer_literal(token: &str) -> bool {
    let digits = token
        .strip_prefix(['+', '-'])
        .unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_name_trims_and_rejects_empty() {
        assert_eq!(sanitize_name("  Ann  "), Some("Ann".into()));
        assert_eq!(sanitize_name("   "), None);
        assert_eq!(sanitize_name(""), None);
    }

    #[test]
    fn normalize_name_is_case_and_whitespace_insensitive() {
        assert_eq!(normalize_name("  Ann "), normalize_name("ann"));
        assert_eq!(normalize_name("ANN"), "ann");
    }

    #[test]
    fn parse_grade_token_accepts_sentinel_in_any_case() {
        assert_eq!(parse_grade_token("done"), Ok(GradeToken::Done));
        assert_eq!(parse_grade_token("DONE"), Ok(GradeToken::Done));
        assert_eq!(parse_grade_token("  Done  "), Ok(GradeToken::Done));
    }

    #[test]
    fn parse_grade_token_accepts_range_bounds() {
        assert_eq!(parse_grade_token("0"), Ok(GradeToken::Grade(0)));
        assert_eq!(parse_grade_token("100"), Ok(GradeToken::Grade(100)));
        assert_eq!(parse_grade_token(" 55 "), Ok(GradeToken::Grade(55)));
    }

    #[test]
    fn parse_grade_token_rejects_out_of_range_integers() {
        assert_eq!(parse_grade_token("101"), Err(GradeTokenError::OutOfRange));
        assert_eq!(parse_grade_token("-1"), Err(GradeTokenError::OutOfRange));
        assert_eq!(parse_grade_token("150"), Err(GradeTokenError::OutOfRange));
    }

    #[test]
    fn parse_grade_token_treats_overflowing_integers_as_out_of_range() {
        assert_eq!(
            parse_grade_token("99999999999999999999"),
            Err(GradeTokenError::OutOfRange)
        );
        assert_eq!(
            parse_grade_token("-99999999999999999999"),
            Err(GradeTokenError::OutOfRange)
        );
    }

    #[test]
    fn parse_grade_token_rejects_non_numeric_tokens() {
        assert_eq!(
            parse_grade_token("notanumber"),
            Err(GradeTokenError::InvalidFormat)
        );
        assert_eq!(parse_grade_token(""), Err(GradeTokenError::InvalidFormat));
        assert_eq!(parse_grade_token("7.5"), Err(GradeTokenError::InvalidFormat));
        assert_eq!(parse_grade_token("+"), Err(GradeTokenError::InvalidFormat));
    }
}
