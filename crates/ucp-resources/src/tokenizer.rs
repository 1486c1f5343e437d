// crates/ucp-resources/src/tokenizer.rs
// ============================================================================
// Module: Resource Id Tokenizer
// Description: Lexical split of raw resource id strings into path tokens.
// Purpose: Enforce slash bracketing before any token is interpreted.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! The tokenizer is purely lexical. It requires a single leading `/`, rejects
//! empty tokens (including a trailing `/`), and never assigns meaning to the
//! tokens it returns. A bare `/` yields no tokens and denotes the UCP root.
//! Security posture: input is untrusted; a leading `//` is rejected so an id
//! echoed into a `Location` header cannot become a protocol-relative URL.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::ParseError;
use crate::keywords::SEGMENT_SEPARATOR;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum accepted resource id length in bytes.
pub const MAX_ID_BYTES: usize = 4096;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Splits `raw` into path tokens.
///
/// # Errors
///
/// Returns [`ParseError::TooLong`] past [`MAX_ID_BYTES`], and
/// [`ParseError::MalformedPath`] when the leading slash is missing, doubled,
/// or any token is empty.
pub fn tokenize(raw: &str) -> Result<Vec<&str>, ParseError> {
    if raw.len() > MAX_ID_BYTES {
        return Err(ParseError::TooLong {
            max_bytes: MAX_ID_BYTES,
            actual_bytes: raw.len(),
        });
    }

    let Some(path) = raw.strip_prefix(SEGMENT_SEPARATOR) else {
        return Err(malformed(raw));
    };
    if path.is_empty() {
        return Ok(Vec::new());
    }

    let tokens: Vec<&str> = path.split(SEGMENT_SEPARATOR).collect();
    if tokens.iter().any(|token| token.is_empty()) {
        return Err(malformed(raw));
    }
    Ok(tokens)
}

fn malformed(raw: &str) -> ParseError {
    ParseError::MalformedPath {
        id: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::MAX_ID_BYTES;
    use super::tokenize;
    use crate::error::ParseError;

    #[test]
    fn root_tokenizes_to_nothing() {
        assert_eq!(tokenize("/"), Ok(Vec::new()));
    }

    #[test]
    fn splits_on_separator() {
        assert_eq!(tokenize("/planes/radius/local"), Ok(vec!["planes", "radius", "local"]));
    }

    #[test]
    fn rejects_bad_bracketing() {
        for raw in ["", "planes/radius", "//", "//example.com", "/a//b", "/a/b/"] {
            assert!(
                matches!(tokenize(raw), Err(ParseError::MalformedPath { .. })),
                "expected malformed path for {raw:?}"
            );
        }
    }

    #[test]
    fn rejects_oversized_input() {
        let raw = format!("/{}", "a".repeat(MAX_ID_BYTES));
        assert!(matches!(tokenize(&raw), Err(ParseError::TooLong { .. })));
    }
}
