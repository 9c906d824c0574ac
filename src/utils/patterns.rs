//! Compilation helper for static regex patterns.

use regex::Regex;

/// Compiles a regex pattern that must succeed (for compile-time constants).
///
/// # Panics
///
/// Panics if the pattern does not compile, which is a programming error.
pub fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_regex_unsafe_valid() {
        let re = compile_regex_unsafe(r"id=(\w+)", "test");
        assert!(re.is_match("id=abc"));
    }

    #[test]
    #[should_panic(expected = "This is a programming error")]
    fn test_compile_regex_unsafe_invalid_panics() {
        compile_regex_unsafe("(unclosed", "test");
    }
}
