//! Diagnostic text matching.
//!
//! Compilers disagree on how identifiers are quoted in error messages:
//! rustc uses backticks, other front ends use typographic quotes. Both the
//! expected fragment and the captured output are folded to plain ASCII
//! quotes before comparison, so the scenario table can use straight
//! apostrophes throughout.

/// Fold backticks and typographic quotes to their ASCII counterparts.
pub fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '`' | '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

/// Substring containment after quote normalization on both sides.
pub fn contains_diagnostic(captured: &str, expected: &str) -> bool {
    normalize_quotes(captured).contains(&normalize_quotes(expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backticks_fold_to_apostrophes() {
        assert_eq!(
            normalize_quotes("no method named `initialize` found"),
            "no method named 'initialize' found"
        );
    }

    #[test]
    fn curly_quotes_fold_to_ascii() {
        assert_eq!(normalize_quotes("\u{2018}geometry\u{2019}"), "'geometry'");
        assert_eq!(normalize_quotes("\u{201C}actions\u{201D}"), "\"actions\"");
    }

    #[test]
    fn matching_is_insensitive_to_quote_style() {
        let rustc = "error[E0599]: no method named `geometry` found for struct `RunManager<Idle>`";
        assert!(contains_diagnostic(rustc, "no method named 'geometry'"));

        let clang = "error: no member named \u{2018}geometry\u{2019} in \u{2018}run_manager\u{2019}";
        assert!(contains_diagnostic(clang, "no member named 'geometry'"));
    }

    #[test]
    fn absent_fragment_does_not_match() {
        assert!(!contains_diagnostic(
            "error[E0599]: no method named `actions` found",
            "no method named 'geometry'"
        ));
    }
}
