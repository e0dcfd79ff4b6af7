// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Cleans raw sentence text before tokenisation.
//
// Why do we need to clean text?
//   Sentences pasted into data files often contain:
//   - Non-breaking spaces (U+00A0) from word processors
//   - Zero-width spaces (U+200B) from copy-pasting
//   - Carriage returns (\r) from Windows line endings
//   - Tab characters left over from the file format
//   - Multiple consecutive spaces from hand-editing
//   - Mixed upper and lower case for the same word
//
// If we don't clean these, the vocabulary treats "Movie" and
// "movie" (or "love " and "love") as different tokens and
// wastes embedding rows on formatting noise.
//
// Cleaning steps (applied in order):
//   1. Replace Unicode whitespace variants with plain space
//   2. Remove invisible control characters
//   3. Lowercase everything
//   4. Collapse runs of whitespace into single spaces
//   5. Trim leading/trailing whitespace
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Clean a raw sentence for downstream tokenisation.
    /// Takes a &str and returns an owned String.
    pub fn clean(&self, text: &str) -> String {

        // ── Step 1: Normalise individual characters ───────────────────────────
        // Map problematic Unicode characters to plain spaces and
        // fold case in one pass over the chars iterator.
        let normalised: String = text
            .chars()
            .flat_map(|c| {
                let c = match c {
                    // Tab → space
                    '\t' => ' ',
                    // Non-breaking space → regular space
                    '\u{00A0}' => ' ',
                    // Zero-width space → regular space
                    '\u{200B}' => ' ',
                    // Byte order mark → space
                    '\u{FEFF}' => ' ',
                    // Line endings → space (sentences are single-line)
                    '\r' | '\n' => ' ',
                    // Any other control character → space
                    c if c.is_control() => ' ',
                    // All other characters pass through
                    c => c,
                };
                // to_lowercase() is Unicode-correct and may yield
                // more than one char (e.g. 'İ'), hence flat_map
                c.to_lowercase()
            })
            .collect();

        // ── Step 2: Collapse whitespace runs ──────────────────────────────────
        // split_whitespace() drops empty fields, so joining the
        // pieces with single spaces collapses every run and trims
        // both ends at the same time.
        normalised
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Implement Default so Preprocessor can be created with Preprocessor::default()
impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// These tests run with `cargo test` and verify the cleaning logic.
// Reference: Rust Book §11 (Writing Automated Tests)
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_multiple_spaces() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("hello   world"), "hello world");
    }

    #[test]
    fn test_trims_edges() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("  hello world  "), "hello world");
    }

    #[test]
    fn test_removes_control_chars() {
        let p = Preprocessor::new();
        // \x01 is a control character that should become a space
        assert_eq!(p.clean("hello\x01world"), "hello world");
    }

    #[test]
    fn test_lowercases() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("I LOVE This Movie"), "i love this movie");
    }

    #[test]
    fn test_flattens_line_breaks() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("hello\r\nworld"), "hello world");
    }

    #[test]
    fn test_empty_string() {
        let p = Preprocessor::new();
        assert_eq!(p.clean(""), "");
    }
}
