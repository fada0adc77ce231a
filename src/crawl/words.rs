// src/crawl/words.rs
// =============================================================================
// Splits page text into words.
//
// A word is a run of letters, digits and apostrophes. Everything else
// (spaces, punctuation, symbols) separates words. Case is left alone; the
// trie treats "Hello" and "hello" as the same key anyway.
// =============================================================================

use std::collections::HashSet;

// Returns the distinct words in `text`
//
// Example:
//   "Hello, World! It's 123-go." -> {"Hello", "World", "It's", "123", "go"}
pub fn extract_words(text: &str) -> HashSet<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
