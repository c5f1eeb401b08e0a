//! Lexical analysis for configuration files
//!
//! Turns source text into a lazily produced sequence of tokens, skipping
//! whitespace and `#` comments.

pub mod analyzer;

use crate::config::runtime::LexicalPreferences;
use crate::tokens::TokenStream;

pub use analyzer::{is_word_char, Lexer, LexerError, LexicalMetrics, COMMENT_CHAR, QUOTE_CHAR};

/// Create a token stream over `source` with default preferences
pub fn token_stream(source: &str) -> TokenStream<'_> {
    TokenStream::new(source)
}

/// Create a token stream with custom runtime preferences
pub fn token_stream_with_preferences(
    source: &str,
    preferences: LexicalPreferences,
) -> TokenStream<'_> {
    TokenStream::from_lexer(Lexer::with_preferences(source, preferences))
}
