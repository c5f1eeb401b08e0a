//! Token types for the configuration language
//!
//! The language has six single-character punctuation tokens, quoted strings
//! and bare words. Numbers, booleans and names are all bare words; callers
//! interpret them by position in the grammar.

pub mod token;
pub mod token_stream;

pub use token::Token;
pub use token_stream::{SpannedToken, TokenStream};
