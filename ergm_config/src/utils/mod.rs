//! Shared source-location types used by the tokenizer, the grammars and the error types.

pub mod span;

pub use span::{Position, Span, Spanned};
