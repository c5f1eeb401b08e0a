//! Syntax analysis: configuration text to a populated record
//!
//! The top-level parser handles scalar assignments through the record's
//! schema and hands brace-delimited term sets to the matching grammar.

mod error;
mod helpers;
mod parser;
mod term_sets;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::ConfigParser;
pub use term_sets::parse_term_set;

use crate::config::runtime::LexicalPreferences;
use crate::lexical;
use crate::schema::ConfigRecord;

/// Parse a whole configuration source into a record of type `R`
pub fn parse_config<R: ConfigRecord>(source: &str) -> SyntaxResult<R> {
    ConfigParser::<R>::new(lexical::token_stream(source)).parse()
}

/// Parse with explicit lexical preferences
pub fn parse_config_with_preferences<R: ConfigRecord>(
    source: &str,
    preferences: LexicalPreferences,
) -> SyntaxResult<R> {
    ConfigParser::<R>::new(lexical::token_stream_with_preferences(source, preferences)).parse()
}
