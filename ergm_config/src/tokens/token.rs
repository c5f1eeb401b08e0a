//! Configuration language tokens

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    Equals,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,
    /// Content between double quotes, quotes stripped
    Quoted(String),
    /// Maximal run of ASCII alphanumeric or punctuation characters
    Word(String),
}

impl Token {
    /// Map a punctuation character to its single-character token
    pub fn from_punctuation(ch: char) -> Option<Token> {
        match ch {
            '=' => Some(Token::Equals),
            ',' => Some(Token::Comma),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            '{' => Some(Token::LBrace),
            '}' => Some(Token::RBrace),
            _ => None,
        }
    }

    pub fn is_punctuation(&self) -> bool {
        !matches!(self, Token::Quoted(_) | Token::Word(_))
    }

    /// Text carried by a word or quoted string
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Quoted(s) | Token::Word(s) => Some(s),
            _ => None,
        }
    }

    /// Short description used in "expected X, found Y" messages
    pub fn describe(&self) -> String {
        match self {
            Token::Quoted(s) => format!("string \"{}\"", s),
            Token::Word(s) => format!("'{}'", s),
            punct => format!("'{}'", punct),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Equals => write!(f, "="),
            Token::Comma => write!(f, ","),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::Quoted(s) => write!(f, "\"{}\"", s),
            Token::Word(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_mapping() {
        for ch in ['=', ',', '(', ')', '{', '}'] {
            let token = Token::from_punctuation(ch).unwrap();
            assert!(token.is_punctuation());
            assert_eq!(token.to_string(), ch.to_string());
        }
        assert_eq!(Token::from_punctuation('#'), None);
        assert_eq!(Token::from_punctuation('-'), None);
    }

    #[test]
    fn test_text_and_describe() {
        assert_eq!(Token::Word("Arc".into()).text(), Some("Arc"));
        assert_eq!(Token::Quoted("a b".into()).text(), Some("a b"));
        assert_eq!(Token::Comma.text(), None);
        assert_eq!(Token::RBrace.describe(), "'}'");
        assert_eq!(Token::Quoted("x".into()).describe(), "string \"x\"");
    }
}
