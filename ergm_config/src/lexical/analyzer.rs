//! Configuration tokenizer
//!
//! Produces one token per call. Tokens longer than `MAX_TOKEN_LENGTH`
//! characters are truncated: the extra characters are consumed and dropped.

use crate::config::compile_time::lexical::{MAX_TOKEN_COUNT, MAX_TOKEN_LENGTH};
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{SpannedToken, Token};
use crate::utils::{Position, Span, Spanned};
use crate::{log_error, log_success, log_warning};
use std::iter::Peekable;
use std::str::CharIndices;

pub const COMMENT_CHAR: char = '#';
pub const QUOTE_CHAR: char = '"';

/// Lexical analysis errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexerError {
    #[error("Invalid character {character:?} at {span}")]
    InvalidCharacter { character: char, span: Span },

    #[error("Unterminated quoted string starting at {span}")]
    UnterminatedString { span: Span },

    #[error("Too many tokens: more than {limit} at {span}")]
    TooManyTokens { limit: usize, span: Span },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::UnterminatedString { .. } => codes::lexical::UNTERMINATED_STRING,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexerError::InvalidCharacter { span, .. }
            | LexerError::UnterminatedString { span }
            | LexerError::TooManyTokens { span, .. } => *span,
        }
    }
}

/// Counters collected while tokenizing
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub word_tokens: usize,
    pub quoted_tokens: usize,
    pub punctuation_tokens: usize,
    pub comment_count: usize,
    pub truncated_tokens: usize,
}

impl LexicalMetrics {
    fn record_token(&mut self, token: &Token) {
        self.total_tokens += 1;
        match token {
            Token::Word(_) => self.word_tokens += 1,
            Token::Quoted(_) => self.quoted_tokens += 1,
            _ => self.punctuation_tokens += 1,
        }
    }
}

/// Characters allowed in a bare word: ASCII alphanumerics and ASCII
/// punctuation other than the single-character tokens, the comment
/// character and the quote character.
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || (ch.is_ascii_punctuation()
            && ch != COMMENT_CHAR
            && ch != QUOTE_CHAR
            && Token::from_punctuation(ch).is_none())
}

pub struct Lexer<'src> {
    chars: Peekable<CharIndices<'src>>,
    /// Position of the next unread character
    pos: Position,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_preferences(source, LexicalPreferences::default())
    }

    pub fn with_preferences(source: &'src str, preferences: LexicalPreferences) -> Self {
        Self {
            chars: source.char_indices().peekable(),
            pos: Position::start(),
            metrics: LexicalMetrics::default(),
            preferences,
            finished: false,
        }
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, ch)| ch)
    }

    fn bump(&mut self) -> Option<char> {
        let (_, ch) = self.chars.next()?;
        self.pos = self.pos.advance(ch);
        Some(ch)
    }

    fn skip_trivia(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_whitespace() {
                self.bump();
            } else if ch == COMMENT_CHAR {
                self.metrics.comment_count += 1;
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn fail(&self, error: LexerError) -> LexerError {
        if self.preferences.include_position_in_errors {
            log_error!(error.error_code(), &error.to_string(), span = error.span());
        } else {
            log_error!(error.error_code(), &error.to_string());
        }
        error
    }

    /// Return the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<SpannedToken>, LexerError> {
        self.skip_trivia();

        let start = self.pos;
        let Some(ch) = self.peek_char() else {
            if !self.finished {
                self.finished = true;
                log_success!(
                    codes::success::TOKENIZATION_COMPLETE,
                    "Tokenization completed",
                    "tokens" => self.metrics.total_tokens,
                    "comments" => self.metrics.comment_count,
                    "truncated" => self.metrics.truncated_tokens
                );
            }
            return Ok(None);
        };

        if self.metrics.total_tokens >= MAX_TOKEN_COUNT {
            return Err(self.fail(LexerError::TooManyTokens {
                limit: MAX_TOKEN_COUNT,
                span: Span::new(start, start),
            }));
        }

        let token = if let Some(punct) = Token::from_punctuation(ch) {
            self.bump();
            punct
        } else if ch == QUOTE_CHAR {
            self.bump();
            let (text, terminated) = self.read_while(|c| c != QUOTE_CHAR);
            if !terminated {
                return Err(self.fail(LexerError::UnterminatedString {
                    span: Span::new(start, self.pos),
                }));
            }
            self.bump();
            Token::Quoted(text)
        } else if is_word_char(ch) {
            let (text, _) = self.read_while(is_word_char);
            Token::Word(text)
        } else {
            self.bump();
            return Err(self.fail(LexerError::InvalidCharacter {
                character: ch,
                span: Span::new(start, self.pos),
            }));
        };

        let span = Span::new(start, self.pos);
        self.metrics.record_token(&token);
        Ok(Some(Spanned::new(token, span)))
    }

    /// Consume characters while `accept` holds. Returns the kept text and
    /// whether a rejected character (rather than end of input) stopped the run.
    fn read_while(&mut self, accept: impl Fn(char) -> bool) -> (String, bool) {
        let start = self.pos;
        let mut text = String::new();
        let mut kept = 0usize;
        let mut truncated = false;

        loop {
            match self.peek_char() {
                Some(c) if accept(c) => {
                    self.bump();
                    if kept < MAX_TOKEN_LENGTH {
                        text.push(c);
                        kept += 1;
                    } else {
                        truncated = true;
                    }
                }
                Some(_) => break,
                None => {
                    self.note_truncation(truncated, start, &text);
                    return (text, false);
                }
            }
        }

        self.note_truncation(truncated, start, &text);
        (text, true)
    }

    fn note_truncation(&mut self, truncated: bool, start: Position, text: &str) {
        if !truncated {
            return;
        }
        self.metrics.truncated_tokens += 1;
        if self.preferences.warn_on_truncation {
            let prefix: String = text.chars().take(32).collect();
            log_warning!(
                codes::lexical::TOKEN_TRUNCATED,
                "Token exceeds maximum length and was truncated",
                span = Span::new(start, self.pos),
                "max_length" => MAX_TOKEN_LENGTH,
                "prefix" => prefix
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token()? {
            tokens.push(token.value);
        }
        Ok(tokens)
    }

    fn word(s: &str) -> Token {
        Token::Word(s.to_string())
    }

    #[test]
    fn test_empty_input_yields_no_token() {
        let mut lexer = Lexer::new("   \n\t # only a comment\n");
        assert_eq!(lexer.next_token().unwrap(), None);
        assert_eq!(lexer.next_token().unwrap(), None);
        assert_eq!(lexer.metrics().comment_count, 1);
    }

    #[test]
    fn test_punctuation_is_never_merged() {
        assert_eq!(
            tokenize("Alt(2.0)=x,y{}").unwrap(),
            vec![
                word("Alt"),
                Token::LParen,
                word("2.0"),
                Token::RParen,
                Token::Equals,
                word("x"),
                Token::Comma,
                word("y"),
                Token::LBrace,
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn test_words_include_other_punctuation() {
        assert_eq!(
            tokenize("../data/arcs_1.txt -0.5e-3 a:b").unwrap(),
            vec![word("../data/arcs_1.txt"), word("-0.5e-3"), word("a:b")]
        );
    }

    #[test]
    fn test_comment_ends_word_and_runs_to_end_of_line() {
        assert_eq!(
            tokenize("abc#comment, with = stuff\ndef").unwrap(),
            vec![word("abc"), word("def")]
        );
    }

    #[test]
    fn test_quoted_string() {
        assert_eq!(
            tokenize("file = \"my file # not a comment, {x}\"").unwrap(),
            vec![
                word("file"),
                Token::Equals,
                Token::Quoted("my file # not a comment, {x}".into()),
            ]
        );
    }

    #[test]
    fn test_first_quote_terminates() {
        assert_eq!(
            tokenize("\"a\"b\"").unwrap_err(),
            LexerError::UnterminatedString {
                span: Span::new(Position::new(4, 1, 5), Position::new(5, 1, 6)),
            }
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_matches!(
            tokenize("x = \"open"),
            Err(LexerError::UnterminatedString { span }) if span.start.column == 5
        );
    }

    #[test]
    fn test_invalid_character() {
        assert_matches!(
            tokenize("Arc \u{00e9}"),
            Err(LexerError::InvalidCharacter { character: '\u{00e9}', span }) if span.start.column == 5
        );
        assert_matches!(tokenize("a\u{0007}"), Err(LexerError::InvalidCharacter { .. }));
    }

    #[test]
    fn test_long_token_is_truncated() {
        let long = "a".repeat(MAX_TOKEN_LENGTH + 100);
        let source = format!("{} next", long);
        let mut lexer = Lexer::new(&source);

        let first = lexer.next_token().unwrap().unwrap();
        assert_eq!(first.value, word(&"a".repeat(MAX_TOKEN_LENGTH)));
        assert_eq!(first.span.end.offset, MAX_TOKEN_LENGTH + 100);

        assert_eq!(lexer.next_token().unwrap().unwrap().value, word("next"));
        assert_eq!(lexer.metrics().truncated_tokens, 1);
    }

    #[test]
    fn test_spans_track_lines() {
        let mut lexer = Lexer::new("a\n  bc");
        lexer.next_token().unwrap();
        let second = lexer.next_token().unwrap().unwrap();

        assert_eq!(second.span.start, Position::new(4, 2, 3));
        assert_eq!(second.span.end, Position::new(6, 2, 5));
    }

    #[test]
    fn test_metrics() {
        let mut lexer = Lexer::new("a = \"b\" # c\n");
        while lexer.next_token().unwrap().is_some() {}

        let metrics = lexer.metrics();
        assert_eq!(metrics.total_tokens, 3);
        assert_eq!(metrics.word_tokens, 1);
        assert_eq!(metrics.quoted_tokens, 1);
        assert_eq!(metrics.punctuation_tokens, 1);
        assert_eq!(metrics.comment_count, 1);
    }

    #[test]
    fn test_word_char_classification() {
        assert!(is_word_char('a'));
        assert!(is_word_char('_'));
        assert!(is_word_char('.'));
        assert!(!is_word_char('#'));
        assert!(!is_word_char('"'));
        assert!(!is_word_char('='));
        assert!(!is_word_char(' '));
    }
}
