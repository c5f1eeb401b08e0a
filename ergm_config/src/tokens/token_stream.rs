//! Pull-based token stream with one token of lookahead
//!
//! Tokens are produced on demand so the first lexical or grammar error in
//! file order is the one reported.

use crate::lexical::{Lexer, LexerError, LexicalMetrics};
use crate::tokens::token::Token;
use crate::utils::{Span, Spanned};

/// A token with span information
pub type SpannedToken = Spanned<Token>;

pub struct TokenStream<'src> {
    lexer: Lexer<'src>,
    peeked: Option<Option<SpannedToken>>,
    /// Span of the most recently consumed token, used for end-of-input errors
    last_span: Span,
}

impl<'src> TokenStream<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    pub fn from_lexer(lexer: Lexer<'src>) -> Self {
        Self {
            lexer,
            peeked: None,
            last_span: Span::dummy(),
        }
    }

    /// Look at the next token without consuming it; `None` at end of input
    pub fn peek(&mut self) -> Result<Option<&SpannedToken>, LexerError> {
        if self.peeked.is_none() {
            self.peeked = Some(self.lexer.next_token()?);
        }
        Ok(self.peeked.as_ref().and_then(|t| t.as_ref()))
    }

    /// Consume the next token; `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<SpannedToken>, LexerError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        if let Some(t) = &token {
            self.last_span = t.span;
        }
        Ok(token)
    }

    /// Consume the next token if it equals `expected`
    pub fn advance_if(&mut self, expected: &Token) -> Result<bool, LexerError> {
        let matches = matches!(self.peek()?, Some(t) if &t.value == expected);
        if matches {
            self.next_token()?;
        }
        Ok(matches)
    }

    pub fn is_at_end(&mut self) -> Result<bool, LexerError> {
        Ok(self.peek()?.is_none())
    }

    pub fn last_span(&self) -> Span {
        self.last_span
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        self.lexer.metrics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn values(source: &str) -> Vec<Token> {
        let mut stream = TokenStream::new(source);
        let mut out = Vec::new();
        while let Some(token) = stream.next_token().unwrap() {
            out.push(token.value);
        }
        out
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut stream = TokenStream::new("a = b");

        assert_eq!(stream.peek().unwrap().unwrap().value, Token::Word("a".into()));
        assert_eq!(stream.peek().unwrap().unwrap().value, Token::Word("a".into()));
        assert_eq!(stream.next_token().unwrap().unwrap().value, Token::Word("a".into()));
        assert_eq!(stream.next_token().unwrap().unwrap().value, Token::Equals);
    }

    #[test]
    fn test_advance_if() {
        let mut stream = TokenStream::new("{ }");

        assert!(!stream.advance_if(&Token::RBrace).unwrap());
        assert!(stream.advance_if(&Token::LBrace).unwrap());
        assert!(stream.advance_if(&Token::RBrace).unwrap());
        assert!(stream.is_at_end().unwrap());
    }

    #[test]
    fn test_last_span_tracks_consumed_token() {
        let mut stream = TokenStream::new("x\n  y");
        stream.next_token().unwrap();
        stream.next_token().unwrap();

        assert_eq!(stream.last_span().start.line, 2);
        assert_eq!(stream.last_span().start.column, 3);
        assert!(stream.next_token().unwrap().is_none());
    }

    #[test]
    fn test_lexer_errors_surface_lazily() {
        let mut stream = TokenStream::new("a \"unterminated");

        assert_eq!(stream.next_token().unwrap().unwrap().value, Token::Word("a".into()));
        assert_matches!(stream.next_token(), Err(LexerError::UnterminatedString { .. }));
    }

    #[test]
    fn test_stream_sequence() {
        assert_eq!(
            values("structParams = {Arc}"),
            vec![
                Token::Word("structParams".into()),
                Token::Equals,
                Token::LBrace,
                Token::Word("Arc".into()),
                Token::RBrace,
            ]
        );
    }
}
