//! Token-level helpers shared by the top-level parser and the term-set grammars

use crate::schema::parse_double;
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::{SpannedToken, Token, TokenStream};
use crate::utils::Spanned;

/// Consume the next token, failing at end of input
pub fn next_required(tokens: &mut TokenStream<'_>, expected: &str) -> SyntaxResult<SpannedToken> {
    match tokens.next_token()? {
        Some(token) => Ok(token),
        None => Err(SyntaxError::unexpected_end_of_input(
            expected,
            tokens.last_span(),
        )),
    }
}

/// Consume one specific punctuation token
pub fn expect(tokens: &mut TokenStream<'_>, expected: &Token) -> SyntaxResult<SpannedToken> {
    let wanted = format!("'{}'", expected);
    let token = next_required(tokens, &wanted)?;
    if &token.value == expected {
        Ok(token)
    } else {
        Err(SyntaxError::unexpected_token(
            &wanted,
            &token.value.describe(),
            token.span,
        ))
    }
}

/// Consume a bare word or quoted string and return its text
pub fn expect_text(tokens: &mut TokenStream<'_>, expected: &str) -> SyntaxResult<Spanned<String>> {
    let token = next_required(tokens, expected)?;
    match token.value {
        Token::Word(text) | Token::Quoted(text) => Ok(Spanned::new(text, token.span)),
        other => Err(SyntaxError::unexpected_token(
            expected,
            &other.describe(),
            token.span,
        )),
    }
}

/// Consume a bare word naming a keyword or term; quoted strings are not names
pub fn expect_name(tokens: &mut TokenStream<'_>, expected: &str) -> SyntaxResult<Spanned<String>> {
    let token = next_required(tokens, expected)?;
    match token.value {
        Token::Word(text) => Ok(Spanned::new(text, token.span)),
        other => Err(SyntaxError::unexpected_token(
            expected,
            &other.describe(),
            token.span,
        )),
    }
}

/// Consume a word and parse it as a finite float
pub fn expect_number(tokens: &mut TokenStream<'_>) -> SyntaxResult<Spanned<f64>> {
    let text = expect_text(tokens, "number")?;
    match parse_double(&text.value) {
        Some(value) => Ok(Spanned::new(value, text.span)),
        None => Err(SyntaxError::invalid_number(&text.value, text.span)),
    }
}

/// Whether the next token equals `expected`, without consuming it
pub fn peek_is(tokens: &mut TokenStream<'_>, expected: &Token) -> SyntaxResult<bool> {
    Ok(matches!(tokens.peek()?, Some(t) if &t.value == expected))
}

/// Consume the separator after a list element: `true` on `,`, `false` on `close`
pub fn list_separator(tokens: &mut TokenStream<'_>, close: &Token) -> SyntaxResult<bool> {
    let wanted = format!("',' or '{}'", close);
    let token = next_required(tokens, &wanted)?;
    match &token.value {
        Token::Comma => Ok(true),
        t if t == close => Ok(false),
        other => Err(SyntaxError::unexpected_token(
            &wanted,
            &other.describe(),
            token.span,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_expect_number() {
        let mut tokens = TokenStream::new("2.5 12abc");
        assert_eq!(expect_number(&mut tokens).unwrap().value, 2.5);
        assert_matches!(
            expect_number(&mut tokens),
            Err(SyntaxError::InvalidNumber { text, .. }) if text == "12abc"
        );
        assert_matches!(
            expect_number(&mut tokens),
            Err(SyntaxError::UnexpectedEndOfInput { .. })
        );
    }

    #[test]
    fn test_expect_text_accepts_quoted() {
        let mut tokens = TokenStream::new("\"a b\" name");
        assert_eq!(expect_text(&mut tokens, "value").unwrap().value, "a b");
        assert_eq!(expect_text(&mut tokens, "value").unwrap().value, "name");
    }

    #[test]
    fn test_expect_name_rejects_quoted() {
        let mut tokens = TokenStream::new("\"Arc\"");
        assert_matches!(
            expect_name(&mut tokens, "term name"),
            Err(SyntaxError::UnexpectedToken { expected, .. }) if expected == "term name"
        );
    }

    #[test]
    fn test_list_separator() {
        let mut tokens = TokenStream::new(", } )");
        assert!(list_separator(&mut tokens, &Token::RBrace).unwrap());
        assert!(!list_separator(&mut tokens, &Token::RBrace).unwrap());
        assert_matches!(
            list_separator(&mut tokens, &Token::RBrace),
            Err(SyntaxError::UnexpectedToken { found, .. }) if found == "')'"
        );
    }

    #[test]
    fn test_expect_punctuation() {
        let mut tokens = TokenStream::new("= (");
        assert!(expect(&mut tokens, &Token::Equals).is_ok());
        assert!(peek_is(&mut tokens, &Token::LParen).unwrap());
        assert_matches!(
            expect(&mut tokens, &Token::RParen),
            Err(SyntaxError::UnexpectedToken { expected, .. }) if expected == "')'"
        );
    }
}
