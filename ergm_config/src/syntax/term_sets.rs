//! The four term-set grammars
//!
//! Each grammar runs after the opening `{` and reads terms until the matching
//! `}`. Term names are looked up case-insensitively in the set's capability
//! table; the argument clause is then read according to the term's shape.
//! Entries are appended to the matching list of [`ParamConfig`].

use crate::config::compile_time::terms::{MAX_ATTRIBUTES_PER_TERM, MAX_TERMS_PER_SET};
use crate::logging::codes;
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::syntax::helpers::{expect, expect_name, expect_number, expect_text, list_separator, peek_is};
use crate::terms::{
    AttrInteractionTerm, AttributeTerm, DyadicTerm, ParamConfig, StructuralTerm, TermSetKind,
    TermSpec, DEFAULT_LAMBDA,
};
use crate::tokens::{Token, TokenStream};
use crate::utils::{Span, Spanned};
use crate::{log_debug, log_success};

/// Parse the body of one term set. The opening brace has been consumed.
/// Returns the number of entries appended.
pub fn parse_term_set(
    kind: TermSetKind,
    tokens: &mut TokenStream<'_>,
    params: &mut ParamConfig,
    value_bearing: bool,
) -> SyntaxResult<usize> {
    let before = params.len_of(kind);

    if !tokens.advance_if(&Token::RBrace)? {
        loop {
            let name = expect_name(tokens, "term name")?;
            let spec = kind
                .lookup(&name.value)
                .ok_or_else(|| SyntaxError::unknown_term(kind, &name.value, name.span))?;

            let mut grammar = TermGrammar {
                tokens: &mut *tokens,
                spec,
                name_span: name.span,
                value_bearing,
            };
            match kind {
                TermSetKind::Structural => {
                    let term = grammar.structural()?;
                    push_checked(&mut params.structural, term, kind, name.span)?;
                }
                TermSetKind::Attribute => {
                    for term in grammar.attribute()? {
                        push_checked(&mut params.attribute, term, kind, name.span)?;
                    }
                }
                TermSetKind::Dyadic => {
                    for term in grammar.dyadic()? {
                        push_checked(&mut params.dyadic, term, kind, name.span)?;
                    }
                }
                TermSetKind::AttrInteraction => {
                    let term = grammar.interaction()?;
                    push_checked(&mut params.interaction, term, kind, name.span)?;
                }
            }

            if !list_separator(tokens, &Token::RBrace)? {
                break;
            }
        }
    }

    let appended = params.len_of(kind) - before;
    log_success!(
        codes::success::TERM_SET_PARSED,
        "Term set parsed",
        "term_set" => kind.keyword(),
        "entries" => appended
    );
    Ok(appended)
}

fn push_checked<T>(list: &mut Vec<T>, term: T, kind: TermSetKind, span: Span) -> SyntaxResult<()> {
    if list.len() >= MAX_TERMS_PER_SET {
        return Err(SyntaxError::TooManyTerms {
            kind,
            limit: MAX_TERMS_PER_SET,
            span,
        });
    }
    list.push(term);
    Ok(())
}

/// Argument-clause reader for one term whose name has been consumed
struct TermGrammar<'a, 'src> {
    tokens: &'a mut TokenStream<'src>,
    spec: &'static TermSpec,
    name_span: Span,
    value_bearing: bool,
}

impl TermGrammar<'_, '_> {
    /// `Name [ (lambda) ] [ = value ]`
    fn structural(&mut self) -> SyntaxResult<StructuralTerm> {
        let lambda = if self.spec.takes_decay() {
            let mut lambda = DEFAULT_LAMBDA;
            if self.tokens.advance_if(&Token::LParen)? {
                let decay = expect_number(self.tokens)?;
                if decay.value <= 1.0 {
                    return Err(SyntaxError::decay_out_of_range(
                        self.spec.name,
                        decay.value,
                        decay.span,
                    ));
                }
                expect(self.tokens, &Token::RParen)?;
                lambda = decay.value;
            }
            Some(lambda)
        } else {
            if let Some(token) = self.tokens.peek()? {
                if token.value == Token::LParen {
                    return Err(SyntaxError::unexpected_token(
                        "no argument list",
                        &token.value.describe(),
                        token.span,
                    ));
                }
            }
            None
        };

        let value = self.inline_value()?;
        log_debug!("Structural term", "term" => self.spec.name);

        Ok(StructuralTerm {
            spec: self.spec,
            lambda,
            value,
            span: self.name_span,
        })
    }

    /// `Name( attr [, exponent] [= value] [, attr ...] )`, one entry per attribute
    fn attribute(&mut self) -> SyntaxResult<Vec<AttributeTerm>> {
        expect(self.tokens, &Token::LParen)?;

        let mut terms = Vec::new();
        loop {
            let attr = self.attribute_name(terms.len())?;

            let exponent = if self.spec.takes_exponent() {
                expect(self.tokens, &Token::Comma)?;
                let exponent = expect_number(self.tokens)?;
                if !(0.0..=1.0).contains(&exponent.value) {
                    return Err(SyntaxError::exponent_out_of_range(
                        self.spec.name,
                        exponent.value,
                        exponent.span,
                    ));
                }
                Some(exponent.value)
            } else {
                None
            };

            let value = self.inline_value()?;
            terms.push(AttributeTerm {
                spec: self.spec,
                attr_name: attr.value,
                exponent,
                value,
                attr_index: None,
                span: self.name_span.merge(attr.span),
            });

            if !list_separator(self.tokens, &Token::RParen)? {
                break;
            }
        }

        log_debug!("Attribute term", "term" => self.spec.name, "entries" => terms.len());
        Ok(terms)
    }

    /// `Name( attr [, attr ...] ) [= value]`, value replicated to every entry
    fn dyadic(&mut self) -> SyntaxResult<Vec<DyadicTerm>> {
        expect(self.tokens, &Token::LParen)?;

        let mut names = Vec::new();
        loop {
            names.push(self.attribute_name(names.len())?);
            if !list_separator(self.tokens, &Token::RParen)? {
                break;
            }
        }

        let value = self.inline_value()?;
        log_debug!("Dyadic term", "term" => self.spec.name, "attributes" => names.len());

        Ok(names
            .into_iter()
            .map(|attr| DyadicTerm {
                spec: self.spec,
                attr_names: vec![attr.value],
                value,
                attr_indices: Vec::new(),
                span: self.name_span.merge(attr.span),
            })
            .collect())
    }

    /// `Name( attr1, attr2 [= value] )`, exactly two attributes
    fn interaction(&mut self) -> SyntaxResult<AttrInteractionTerm> {
        let open = expect(self.tokens, &Token::LParen)?;

        let first = self.attribute_name(0)?;
        if !list_separator(self.tokens, &Token::RParen)? {
            return Err(SyntaxError::wrong_argument_count(
                self.spec.name,
                "exactly 2",
                1,
                open.span.merge(first.span),
            ));
        }

        let second = self.attribute_name(1)?;
        let value = self.inline_value()?;

        let close = self.tokens.last_span();
        if list_separator(self.tokens, &Token::RParen)? {
            let found = 2 + self.count_remaining_names()?;
            return Err(SyntaxError::wrong_argument_count(
                self.spec.name,
                "exactly 2",
                found,
                open.span.merge(close),
            ));
        }

        log_debug!("Interaction term", "term" => self.spec.name);
        Ok(AttrInteractionTerm {
            spec: self.spec,
            attr_names: [first.value, second.value],
            value,
            attr_indices: None,
            span: self.name_span.merge(self.tokens.last_span()),
        })
    }

    fn attribute_name(&mut self, seen: usize) -> SyntaxResult<Spanned<String>> {
        let attr = expect_text(self.tokens, "attribute name")?;
        if seen >= MAX_ATTRIBUTES_PER_TERM {
            return Err(SyntaxError::TooManyAttributes {
                term: self.spec.name.to_string(),
                limit: MAX_ATTRIBUTES_PER_TERM,
                span: attr.span,
            });
        }
        Ok(attr)
    }

    /// Names left after an over-long interaction list, up to the closing `)`
    fn count_remaining_names(&mut self) -> SyntaxResult<usize> {
        let mut count = 0;
        loop {
            expect_text(self.tokens, "attribute name")?;
            count += 1;
            if peek_is(self.tokens, &Token::Equals)? {
                self.tokens.next_token()?;
                expect_number(self.tokens)?;
            }
            if !list_separator(self.tokens, &Token::RParen)? {
                return Ok(count);
            }
        }
    }

    /// `= value`: mandatory when value-bearing, forbidden otherwise
    fn inline_value(&mut self) -> SyntaxResult<Option<f64>> {
        if self.value_bearing {
            if !self.tokens.advance_if(&Token::Equals)? {
                let next = self.tokens.peek()?.map(|t| t.span);
                let span = next.unwrap_or_else(|| self.tokens.last_span());
                return Err(SyntaxError::missing_value(self.spec.name, span));
            }
            Ok(Some(expect_number(self.tokens)?.value))
        } else if peek_is(self.tokens, &Token::Equals)? {
            let span = self.tokens.peek()?.map_or(self.name_span, |t| t.span);
            Err(SyntaxError::unexpected_value(self.spec.name, span))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn parse(kind: TermSetKind, body: &str, value_bearing: bool) -> SyntaxResult<ParamConfig> {
        let mut tokens = TokenStream::new(body);
        let mut params = ParamConfig::new();
        expect(&mut tokens, &Token::LBrace)?;
        parse_term_set(kind, &mut tokens, &mut params, value_bearing)?;
        assert!(tokens.is_at_end().unwrap());
        Ok(params)
    }

    /// A syntactically complete singleton set for any catalog entry
    fn singleton(kind: TermSetKind, spec: &TermSpec, value_bearing: bool) -> String {
        let value = if value_bearing { " = 0.5" } else { "" };
        match kind {
            TermSetKind::Structural => format!("{{{}{}}}", spec.name, value),
            TermSetKind::Attribute if spec.takes_exponent() => {
                format!("{{{}(a, 0.5{})}}", spec.name, value)
            }
            TermSetKind::Attribute => format!("{{{}(a{})}}", spec.name, value),
            TermSetKind::Dyadic => format!("{{{}(a){}}}", spec.name, value),
            TermSetKind::AttrInteraction => format!("{{{}(a, b{})}}", spec.name, value),
        }
    }

    fn appended_spec(params: &ParamConfig, kind: TermSetKind) -> &'static TermSpec {
        match kind {
            TermSetKind::Structural => params.structural[0].spec,
            TermSetKind::Attribute => params.attribute[0].spec,
            TermSetKind::Dyadic => params.dyadic[0].spec,
            TermSetKind::AttrInteraction => params.interaction[0].spec,
        }
    }

    #[test]
    fn test_every_catalog_term_parses_as_singleton() {
        for kind in TermSetKind::ALL {
            for spec in kind.table() {
                for value_bearing in [false, true] {
                    let source = singleton(kind, spec, value_bearing);
                    let params = parse(kind, &source, value_bearing)
                        .unwrap_or_else(|e| panic!("{}: {}", source, e));
                    assert_eq!(params.len_of(kind), 1, "{}", source);
                    assert_eq!(params.num_params(), 1);

                    let entry = appended_spec(&params, kind);
                    assert!(std::ptr::eq(entry, spec), "{}", source);
                    assert_eq!(entry.change_stat, spec.change_stat, "{}", source);
                }
            }
        }

        let params = parse(TermSetKind::Structural, "{arc}", false).unwrap();
        assert_eq!(params.structural[0].spec.change_stat.symbol(), "changeArc");
    }

    #[test]
    fn test_unknown_names_append_nothing() {
        for kind in TermSetKind::ALL {
            let mut tokens = TokenStream::new("NotATerm");
            let mut params = ParamConfig::new();
            let result = parse_term_set(kind, &mut tokens, &mut params, false);

            assert_matches!(result, Err(SyntaxError::UnknownTerm { name, .. }) if name == "NotATerm");
            assert!(params.is_empty());
        }
    }

    #[test]
    fn test_empty_set() {
        assert!(parse(TermSetKind::Structural, "{}", false).unwrap().is_empty());
    }

    #[test]
    fn test_structural_decay() {
        let params = parse(
            TermSetKind::Structural,
            "{Arc, AltKTrianglesT(3.5), AltInStars}",
            false,
        )
        .unwrap();

        assert_eq!(params.structural[0].lambda, None);
        assert_eq!(params.structural[1].lambda, Some(3.5));
        assert_eq!(params.structural[2].lambda, Some(DEFAULT_LAMBDA));
    }

    #[test]
    fn test_decay_must_exceed_one() {
        assert_matches!(
            parse(TermSetKind::Structural, "{AltStars(1.0)}", false),
            Err(SyntaxError::DecayOutOfRange { value, .. }) if value == 1.0
        );
        assert!(parse(TermSetKind::Structural, "{AltStars(1.0001)}", false).is_ok());
        assert_matches!(
            parse(TermSetKind::Structural, "{AltStars(abc)}", false),
            Err(SyntaxError::InvalidNumber { .. })
        );
    }

    #[test]
    fn test_plain_structural_rejects_arguments() {
        assert_matches!(
            parse(TermSetKind::Structural, "{Arc(2.0)}", false),
            Err(SyntaxError::UnexpectedToken { expected, .. }) if expected == "no argument list"
        );
    }

    #[test]
    fn test_structural_values() {
        let params = parse(
            TermSetKind::Structural,
            "{Arc = -4.0, AltKTrianglesT(2.5) = 1.2}",
            true,
        )
        .unwrap();

        assert_eq!(params.structural[0].value, Some(-4.0));
        assert_eq!(params.structural[1].lambda, Some(2.5));
        assert_eq!(params.structural[1].value, Some(1.2));
    }

    #[test]
    fn test_value_mode_mismatch() {
        assert_matches!(
            parse(TermSetKind::Structural, "{Arc}", true),
            Err(SyntaxError::MissingValue { term, .. }) if term == "Arc"
        );
        assert_matches!(
            parse(TermSetKind::Structural, "{Arc = 1.0}", false),
            Err(SyntaxError::UnexpectedValue { term, .. }) if term == "Arc"
        );
    }

    #[test]
    fn test_attribute_term_expands_per_name() {
        let params = parse(
            TermSetKind::Attribute,
            "{Sender(gender), Matching(class1, class2, class3)}",
            false,
        )
        .unwrap();

        assert_eq!(params.attribute.len(), 4);
        let matching: Vec<_> = params.attribute[1..].iter().collect();
        for term in &matching {
            assert_eq!(term.spec.name, "Matching");
            assert_eq!(term.spec.change_stat.symbol(), "changeMatching");
        }
        let names: Vec<_> = matching.iter().map(|t| t.attr_name.as_str()).collect();
        assert_eq!(names, vec!["class1", "class2", "class3"]);
    }

    #[test]
    fn test_attribute_values_per_name() {
        let params = parse(
            TermSetKind::Attribute,
            "{Matching(class1 = 0.5, class2 = -0.25)}",
            true,
        )
        .unwrap();

        assert_eq!(params.attribute[0].value, Some(0.5));
        assert_eq!(params.attribute[1].value, Some(-0.25));
    }

    #[test]
    fn test_exponent_bounds() {
        for ok in ["0.0", "1.0", "0.5"] {
            let source = format!("{{BipartiteNodematchAlphaA(colour, {})}}", ok);
            let params = parse(TermSetKind::Attribute, &source, false).unwrap();
            assert!(params.attribute[0].exponent.is_some());
        }
        for bad in ["-0.01", "1.01"] {
            let source = format!("{{BipartiteNodematchAlphaA(colour, {})}}", bad);
            assert_matches!(
                parse(TermSetKind::Attribute, &source, false),
                Err(SyntaxError::ExponentOutOfRange { .. })
            );
        }
    }

    #[test]
    fn test_exponent_then_value() {
        let params = parse(
            TermSetKind::Attribute,
            "{BipartiteNodematchBetaB(a, 0.2 = 1.5, b, 0.8 = -1.5)}",
            true,
        )
        .unwrap();

        assert_eq!(params.attribute.len(), 2);
        assert_eq!(params.attribute[0].exponent, Some(0.2));
        assert_eq!(params.attribute[0].value, Some(1.5));
        assert_eq!(params.attribute[1].attr_name, "b");
        assert_eq!(params.attribute[1].exponent, Some(0.8));
    }

    #[test]
    fn test_dyadic_value_replicated() {
        let params = parse(TermSetKind::Dyadic, "{GeoDistance(lat, longi) = -0.7}", true).unwrap();

        assert_eq!(params.dyadic.len(), 2);
        assert!(params.dyadic.iter().all(|t| t.value == Some(-0.7)));
        assert_eq!(params.dyadic[0].attr_names, vec!["lat"]);
        assert_eq!(params.dyadic[1].attr_names, vec!["longi"]);
    }

    #[test]
    fn test_interaction_value_after_second_name() {
        let params = parse(
            TermSetKind::AttrInteraction,
            "{MatchingInteraction(gender, industry = 0.3)}",
            true,
        )
        .unwrap();

        let term = &params.interaction[0];
        assert_eq!(term.attr_names, ["gender".to_string(), "industry".to_string()]);
        assert_eq!(term.value, Some(0.3));
    }

    #[test]
    fn test_interaction_arity() {
        assert_matches!(
            parse(TermSetKind::AttrInteraction, "{MatchingInteraction(a)}", false),
            Err(SyntaxError::WrongArgumentCount { found: 1, .. })
        );
        assert_matches!(
            parse(TermSetKind::AttrInteraction, "{MatchingInteraction(a, b, c, d)}", false),
            Err(SyntaxError::WrongArgumentCount { found: 4, .. })
        );
    }

    #[test]
    fn test_missing_separator() {
        assert_matches!(
            parse(TermSetKind::Structural, "{Arc Reciprocity}", false),
            Err(SyntaxError::UnexpectedToken { expected, .. }) if expected == "',' or '}'"
        );
        assert_matches!(
            parse(TermSetKind::Structural, "{Arc,", false),
            Err(SyntaxError::UnexpectedEndOfInput { .. })
        );
    }

    #[test]
    fn test_attribute_requires_parens() {
        assert_matches!(
            parse(TermSetKind::Attribute, "{Sender}", false),
            Err(SyntaxError::UnexpectedToken { expected, .. }) if expected == "'('"
        );
    }
}
