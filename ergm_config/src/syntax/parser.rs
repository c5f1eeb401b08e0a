//! Top-level configuration parser
//!
//! Reads `name = value` and `name = { ... }` assignments until end of input,
//! writing each through the record's schema. A per-field flag array rejects
//! a second assignment to the same keyword.

use crate::logging::codes;
use crate::schema::{ConfigRecord, FieldSetter};
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::syntax::helpers::{expect, expect_name, expect_text};
use crate::syntax::term_sets::parse_term_set;
use crate::tokens::{Token, TokenStream};
use crate::utils::Spanned;
use crate::{log_debug, log_error, log_info, log_success};

pub struct ConfigParser<'src, R: ConfigRecord> {
    tokens: TokenStream<'src>,
    record: R,
    /// One flag per schema entry
    assigned: Vec<bool>,
}

impl<'src, R: ConfigRecord> ConfigParser<'src, R> {
    /// Start from a record with all schema defaults applied
    pub fn new(tokens: TokenStream<'src>) -> Self {
        Self::with_record(tokens, R::with_defaults())
    }

    pub fn with_record(tokens: TokenStream<'src>, record: R) -> Self {
        Self {
            tokens,
            record,
            assigned: vec![false; R::schema().len()],
        }
    }

    /// Parse every assignment and return the populated record
    pub fn parse(mut self) -> SyntaxResult<R> {
        log_info!("Starting configuration parsing", "mode" => R::MODE);

        let result = self.parse_assignments();
        match &result {
            Ok(count) => {
                log_success!(
                    codes::success::CONFIG_PARSE_COMPLETE,
                    "Configuration parsed",
                    "mode" => R::MODE,
                    "assignments" => count,
                    "model_params" => self.record.params().num_params(),
                    "tokens" => self.tokens.metrics().total_tokens
                );
            }
            // the lexer has already reported its own failures
            Err(SyntaxError::Lexer(_)) => {}
            Err(error) => {
                log_error!(
                    error.error_code(),
                    &error.to_string(),
                    span = error.span(),
                    "mode" => R::MODE
                );
            }
        }

        result.map(|_| self.record)
    }

    fn parse_assignments(&mut self) -> SyntaxResult<usize> {
        let mut count = 0;
        while !self.tokens.is_at_end()? {
            let name = expect_name(&mut self.tokens, "parameter name")?;
            expect(&mut self.tokens, &Token::Equals)?;
            self.set_field(&name)?;
            count += 1;
        }
        Ok(count)
    }

    /// Write the value that follows `name =` into the matching field
    fn set_field(&mut self, name: &Spanned<String>) -> SyntaxResult<()> {
        let index = R::field_index(&name.value)
            .ok_or_else(|| SyntaxError::unknown_parameter(&name.value, name.span))?;
        if self.assigned[index] {
            return Err(SyntaxError::duplicate_parameter(&name.value, name.span));
        }
        self.assigned[index] = true;

        let field = &R::schema()[index];
        match &field.setter {
            FieldSetter::TermSet(kind) => {
                expect(&mut self.tokens, &Token::LBrace)?;
                parse_term_set(
                    *kind,
                    &mut self.tokens,
                    self.record.params_mut(),
                    R::VALUE_BEARING,
                )?;
            }
            setter => {
                let raw = expect_text(&mut self.tokens, "value")?;
                setter
                    .apply(&mut self.record, &raw.value)
                    .map_err(|e| {
                        SyntaxError::invalid_value(field.name, &raw.value, e.expected, raw.span)
                    })?;
                log_debug!("Field set", "field" => field.name, "value" => raw.value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EstimConfig, SimConfig};
    use assert_matches::assert_matches;

    fn parse_estim(source: &str) -> SyntaxResult<EstimConfig> {
        ConfigParser::<EstimConfig>::new(TokenStream::new(source)).parse()
    }

    fn parse_sim(source: &str) -> SyntaxResult<SimConfig> {
        ConfigParser::<SimConfig>::new(TokenStream::new(source)).parse()
    }

    #[test]
    fn test_scalar_fields_and_defaults() {
        let config = parse_estim(
            "# estimation settings\n\
             ACA_S = 0.05\n\
             samplerSteps = 5000\n\
             useIFDsampler = True\n\
             arclistFile = \"my arcs.net\"\n\
             binattrFile = bin.txt\n",
        )
        .unwrap();

        assert_eq!(config.aca_s, 0.05);
        assert_eq!(config.sampler_steps, 5000);
        assert!(config.use_ifd_sampler);
        assert_eq!(config.arclist_file.as_deref(), Some("my arcs.net"));
        assert_eq!(config.binattr_file.as_deref(), Some("bin.txt"));
        assert_eq!(config.aca_ee, 1e-9);
        assert_eq!(config.theta_file_prefix, "theta_values");
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let config = parse_estim("aca_s = 0.2\nSAMPLERSTEPS = 10").unwrap();
        assert_eq!(config.aca_s, 0.2);
        assert_eq!(config.sampler_steps, 10);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(parse_estim("  # nothing\n").unwrap(), EstimConfig::with_defaults());
    }

    #[test]
    fn test_unknown_parameter() {
        assert_matches!(
            parse_estim("notAField = 1"),
            Err(SyntaxError::UnknownParameter { name, .. }) if name == "notAField"
        );
    }

    #[test]
    fn test_duplicate_scalar() {
        assert_matches!(
            parse_estim("ACA_S = 0.1\naca_s = 0.2"),
            Err(SyntaxError::DuplicateParameter { name, .. }) if name == "aca_s"
        );
    }

    #[test]
    fn test_duplicate_term_set_always_fails() {
        for source in [
            "structParams = {Arc}\nstructParams = {Reciprocity}",
            "structParams = {}\nSTRUCTPARAMS = {}",
            "attrParams = {Sender(a)}\nattrParams = {}",
        ] {
            assert_matches!(
                parse_estim(source),
                Err(SyntaxError::DuplicateParameter { .. }),
                "{}",
                source
            );
        }
    }

    #[test]
    fn test_invalid_scalar_values() {
        assert_matches!(
            parse_estim("ACA_S = 12abc"),
            Err(SyntaxError::InvalidValue { expected: "double", .. })
        );
        assert_matches!(
            parse_estim("samplerSteps = -5"),
            Err(SyntaxError::InvalidValue { expected: "unsigned int", .. })
        );
        assert_matches!(
            parse_estim("useIFDsampler = yes"),
            Err(SyntaxError::InvalidValue { expected: "bool", .. })
        );
    }

    #[test]
    fn test_grammar_errors() {
        assert_matches!(
            parse_estim("ACA_S 0.1"),
            Err(SyntaxError::UnexpectedToken { expected, .. }) if expected == "'='"
        );
        assert_matches!(
            parse_estim("ACA_S ="),
            Err(SyntaxError::UnexpectedEndOfInput { .. })
        );
        assert_matches!(
            parse_estim("structParams = Arc"),
            Err(SyntaxError::UnexpectedToken { expected, .. }) if expected == "'{'"
        );
        assert_matches!(
            parse_estim("= 1"),
            Err(SyntaxError::UnexpectedToken { expected, .. }) if expected == "parameter name"
        );
    }

    #[test]
    fn test_lexer_errors_propagate() {
        assert_matches!(
            parse_estim("arclistFile = \"unterminated"),
            Err(SyntaxError::Lexer(_))
        );
    }

    #[test]
    fn test_term_sets_in_estimation_mode() {
        let config = parse_estim(
            "arclistFile = arcs.net\n\
             structParams = {Arc, Reciprocity, AltKTrianglesT(2.0)}\n\
             attrParams = {Sender(binaryAttr), Matching(class1, class2)}\n\
             dyadicParams = {logGeoDistance(lat, longi)}\n\
             attrInteractionParams = {MatchingInteraction(gender, industry)}\n",
        )
        .unwrap();

        let params = &config.params;
        assert_eq!(params.structural.len(), 3);
        assert_eq!(params.attribute.len(), 3);
        assert_eq!(params.dyadic.len(), 2);
        assert_eq!(params.interaction.len(), 1);
        assert_eq!(params.structural[2].lambda, Some(2.0));
    }

    #[test]
    fn test_simulation_requires_values() {
        let config = parse_sim(
            "numNodes = 500\n\
             isDirected = True\n\
             numArcs = 5000000000\n\
             structParams = {Arc = -4.0, Reciprocity = 2.0}\n\
             attrInteractionParams = {BinaryPairInteraction(a, b = 0.5)}\n",
        )
        .unwrap();

        assert_eq!(config.num_nodes, 500);
        assert_eq!(config.num_arcs, 5_000_000_000);
        assert_eq!(config.params.coefficients(), Some(vec![-4.0, 2.0, 0.5]));

        assert_matches!(
            parse_sim("structParams = {Arc}"),
            Err(SyntaxError::MissingValue { .. })
        );
    }

    #[test]
    fn test_error_position_is_reported() {
        let error = parse_estim("ACA_S = 0.1\nstructParams = {Arc, Bogus}").unwrap_err();
        assert_matches!(error, SyntaxError::UnknownTerm { .. });
        assert_eq!(error.span().start().line, 2);
        assert_eq!(error.span().start().column, 22);
    }
}
