//! Network applicability: every term against the network's type and mode

use super::error::{ApplicabilityConflict, InapplicableTerm, ValidationError, ValidationResult};
use crate::graph::NetworkAttributes;
use crate::logging::codes;
use crate::terms::{ParamConfig, TermSetKind, TermSpec};
use crate::utils::Span;
use crate::{log_debug, log_error, log_success};

/// Check every term in all four lists; all violations are returned together
pub fn check_applicability<G: NetworkAttributes + ?Sized>(
    params: &ParamConfig,
    graph: &G,
) -> ValidationResult<()> {
    let directed = graph.is_directed();
    let bipartite = graph.is_bipartite();

    log_debug!("Checking term applicability",
        "terms" => params.num_params(),
        "directed" => directed,
        "bipartite" => bipartite
    );

    let mut violations = Vec::new();
    for (kind, spec, span) in terms_of(params) {
        if !spec.net_type.accepts(directed) {
            violations.push(InapplicableTerm {
                kind,
                term: spec.name,
                conflict: ApplicabilityConflict::NetworkType {
                    required: spec.net_type,
                    directed,
                },
                span,
            });
        }
        if !spec.net_mode.accepts(bipartite) {
            violations.push(InapplicableTerm {
                kind,
                term: spec.name,
                conflict: ApplicabilityConflict::NetworkMode {
                    required: spec.net_mode,
                    bipartite,
                },
                span,
            });
        }
    }

    if violations.is_empty() {
        log_success!(
            codes::success::APPLICABILITY_CHECK_PASSED,
            "All terms applicable to network",
            "terms" => params.num_params()
        );
        return Ok(());
    }

    for violation in &violations {
        log_error!(
            codes::validation::INAPPLICABLE_TERM,
            &violation.to_string(),
            span = violation.span,
            "term" => violation.term,
            "term_set" => violation.kind.keyword()
        );
    }
    Err(ValidationError::InapplicableTerms { violations })
}

/// Every term in engine order with its catalog entry
fn terms_of(params: &ParamConfig) -> impl Iterator<Item = (TermSetKind, &'static TermSpec, Span)> + '_ {
    let structural = params
        .structural
        .iter()
        .map(|t| (TermSetKind::Structural, t.spec, t.span));
    let attribute = params
        .attribute
        .iter()
        .map(|t| (TermSetKind::Attribute, t.spec, t.span));
    let dyadic = params
        .dyadic
        .iter()
        .map(|t| (TermSetKind::Dyadic, t.spec, t.span));
    let interaction = params
        .interaction
        .iter()
        .map(|t| (TermSetKind::AttrInteraction, t.spec, t.span));

    structural.chain(attribute).chain(dyadic).chain(interaction)
}
