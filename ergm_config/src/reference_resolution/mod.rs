//! Symbol resolution
//!
//! Runs once the network's attribute tables are loaded. Attribute and
//! interaction terms get indices into the table named by their catalog
//! entry; dyadic entries are resolved against the continuous table and
//! coalesced per compound kind.

pub mod dyadic;
pub mod error;

pub use dyadic::{covariate_for, resolve_dyadic, CompoundCovariate, COMPOUND_COVARIATES};
pub use error::{ResolutionError, ResolutionResult};

use crate::config::runtime::ResolutionPreferences;
use crate::graph::NetworkAttributes;
use crate::logging::codes;
use crate::terms::{AttrType, ParamConfig, TermSpec};
use crate::utils::Span;
use crate::{log_debug, log_error, log_info, log_success};

/// Counts reported after a successful resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    pub attribute_bindings: usize,
    pub interaction_bindings: usize,
    pub dyadic_entries_in: usize,
    pub dyadic_entries_out: usize,
}

impl ResolutionStats {
    pub fn total_bindings(&self) -> usize {
        self.attribute_bindings + self.interaction_bindings + self.dyadic_entries_out
    }
}

/// Resolve every attribute name in `params` against `graph`
pub fn resolve_symbols<G: NetworkAttributes + ?Sized>(
    params: &mut ParamConfig,
    graph: &mut G,
) -> ResolutionResult<ResolutionStats> {
    resolve_symbols_with_preferences(params, graph, &ResolutionPreferences::default())
}

pub fn resolve_symbols_with_preferences<G: NetworkAttributes + ?Sized>(
    params: &mut ParamConfig,
    graph: &mut G,
    preferences: &ResolutionPreferences,
) -> ResolutionResult<ResolutionStats> {
    log_info!("Starting symbol resolution",
        "attribute_terms" => params.attribute.len(),
        "dyadic_entries" => params.dyadic.len(),
        "interaction_terms" => params.interaction.len()
    );

    let result = resolve_all(params, graph, preferences);
    match &result {
        Ok(stats) => {
            log_success!(
                codes::success::SYMBOL_RESOLUTION_COMPLETE,
                "Symbol resolution completed",
                "bindings" => stats.total_bindings(),
                "dyadic_in" => stats.dyadic_entries_in,
                "dyadic_out" => stats.dyadic_entries_out
            );
        }
        Err(error) => match error.span() {
            Some(span) => log_error!(error.error_code(), &error.to_string(), span = span),
            None => log_error!(error.error_code(), &error.to_string()),
        },
    }
    result
}

fn resolve_all<G: NetworkAttributes + ?Sized>(
    params: &mut ParamConfig,
    graph: &mut G,
    preferences: &ResolutionPreferences,
) -> ResolutionResult<ResolutionStats> {
    let mut stats = ResolutionStats::default();

    for term in &mut params.attribute {
        let index = lookup(&*graph, term.spec, &term.attr_name, term.span, preferences)?;
        term.attr_index = Some(index);
        stats.attribute_bindings += 1;
    }

    for term in &mut params.interaction {
        let [first, second] = &term.attr_names;
        let first = lookup(&*graph, term.spec, first, term.span, preferences)?;
        let second = lookup(&*graph, term.spec, second, term.span, preferences)?;
        term.attr_indices = Some([first, second]);
        stats.interaction_bindings += 1;
    }

    stats.dyadic_entries_in = params.dyadic.len();
    let entries = std::mem::take(&mut params.dyadic);
    params.dyadic = resolve_dyadic(entries, graph)?;
    stats.dyadic_entries_out = params.dyadic.len();

    Ok(stats)
}

/// Index of `name` in the table for the term's attribute type
fn lookup<G: NetworkAttributes + ?Sized>(
    graph: &G,
    spec: &'static TermSpec,
    name: &str,
    span: Span,
    preferences: &ResolutionPreferences,
) -> ResolutionResult<usize> {
    let attr_type = spec.attr_type.ok_or_else(|| {
        ResolutionError::internal(&format!(
            "term '{}' has no attribute type",
            spec.name
        ))
    })?;

    let index = graph
        .find_attribute(attr_type, name)
        .ok_or_else(|| ResolutionError::unknown_attribute(spec.name, name, attr_type, span))?;

    if preferences.log_resolution_details {
        log_info!("Attribute resolved",
            "term" => spec.name,
            "attribute" => name,
            "table" => attr_type,
            "index" => index
        );
    } else {
        log_debug!("Attribute resolved", "term" => spec.name, "index" => index);
    }
    Ok(index)
}

/// Attribute names a record's terms need from one table, without duplicates
pub fn required_attributes(params: &ParamConfig, attr_type: AttrType) -> Vec<&str> {
    let mut names = Vec::new();

    for term in &params.attribute {
        if term.spec.attr_type == Some(attr_type) {
            push_unique(&mut names, &term.attr_name);
        }
    }
    for term in &params.interaction {
        if term.spec.attr_type == Some(attr_type) {
            for name in &term.attr_names {
                push_unique(&mut names, name);
            }
        }
    }
    if attr_type == AttrType::Continuous {
        for name in params.dyadic.iter().flat_map(|t| &t.attr_names) {
            push_unique(&mut names, name);
        }
    }
    names
}

fn push_unique<'a>(names: &mut Vec<&'a str>, name: &'a str) {
    if !names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
        names.push(name);
    }
}
