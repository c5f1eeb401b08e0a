//! Compound dyadic covariates
//!
//! The term-set grammar leaves one dyadic entry per attribute name. Each
//! compound kind needs a fixed number of continuous attributes, written in
//! encounter order to its coordinate slots on the network. The entries of
//! one kind are then collapsed into a single entry, so the engine calls the
//! change statistic once per covariate.

use super::error::{ResolutionError, ResolutionResult};
use crate::graph::{CoordinateSlot, NetworkAttributes};
use crate::logging::codes;
use crate::terms::{AttrType, DyadicKind, DyadicTerm};
use crate::utils::Span;
use crate::{log_debug, log_success};

/// Arity and slot destinations for one compound dyadic kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundCovariate {
    pub kind: DyadicKind,
    /// One slot per required attribute, in declaration order
    pub slots: &'static [CoordinateSlot],
}

impl CompoundCovariate {
    pub fn arity(&self) -> usize {
        self.slots.len()
    }
}

pub static COMPOUND_COVARIATES: &[CompoundCovariate] = &[
    CompoundCovariate {
        kind: DyadicKind::Geographic,
        slots: &[CoordinateSlot::Latitude, CoordinateSlot::Longitude],
    },
    CompoundCovariate {
        kind: DyadicKind::Euclidean,
        slots: &[CoordinateSlot::X, CoordinateSlot::Y, CoordinateSlot::Z],
    },
];

pub fn covariate_for(kind: DyadicKind) -> Option<&'static CompoundCovariate> {
    COMPOUND_COVARIATES.iter().find(|c| c.kind == kind)
}

/// Entries of one kind gathered in encounter order
struct KindGroup {
    covariate: &'static CompoundCovariate,
    first: DyadicTerm,
    names: Vec<String>,
    indices: Vec<usize>,
    span: Span,
}

/// Resolve, arity-check, assign slots and coalesce the dyadic list
pub fn resolve_dyadic<G: NetworkAttributes + ?Sized>(
    entries: Vec<DyadicTerm>,
    graph: &mut G,
) -> ResolutionResult<Vec<DyadicTerm>> {
    let entries_in = entries.len();
    let names_in: usize = entries.iter().map(|e| e.attr_names.len()).sum();

    let mut groups: Vec<KindGroup> = Vec::new();
    for entry in entries {
        let kind = entry.spec.dyadic_kind.ok_or_else(|| {
            ResolutionError::internal(&format!(
                "dyadic term '{}' has no compound kind",
                entry.spec.name
            ))
        })?;
        let covariate = covariate_for(kind).ok_or_else(|| {
            ResolutionError::internal(&format!(
                "no coordinate slots registered for {} distance",
                kind
            ))
        })?;

        let mut indices = Vec::with_capacity(entry.attr_names.len());
        for name in &entry.attr_names {
            let index = graph
                .find_attribute(AttrType::Continuous, name)
                .ok_or_else(|| {
                    ResolutionError::unknown_attribute(
                        entry.spec.name,
                        name,
                        AttrType::Continuous,
                        entry.span,
                    )
                })?;
            indices.push(index);
        }

        match groups.iter_mut().find(|g| g.covariate.kind == kind) {
            Some(group) => {
                group.names.extend(entry.attr_names.iter().cloned());
                group.indices.extend(indices);
                group.span = group.span.merge(entry.span);
            }
            None => groups.push(KindGroup {
                covariate,
                names: entry.attr_names.clone(),
                indices,
                span: entry.span,
                first: entry,
            }),
        }
    }

    for group in &groups {
        let expected = group.covariate.arity();
        if group.indices.len() != expected {
            return Err(ResolutionError::coordinate_count_mismatch(
                group.covariate.kind,
                expected,
                group.indices.len(),
                group.span,
            ));
        }
    }

    let mut coalesced = Vec::with_capacity(groups.len());
    for group in groups {
        let assignments = group
            .covariate
            .slots
            .iter()
            .zip(group.names.iter().zip(&group.indices));
        for (slot, (name, index)) in assignments {
            graph.set_coordinate_slot(*slot, *index);
            log_debug!("Coordinate slot assigned",
                "slot" => slot,
                "attribute" => name,
                "index" => index
            );
        }

        coalesced.push(DyadicTerm {
            attr_names: group.names,
            attr_indices: group.indices,
            span: group.span,
            ..group.first
        });
    }

    let names_out: usize = coalesced.iter().map(|e| e.attr_names.len()).sum();
    if names_out != names_in || coalesced.len() > COMPOUND_COVARIATES.len() {
        return Err(ResolutionError::internal(&format!(
            "{} attribute names in, {} out, {} entries",
            names_in,
            names_out,
            coalesced.len()
        )));
    }

    if entries_in > 0 {
        log_success!(
            codes::success::DYADIC_COALESCING_COMPLETE,
            "Dyadic covariates coalesced",
            "entries_in" => entries_in,
            "entries_out" => coalesced.len()
        );
    }
    Ok(coalesced)
}
