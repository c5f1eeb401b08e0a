//! Parameter-configuration record: the four parsed term lists
//!
//! Lists are filled by the term-set grammars, then rewritten in place by the
//! symbol resolver (attribute names to indices, dyadic entries coalesced).

use super::catalog::{TermSetKind, TermSpec};
use crate::utils::Span;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuralTerm {
    pub spec: &'static TermSpec,
    /// Decay for `Decay`-shaped terms, `None` otherwise
    pub lambda: Option<f64>,
    /// Fixed coefficient (simulation only)
    pub value: Option<f64>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeTerm {
    pub spec: &'static TermSpec,
    pub attr_name: String,
    /// Exponent for `Exponent`-shaped terms, `None` otherwise
    pub exponent: Option<f64>,
    pub value: Option<f64>,
    /// Index into the attribute table named by `spec.attr_type`; set by resolution
    pub attr_index: Option<usize>,
    pub span: Span,
}

/// A dyadic covariate entry. The grammar produces one entry per attribute
/// name; resolution coalesces them into one entry per compound kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DyadicTerm {
    pub spec: &'static TermSpec,
    pub attr_names: Vec<String>,
    pub value: Option<f64>,
    /// Continuous attribute indices, parallel to `attr_names`; set by resolution
    pub attr_indices: Vec<usize>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttrInteractionTerm {
    pub spec: &'static TermSpec,
    pub attr_names: [String; 2],
    pub value: Option<f64>,
    pub attr_indices: Option<[usize; 2]>,
    pub span: Span,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParamConfig {
    pub structural: Vec<StructuralTerm>,
    pub attribute: Vec<AttributeTerm>,
    pub dyadic: Vec<DyadicTerm>,
    pub interaction: Vec<AttrInteractionTerm>,
}

impl ParamConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of logical model parameters
    pub fn num_params(&self) -> usize {
        self.structural.len() + self.attribute.len() + self.dyadic.len() + self.interaction.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_params() == 0
    }

    pub fn len_of(&self, kind: TermSetKind) -> usize {
        match kind {
            TermSetKind::Structural => self.structural.len(),
            TermSetKind::Attribute => self.attribute.len(),
            TermSetKind::Dyadic => self.dyadic.len(),
            TermSetKind::AttrInteraction => self.interaction.len(),
        }
    }

    /// Output header labels in engine order: structural, attribute, dyadic, interaction
    pub fn param_labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.num_params());
        labels.extend(self.structural.iter().map(|t| t.spec.name.to_string()));
        labels.extend(
            self.attribute
                .iter()
                .map(|t| format!("{}_{}", t.spec.name, t.attr_name)),
        );
        labels.extend(self.dyadic.iter().map(|t| t.spec.name.to_string()));
        labels.extend(self.interaction.iter().map(|t| {
            format!("{}_{}_{}", t.spec.name, t.attr_names[0], t.attr_names[1])
        }));
        labels
    }

    /// Fixed coefficients in label order, or `None` if any term has no value
    pub fn coefficients(&self) -> Option<Vec<f64>> {
        self.structural
            .iter()
            .map(|t| t.value)
            .chain(self.attribute.iter().map(|t| t.value))
            .chain(self.dyadic.iter().map(|t| t.value))
            .chain(self.interaction.iter().map(|t| t.value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: TermSetKind, name: &str) -> &'static TermSpec {
        kind.lookup(name).unwrap()
    }

    fn sample(with_values: bool) -> ParamConfig {
        let v = |x: f64| if with_values { Some(x) } else { None };
        ParamConfig {
            structural: vec![StructuralTerm {
                spec: spec(TermSetKind::Structural, "Arc"),
                lambda: None,
                value: v(-4.0),
                span: Span::dummy(),
            }],
            attribute: vec![AttributeTerm {
                spec: spec(TermSetKind::Attribute, "Sender"),
                attr_name: "gender".into(),
                exponent: None,
                value: v(0.5),
                attr_index: None,
                span: Span::dummy(),
            }],
            dyadic: vec![DyadicTerm {
                spec: spec(TermSetKind::Dyadic, "GeoDistance"),
                attr_names: vec!["lat".into(), "lon".into()],
                value: v(-1.0),
                attr_indices: vec![],
                span: Span::dummy(),
            }],
            interaction: vec![AttrInteractionTerm {
                spec: spec(TermSetKind::AttrInteraction, "MatchingInteraction"),
                attr_names: ["a".into(), "b".into()],
                value: v(0.25),
                attr_indices: None,
                span: Span::dummy(),
            }],
        }
    }

    #[test]
    fn test_param_labels_in_engine_order() {
        assert_eq!(
            sample(false).param_labels(),
            vec![
                "Arc",
                "Sender_gender",
                "GeoDistance",
                "MatchingInteraction_a_b"
            ]
        );
    }

    #[test]
    fn test_coefficients() {
        assert_eq!(sample(true).coefficients(), Some(vec![-4.0, 0.5, -1.0, 0.25]));
        assert_eq!(sample(false).coefficients(), None);
        assert_eq!(ParamConfig::new().coefficients(), Some(vec![]));
    }

    #[test]
    fn test_counts() {
        let config = sample(false);
        assert_eq!(config.num_params(), 4);
        assert_eq!(config.len_of(TermSetKind::Dyadic), 1);
        assert!(ParamConfig::new().is_empty());
    }
}
