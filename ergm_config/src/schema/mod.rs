//! Schema-driven configuration records
//!
//! A record type describes its scalar fields in one static table of
//! [`FieldSpec`]s. Each entry owns a typed setter bound to the concrete field,
//! so one table drives parsing, default application and the `-h` dump.

pub mod estim;
pub mod sim;

pub use estim::EstimConfig;
pub use sim::SimConfig;

use crate::logging::codes;
use crate::log_error;
use crate::terms::{ParamConfig, TermSetKind};
use crate::validation::RequirementViolation;
use std::fmt;

/// Typed writer for one configuration field
pub enum FieldSetter<R> {
    Double(fn(&mut R, f64)),
    UInt(fn(&mut R, u32)),
    ULong(fn(&mut R, u64)),
    Bool(fn(&mut R, bool)),
    Str(fn(&mut R, String)),
    /// Brace-delimited term set parsed by the matching grammar
    TermSet(TermSetKind),
}

impl<R> FieldSetter<R> {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldSetter::Double(_) => "double",
            FieldSetter::UInt(_) => "unsigned int",
            FieldSetter::ULong(_) => "unsigned long",
            FieldSetter::Bool(_) => "bool",
            FieldSetter::Str(_) => "string",
            FieldSetter::TermSet(_) => "term set",
        }
    }

    /// Convert `raw` to the field's type and store it. Term sets are not scalar
    /// and always fail here.
    pub fn apply(&self, record: &mut R, raw: &str) -> Result<(), InvalidScalar> {
        let invalid = InvalidScalar {
            expected: self.type_name(),
        };
        match self {
            FieldSetter::Double(set) => set(record, parse_double(raw).ok_or(invalid)?),
            FieldSetter::UInt(set) => set(record, raw.parse().map_err(|_| invalid)?),
            FieldSetter::ULong(set) => set(record, raw.parse().map_err(|_| invalid)?),
            FieldSetter::Bool(set) => set(record, parse_bool(raw).ok_or(invalid)?),
            FieldSetter::Str(set) => set(record, raw.to_string()),
            FieldSetter::TermSet(_) => return Err(invalid),
        }
        Ok(())
    }
}

/// A raw value that does not convert to the field's declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidScalar {
    pub expected: &'static str,
}

impl fmt::Display for InvalidScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}", self.expected)
    }
}

/// One schema entry
pub struct FieldSpec<R: 'static> {
    pub name: &'static str,
    pub setter: FieldSetter<R>,
    /// Raw default text applied through `setter`; `None` leaves the Rust default
    pub default: Option<&'static str>,
    pub description: &'static str,
}

/// Full-string float parse; non-finite values are rejected
pub fn parse_double(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Case-insensitive `true` / `false`
pub fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// A configuration record populated from one file
pub trait ConfigRecord: Default + Sized + 'static {
    /// Human-readable mode name ("estimation" or "simulation")
    const MODE: &'static str;

    /// Whether every term carries an inline `= value` coefficient
    const VALUE_BEARING: bool;

    fn schema() -> &'static [FieldSpec<Self>];

    fn params(&self) -> &ParamConfig;

    fn params_mut(&mut self) -> &mut ParamConfig;

    /// Post-parse checks: required fields and option conflicts
    fn requirement_violations(&self) -> Vec<RequirementViolation>;

    /// Index of a field by case-insensitive name
    fn field_index(name: &str) -> Option<usize> {
        Self::schema()
            .iter()
            .position(|field| field.name.eq_ignore_ascii_case(name))
    }

    /// A record with every schema default applied through its setter
    fn with_defaults() -> Self {
        let mut record = Self::default();
        for field in Self::schema() {
            if let Some(raw) = field.default {
                if let Err(e) = field.setter.apply(&mut record, raw) {
                    log_error!(
                        codes::system::INTERNAL_ERROR,
                        "Schema default does not match field type",
                        "field" => field.name,
                        "default" => raw,
                        "error" => e
                    );
                }
            }
        }
        record
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Every default in a schema must convert with its own setter
    pub fn assert_defaults_valid<R: ConfigRecord>() {
        for field in R::schema() {
            if let Some(raw) = field.default {
                let mut record = R::default();
                assert!(
                    field.setter.apply(&mut record, raw).is_ok(),
                    "bad default {:?} for {}",
                    raw,
                    field.name
                );
            }
        }
    }

    /// Every term set keyword appears exactly once
    pub fn assert_term_sets_present<R: ConfigRecord>() {
        for kind in TermSetKind::ALL {
            let count = R::schema()
                .iter()
                .filter(|f| matches!(f.setter, FieldSetter::TermSet(k) if k == kind))
                .count();
            assert_eq!(count, 1, "{} term set", kind);
        }
    }
}
