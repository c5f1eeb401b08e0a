//! Post-parse validation
//!
//! Requirement checks run on the parsed record alone. Applicability checks
//! need the loaded network and run after symbol resolution.

pub mod applicability;
pub mod error;
pub mod requirements;

pub use applicability::check_applicability;
pub use error::{
    ApplicabilityConflict, InapplicableTerm, RequirementViolation, ValidationError,
    ValidationResult,
};
pub use requirements::check_requirements;
