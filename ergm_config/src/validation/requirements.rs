//! Required-field and option-conflict checks for a parsed record

use super::error::{ValidationError, ValidationResult};
use crate::logging::codes;
use crate::schema::ConfigRecord;
use crate::{log_debug, log_error, log_success};

/// Run the record's own post-parse checks
pub fn check_requirements<R: ConfigRecord>(record: &R) -> ValidationResult<()> {
    log_debug!("Checking configuration requirements", "mode" => R::MODE);

    let violations = record.requirement_violations();
    if violations.is_empty() {
        log_success!(
            codes::success::REQUIREMENTS_CHECK_PASSED,
            "Configuration requirements satisfied",
            "mode" => R::MODE
        );
        return Ok(());
    }

    for violation in &violations {
        log_error!(violation.error_code(), &violation.to_string(), "mode" => R::MODE);
    }

    Err(ValidationError::RequirementsFailed {
        mode: R::MODE,
        violations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EstimConfig, SimConfig};
    use crate::validation::RequirementViolation;
    use assert_matches::assert_matches;

    #[test]
    fn test_estimation_requires_arclist() {
        let mut config = EstimConfig::with_defaults();
        assert_matches!(
            check_requirements(&config),
            Err(ValidationError::RequirementsFailed { mode: "estimation", violations })
                if violations == vec![RequirementViolation::missing("arclistFile")]
        );

        config.arclist_file = Some("arcs.net".into());
        assert!(check_requirements(&config).is_ok());
    }

    #[test]
    fn test_all_violations_reported() {
        let mut config = SimConfig::with_defaults();
        config.use_ifd_sampler = true;
        config.use_tnt_sampler = true;

        let error = check_requirements(&config).unwrap_err();
        assert_eq!(error.violation_count(), 2);
        assert_eq!(error.error_code(), codes::validation::MISSING_REQUIRED_FIELD);
    }
}
