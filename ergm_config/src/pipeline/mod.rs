//! Configuration loading pipeline
//!
//! file -> tokens -> record -> requirement checks, then, once the caller has
//! loaded the network's attribute tables, symbol resolution and network
//! applicability.

mod dump;
mod error;

pub use dump::{default_config_text, describe_term, dump_all_names, dump_config_names};
pub use error::PipelineError;

use crate::config::runtime::{LexicalPreferences, ResolutionPreferences};
use crate::file_processor::{self, FileMetadata};
use crate::graph::NetworkAttributes;
use crate::logging::{self, codes};
use crate::reference_resolution::{self, ResolutionStats};
use crate::schema::ConfigRecord;
use crate::terms::ParamConfig;
use crate::{log_info, log_success, syntax, validation};
use std::path::Path;
use std::time::{Duration, Instant};

/// A parsed and requirement-checked configuration record
#[derive(Debug)]
pub struct LoadedConfig<R> {
    pub record: R,
    pub file_metadata: FileMetadata,
    pub processing_duration: Duration,
}

impl<R: ConfigRecord> LoadedConfig<R> {
    fn log_success(&self) {
        log_success!(
            codes::success::CONFIG_LOAD_COMPLETE,
            "Configuration loaded",
            "mode" => R::MODE,
            "size" => self.file_metadata.human_readable_size(),
            "lines" => self.file_metadata.line_count,
            "model_params" => self.record.params().num_params(),
            "duration_ms" => format!("{:.2}", self.processing_duration.as_secs_f64() * 1000.0)
        );
    }
}

/// Read, parse and requirement-check one configuration file
pub fn load_config<R: ConfigRecord>(path: &Path) -> Result<LoadedConfig<R>, PipelineError> {
    load_config_with_preferences(path, LexicalPreferences::default())
}

pub fn load_config_with_preferences<R: ConfigRecord>(
    path: &Path,
    preferences: LexicalPreferences,
) -> Result<LoadedConfig<R>, PipelineError> {
    let start_time = Instant::now();

    logging::with_file_context(path.to_path_buf(), || {
        log_info!("Loading configuration", "mode" => R::MODE, "file" => path.display());

        let file_result = file_processor::process_file(path)?;
        let record = load_config_from_source::<R>(&file_result.source, preferences)?;

        let loaded = LoadedConfig {
            record,
            file_metadata: file_result.metadata,
            processing_duration: start_time.elapsed(),
        };
        loaded.log_success();
        Ok(loaded)
    })
}

/// Parse and requirement-check configuration text already in memory
pub fn load_config_from_source<R: ConfigRecord>(
    source: &str,
    preferences: LexicalPreferences,
) -> Result<R, PipelineError> {
    let record: R = syntax::parse_config_with_preferences(source, preferences)?;
    validation::check_requirements(&record)?;
    Ok(record)
}

/// Bind attribute names to `graph` and check every term against its type and mode
///
/// Must run after the network's attribute tables are loaded.
pub fn resolve_and_validate<G: NetworkAttributes + ?Sized>(
    params: &mut ParamConfig,
    graph: &mut G,
) -> Result<ResolutionStats, PipelineError> {
    resolve_and_validate_with_preferences(params, graph, &ResolutionPreferences::default())
}

pub fn resolve_and_validate_with_preferences<G: NetworkAttributes + ?Sized>(
    params: &mut ParamConfig,
    graph: &mut G,
    preferences: &ResolutionPreferences,
) -> Result<ResolutionStats, PipelineError> {
    let stats = reference_resolution::resolve_symbols_with_preferences(params, graph, preferences)?;
    validation::check_applicability(params, &*graph)?;

    log_success!(
        codes::success::MODEL_READY,
        "Model terms resolved and applicable",
        "params" => params.num_params(),
        "directed" => graph.is_directed(),
        "bipartite" => graph.is_bipartite()
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::schema::{EstimConfig, SimConfig};
    use crate::syntax::SyntaxError;
    use crate::terms::AttrType;
    use crate::validation::{ApplicabilityConflict, ValidationError};
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCENARIO: &str = "arclistFile = arcs.net\n\
                            structParams = {Arc, Reciprocity}\n\
                            attrParams = {Sender(gender)}\n";

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn network(directed: bool) -> Graph {
        Graph::builder()
            .directed(directed)
            .attributes(AttrType::Binary, ["smoker", "female", "gender"])
            .build()
    }

    #[test]
    fn test_load_config_from_file() {
        let file = config_file(SCENARIO);
        let loaded = load_config::<EstimConfig>(file.path()).unwrap();

        assert_eq!(loaded.record.arclist_file.as_deref(), Some("arcs.net"));
        assert_eq!(loaded.record.params.num_params(), 3);
        assert_eq!(loaded.file_metadata.line_count, 3);
    }

    #[test]
    fn test_missing_file() {
        assert_matches!(
            load_config::<EstimConfig>(Path::new("/nonexistent/estim.txt")),
            Err(PipelineError::FileProcessing(_))
        );
    }

    #[test]
    fn test_syntax_errors_abort_loading() {
        let file = config_file("arclistFile = arcs.net\nstructParams = {Arc, Bogus}\n");
        let error = load_config::<EstimConfig>(file.path()).unwrap_err();
        assert_matches!(error, PipelineError::Syntax(SyntaxError::UnknownTerm { .. }));
        assert_eq!(error.stage(), "syntax analysis");
    }

    #[test]
    fn test_requirements_checked_after_parse() {
        assert_matches!(
            load_config_from_source::<EstimConfig>(
                "structParams = {Arc}",
                LexicalPreferences::default()
            ),
            Err(PipelineError::Validation(ValidationError::RequirementsFailed { .. }))
        );

        let sim = load_config_from_source::<SimConfig>(
            "numNodes = 100\nstructParams = {Arc = -2.0}",
            LexicalPreferences::default(),
        )
        .unwrap();
        assert_eq!(sim.params.coefficients(), Some(vec![-2.0]));
    }

    #[test]
    fn test_directed_scenario_resolves_and_validates() {
        let file = config_file(SCENARIO);
        let mut record = load_config::<EstimConfig>(file.path()).unwrap().record;
        let mut graph = network(true);

        let stats = resolve_and_validate(&mut record.params, &mut graph).unwrap();

        assert_eq!(stats.attribute_bindings, 1);
        assert_eq!(record.params.attribute[0].attr_index, Some(2));
        assert_eq!(record.params.param_labels(), vec!["Arc", "Reciprocity", "Sender_gender"]);
    }

    #[test]
    fn test_undirected_scenario_fails_on_directed_terms() {
        let file = config_file(SCENARIO);
        let mut record = load_config::<EstimConfig>(file.path()).unwrap().record;
        let mut graph = network(false);

        let error = resolve_and_validate(&mut record.params, &mut graph).unwrap_err();

        let PipelineError::Validation(ValidationError::InapplicableTerms { violations }) = &error
        else {
            panic!("expected applicability failure, got {:?}", error);
        };
        let terms: Vec<_> = violations.iter().map(|v| v.term).collect();
        assert_eq!(terms, vec!["Reciprocity", "Sender"]);
        assert!(violations
            .iter()
            .all(|v| matches!(v.conflict, ApplicabilityConflict::NetworkType { .. })));
    }

    #[test]
    fn test_unknown_attribute_stops_before_applicability() {
        let mut params = load_config_from_source::<EstimConfig>(
            "arclistFile = a\nattrParams = {Receiver(height)}",
            LexicalPreferences::default(),
        )
        .unwrap()
        .params;

        let error = resolve_and_validate(&mut params, &mut network(false)).unwrap_err();
        assert_matches!(error, PipelineError::Resolution(_));
        assert_eq!(error.stage(), "symbol resolution");
    }
}
