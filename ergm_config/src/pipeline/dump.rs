//! Keyword and term listings for `-h`, and default configuration text

use super::PipelineError;
use crate::lexical::QUOTE_CHAR;
use crate::schema::{ConfigRecord, FieldSetter};
use crate::terms::{TermSetKind, TermSpec};
use std::fmt::Write as _;
use std::io::{self, Write};

/// Write every keyword of `R` with its type and default, then the term catalog
pub fn dump_config_names<R: ConfigRecord, W: Write>(writer: &mut W) -> Result<(), PipelineError> {
    dump_keywords::<R, W>(writer)?;
    writeln!(writer)?;
    dump_terms(writer)?;
    Ok(())
}

/// Keywords of both records followed by the term catalog
pub fn dump_all_names<W: Write>(writer: &mut W) -> Result<(), PipelineError> {
    dump_keywords::<crate::schema::EstimConfig, W>(writer)?;
    writeln!(writer)?;
    dump_keywords::<crate::schema::SimConfig, W>(writer)?;
    writeln!(writer)?;
    dump_terms(writer)?;
    Ok(())
}

fn dump_keywords<R: ConfigRecord, W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{} configuration parameters:", R::MODE)?;
    for field in R::schema() {
        let default = match (&field.setter, field.default) {
            (FieldSetter::TermSet(_), _) => String::new(),
            (_, Some(raw)) => format!(" [default {}]", raw),
            (_, None) => " [no default]".to_string(),
        };
        writeln!(
            writer,
            "  {} ({}){}: {}",
            field.name,
            field.setter.type_name(),
            default,
            field.description
        )?;
    }
    Ok(())
}

fn dump_terms<W: Write>(writer: &mut W) -> io::Result<()> {
    for kind in TermSetKind::ALL {
        writeln!(writer, "{} terms ({}):", kind, kind.keyword())?;
        for spec in kind.table() {
            writeln!(writer, "  {}", describe_term(spec))?;
        }
    }
    Ok(())
}

/// One-line summary of a catalog entry
pub fn describe_term(spec: &TermSpec) -> String {
    let mut line = format!(
        "{}: {} {}, {} arguments",
        spec.name, spec.net_type, spec.net_mode, spec.shape
    );
    if let Some(attr_type) = spec.attr_type {
        let _ = write!(line, ", {} attributes", attr_type);
    }
    if let Some(kind) = spec.dyadic_kind {
        let _ = write!(line, ", {} distance", kind);
    }
    line
}

/// A configuration file assigning every scalar default of `R`
///
/// Parsing the result gives a record equal to `R::with_defaults()`.
pub fn default_config_text<R: ConfigRecord>() -> String {
    let mut text = format!("# default {} configuration\n", R::MODE);
    for field in R::schema() {
        let Some(raw) = field.default else {
            continue;
        };
        match field.setter {
            FieldSetter::TermSet(_) => continue,
            FieldSetter::Str(_) => {
                let _ = writeln!(text, "{} = {q}{}{q}", field.name, raw, q = QUOTE_CHAR);
            }
            _ => {
                let _ = writeln!(text, "{} = {}", field.name, raw);
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EstimConfig, SimConfig};
    use crate::syntax::parse_config;
    use crate::logging::codes;
    use crate::terms::{AttrType, NetworkMode, NetworkType, TermShape};
    use assert_matches::assert_matches;

    struct ClosedWriter;

    impl Write for ClosedWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn dump<R: ConfigRecord>() -> String {
        let mut out = Vec::new();
        dump_config_names::<R, _>(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_defaults_round_trip() {
        let estim: EstimConfig = parse_config(&default_config_text::<EstimConfig>()).unwrap();
        assert_eq!(estim, EstimConfig::with_defaults());

        let sim: SimConfig = parse_config(&default_config_text::<SimConfig>()).unwrap();
        assert_eq!(sim, SimConfig::with_defaults());
    }

    #[test]
    fn test_default_text_skips_term_sets() {
        let text = default_config_text::<EstimConfig>();
        assert!(text.starts_with("# default estimation configuration"));
        assert!(text.contains("ACA_S = 0.1\n"));
        assert!(text.contains("thetaFilePrefix = \"theta_values\"\n"));
        assert!(!text.contains("structParams"));
        assert!(!text.contains("arclistFile"));
    }

    #[test]
    fn test_dump_lists_every_keyword_and_term() {
        let text = dump::<EstimConfig>();
        for field in EstimConfig::schema() {
            assert!(text.contains(&format!("  {} (", field.name)), "{}", field.name);
        }
        for kind in TermSetKind::ALL {
            assert!(text.contains(kind.keyword()));
            for spec in kind.table() {
                assert!(text.contains(&format!("  {}: ", spec.name)), "{}", spec.name);
            }
        }
        assert!(text.contains("ACA_S (double) [default 0.1]"));
        assert!(text.contains("arclistFile (string) [no default]"));
    }

    #[test]
    fn test_dump_all_covers_both_modes() {
        let mut out = Vec::new();
        dump_all_names(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("estimation configuration parameters:"));
        assert!(text.contains("simulation configuration parameters:"));
        assert!(text.contains("numArcs (unsigned long)"));
    }

    #[test]
    fn test_write_failure_is_output_error() {
        let error = dump_all_names(&mut ClosedWriter).unwrap_err();
        assert_matches!(&error, PipelineError::Output { message } if message.contains("stream closed"));
        assert_eq!(error.stage(), "output");
        assert_eq!(error.error_code(), codes::file_processing::IO_ERROR);

        assert_matches!(
            dump_config_names::<SimConfig, _>(&mut ClosedWriter),
            Err(PipelineError::Output { .. })
        );
    }

    #[test]
    fn test_describe_term() {
        let sender = TermSetKind::Attribute.lookup("Sender").unwrap();
        assert_eq!(sender.net_type, NetworkType::Directed);
        assert_eq!(
            describe_term(sender),
            format!(
                "Sender: {} {}, {} arguments, {} attributes",
                NetworkType::Directed,
                NetworkMode::OneMode,
                TermShape::Plain,
                AttrType::Binary
            )
        );

        let geo = TermSetKind::Dyadic.lookup("GeoDistance").unwrap();
        assert!(describe_term(geo).ends_with("continuous attributes, geographic distance"));
    }
}
