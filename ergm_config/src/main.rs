use ergm_config::config::runtime::{LexicalPreferences, RuntimeConfig};
use ergm_config::schema::{ConfigRecord, EstimConfig, SimConfig};
use ergm_config::terms::TermSetKind;
use ergm_config::{file_processor, logging, pipeline};
use serde::Serialize;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq)]
enum Command {
    DumpNames,
    Diagnostics,
    Help,
    Load {
        path: PathBuf,
        simulation: bool,
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let runtime_config = RuntimeConfig::default();
    logging::config::init_runtime_preferences(runtime_config.logging.clone())?;
    if let Err(message) = logging::init_global_logging() {
        logging::safe_log_error(logging::codes::system::INITIALIZATION_FAILURE, &message);
        std::process::exit(1);
    }

    let args: Vec<String> = env::args().collect();
    let program_name = args.first().map_or("ergm_config", String::as_str);

    let command = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    match command {
        Command::Help => print_usage(program_name),
        Command::Diagnostics => eprintln!("{}", logging::get_system_diagnostics()),
        Command::DumpNames => {
            if let Err(error) = pipeline::dump_all_names(&mut io::stderr().lock()) {
                report_failure(&error);
            }
        }
        Command::Load {
            path,
            simulation: true,
            json,
        } => load_and_report::<SimConfig>(&path, runtime_config.lexical, json)?,
        Command::Load { path, json, .. } => {
            load_and_report::<EstimConfig>(&path, runtime_config.lexical, json)?
        }
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut simulation = false;
    let mut json = false;
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "-h" => return Ok(Command::DumpNames),
            "--help" => return Ok(Command::Help),
            "--diagnostics" => return Ok(Command::Diagnostics),
            "--sim" => simulation = true,
            "--json" => json = true,
            option if option.starts_with('-') => {
                return Err(format!("unknown option '{}'", option));
            }
            file => {
                if path.replace(PathBuf::from(file)).is_some() {
                    return Err("only one configuration file can be given".to_string());
                }
            }
        }
    }

    let path = path.ok_or_else(|| "no configuration file given".to_string())?;
    Ok(Command::Load {
        path,
        simulation,
        json,
    })
}

fn print_usage(program_name: &str) {
    eprintln!("ERGM configuration checker v{}", env!("CARGO_PKG_VERSION"));
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    {} [--sim] [--json] <config>", program_name);
    eprintln!("    {} -h", program_name);
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -h             List every configuration keyword and model term");
    eprintln!("    --sim          Read a simulation configuration (default: estimation)");
    eprintln!("    --json         Print the parsed record as JSON");
    eprintln!("    --diagnostics  Show logging configuration");
    eprintln!("    --help         Show this message");
    eprintln!();
    eprintln!("LIMITS ({} profile):", ergm_config::config::build_info::profile());
    eprintln!(
        "    Max configuration file size: {} bytes",
        file_processor::get_max_file_size()
    );
}

fn load_and_report<R: ConfigRecord + Serialize>(
    path: &Path,
    preferences: LexicalPreferences,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Processing {} configuration: {}", R::MODE, path.display());

    match pipeline::load_config_with_preferences::<R>(path, preferences) {
        Ok(loaded) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&loaded.record)?);
            } else {
                print_summary(&loaded);
            }
        }
        Err(error) => report_failure(&error),
    }

    Ok(())
}

fn print_summary<R: ConfigRecord>(loaded: &pipeline::LoadedConfig<R>) {
    let params = loaded.record.params();

    println!("\nSUCCESS: configuration parsed and checked");
    println!(
        "  File: {} ({}, {} lines)",
        loaded.file_metadata.path.display(),
        loaded.file_metadata.human_readable_size(),
        loaded.file_metadata.line_count
    );
    println!(
        "  Duration: {:.2} ms",
        loaded.processing_duration.as_secs_f64() * 1000.0
    );
    for kind in TermSetKind::ALL {
        println!("  {}: {} entries", kind.keyword(), params.len_of(kind));
    }
    println!("  Model parameters:");
    for label in params.param_labels() {
        println!("    {}", label);
    }
    if let Some(values) = params.coefficients() {
        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        println!("  Coefficients: {}", values.join(", "));
    }
}

fn report_failure(error: &pipeline::PipelineError) -> ! {
    eprintln!("\nFAILED: {}", get_error_summary(error));
    print_detailed_error(error);
    std::process::exit(1);
}

fn get_error_summary(error: &pipeline::PipelineError) -> String {
    format!("{} error", error.stage())
}

fn print_detailed_error(error: &pipeline::PipelineError) {
    eprintln!("Code: {}", error.error_code());
    match error.span() {
        Some(span) => eprintln!(
            "At line {}, column {}:",
            span.start().line,
            span.start().column
        ),
        None => eprintln!("Details:"),
    }
    eprintln!("  {}", error);

    let code = error.error_code();
    let action = logging::codes::get_action(code.as_str());
    if !action.is_empty() {
        eprintln!("  Recommended action: {}", action);
    }
}
