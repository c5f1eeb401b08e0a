// build.rs - TOML-driven compile-time limit generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    file_processing: FileProcessingLimits,
    lexical: LexicalLimits,
    terms: TermLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct FileProcessingLimits {
    max_file_size: u64,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_token_length: usize,
    max_token_count: usize,
}

#[derive(serde::Deserialize)]
struct TermLimits {
    max_terms_per_set: usize,
    max_attributes_per_term: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    max_log_message_length: usize,
    security_min_log_level: u8,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=ERGM_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=ERGM_CONFIG_DIR");

    let profile = env::var("ERGM_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("ERGM_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Workspace root is the parent of the crate directory
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_FILE_SIZE: u64 = 100_000_000;
    const ABSOLUTE_MAX_TOKEN_LENGTH: usize = 1_000_000;

    if config.file_processing.max_file_size > ABSOLUTE_MAX_FILE_SIZE {
        panic!("LIMITS: max_file_size exceeds absolute maximum");
    }

    if config.lexical.max_token_length == 0
        || config.lexical.max_token_length > ABSOLUTE_MAX_TOKEN_LENGTH
    {
        panic!("LIMITS: max_token_length must be in 1..={}", ABSOLUTE_MAX_TOKEN_LENGTH);
    }

    if config.terms.max_attributes_per_term < 3 {
        // Euclidean distance needs three coordinates in one term
        panic!("LIMITS: max_attributes_per_term must be at least 3");
    }

    if config.logging.security_min_log_level > 2 {
        panic!("LIMITS: security_min_log_level too high (max: 2)");
    }

    if profile == "production" && config.file_processing.max_file_size > 10_000_000 {
        panic!("PRODUCTION: max_file_size too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod file_processing {{
        pub const MAX_FILE_SIZE: u64 = {};
    }}

    pub mod lexical {{
        pub const MAX_TOKEN_LENGTH: usize = {};
        pub const MAX_TOKEN_COUNT: usize = {};
    }}

    pub mod terms {{
        pub const MAX_TERMS_PER_SET: usize = {};
        pub const MAX_ATTRIBUTES_PER_TERM: usize = {};
    }}

    pub mod logging {{
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
        pub const SECURITY_MIN_LOG_LEVEL: u8 = {};
    }}
}}
"#,
        profile,
        config.file_processing.max_file_size,
        config.lexical.max_token_length,
        config.lexical.max_token_count,
        config.terms.max_terms_per_set,
        config.terms.max_attributes_per_term,
        config.logging.max_log_message_length,
        config.logging.security_min_log_level,
    );

    fs::write(output_path, constants_code).unwrap();
}
