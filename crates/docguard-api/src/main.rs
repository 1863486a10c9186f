//! Docguard API server
//!
//! Starts the HTTP server that extracts and validates insurance documents.

use anyhow::Context;
use docguard_api::{config::ApiConfig, init_tracing, start_server};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let verbose = args.iter().any(|a| a == "--verbose");
    init_tracing(verbose);

    let config = match config_path(&args)? {
        Some(path) => ApiConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => {
            eprintln!("Warning: No config file specified, using default configuration");
            eprintln!("Usage: docguard-api --config <path-to-config.toml>");
            eprintln!();
            ApiConfig::default()
        }
    };

    start_server(config).await.context("API server stopped")?;

    Ok(())
}

/// Path given after `--config`, if the flag is present
fn config_path(args: &[String]) -> anyhow::Result<Option<&str>> {
    let Some(i) = args.iter().position(|a| a == "--config") else {
        return Ok(None);
    };

    match args.get(i + 1) {
        Some(path) if !path.starts_with("--") => Ok(Some(path.as_str())),
        _ => anyhow::bail!("--config requires a path argument"),
    }
}

fn print_help() {
    println!("Docguard API - Insurance Document Validator");
    println!();
    println!("USAGE:");
    println!("    docguard-api --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --verbose          Enable debug logging");
    println!("    --help             Print this help message");
    println!();
    println!("EXAMPLE:");
    println!("    GEMINI_API_KEY=... docguard-api --config config/docguard.toml");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default '127.0.0.1')");
    println!("    - bind_port: Port number (default 8000)");
    println!("    - vessels_path: JSON array of approved vessel names");
    println!("    - [llm]: endpoint, model, api_key_env, timeout_secs");
    println!("    - [extractor]: max_text_length, extraction_timeout_secs");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_config_path_present() {
        let args = argv(&["docguard-api", "--verbose", "--config", "config/docguard.toml"]);
        assert_eq!(config_path(&args).unwrap(), Some("config/docguard.toml"));
    }

    #[test]
    fn test_config_path_absent() {
        assert_eq!(config_path(&argv(&["docguard-api", "--verbose"])).unwrap(), None);
    }

    #[test]
    fn test_config_flag_without_value() {
        assert!(config_path(&argv(&["docguard-api", "--config"])).is_err());
        assert!(config_path(&argv(&["docguard-api", "--config", "--verbose"])).is_err());
    }
}
