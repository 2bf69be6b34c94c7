use anyhow::{Result, anyhow, bail};
use cjk_softbreak_config::{Config, ConfigError};
use cjk_softbreak_engine::{BatchReport, ParseOptions, process_tree};
use std::{env, path::PathBuf, process};

/// Pick the docs root: the single CLI argument wins, otherwise the config file.
fn docs_path_from(
    args: &[String],
    load_config: impl FnOnce() -> Result<Option<Config>, ConfigError>,
) -> Result<PathBuf> {
    match args {
        [_, path] => {
            let docs_path = PathBuf::from(path);
            log::info!(
                "Using docs path from CLI argument: {}",
                docs_path.display()
            );
            Ok(docs_path)
        }
        [_] => match load_config()? {
            Some(config) => {
                log::info!(
                    "Loaded docs path from config: {}",
                    config.docs_path.display()
                );
                Ok(config.docs_path)
            }
            None => Err(anyhow!(
                "No docs path provided and no config file found at {}",
                Config::config_path().display()
            )),
        },
        _ => bail!("Expected at most one argument"),
    }
}

fn run(docs_path: PathBuf) -> Result<BatchReport> {
    let options = ParseOptions::default();
    let report = process_tree(&docs_path, &options)?;
    Ok(report)
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "cjk-softbreak".to_string());

    let docs_path = match docs_path_from(&args, Config::load) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program_name} [docs-folder-path]");
            process::exit(1);
        }
    };

    match run(docs_path) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
