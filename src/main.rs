use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;

use hearscribe::cli::{Cli, Commands};
use hearscribe::config::Config;
use hearscribe::pipeline::{BarProgress, NullProgress, Pipeline, ProgressSink};
use hearscribe::{ChatCleaner, FileStore, YouTubeSource};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            hearing_id,
            url,
            model,
            output_dir,
            max_chunk_tokens,
            timeout,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let overrides = Overrides {
                model,
                output_dir,
                max_chunk_tokens,
                timeout,
            };
            run_process(config, hearing_id, &url, overrides, cli.quiet).await?;
        }
        Commands::ConfigPath => {
            println!("{}", Config::default_path().display());
        }
    }

    Ok(())
}

/// Per-run CLI overrides applied on top of the loaded configuration.
struct Overrides {
    model: Option<String>,
    output_dir: Option<PathBuf>,
    max_chunk_tokens: Option<usize>,
    timeout: Option<Duration>,
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/hearscribe/config.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        Config::load(path)?
    } else {
        Config::load_or_default(&Config::default_path())?
    };

    Ok(config.with_env_overrides())
}

async fn run_process(
    mut config: Config,
    hearing_id: u64,
    url: &str,
    overrides: Overrides,
    quiet: bool,
) -> Result<()> {
    if let Some(model) = overrides.model {
        config.cleaner.model = model;
    }
    if let Some(output_dir) = overrides.output_dir {
        config.storage.output_dir = output_dir;
    }
    if let Some(max_chunk_tokens) = overrides.max_chunk_tokens {
        config.cleaner.max_chunk_tokens = max_chunk_tokens;
    }
    if let Some(timeout) = overrides.timeout {
        config.cleaner.timeout_secs = timeout.as_secs();
    }

    let source = YouTubeSource::new(config.transcript.language.clone());
    let cleaner = ChatCleaner::new(config.cleaner_config()?)?;
    let store = FileStore::new(&config.storage.output_dir);

    let pipeline = Pipeline::new(&source, &cleaner, &store)
        .with_max_chunk_tokens(config.cleaner.max_chunk_tokens);

    let mut progress: Box<dyn ProgressSink> = if quiet {
        Box::new(NullProgress)
    } else {
        Box::new(BarProgress::new())
    };

    let outcome = pipeline
        .process(hearing_id, url, progress.as_mut())
        .await?;

    if let Some(saved) = &outcome.saved {
        println!("{}", "Processing completed successfully.".green());
        println!("  raw:     {}", saved.raw_path.display());
        println!("  cleaned: {}", saved.cleaned_path.display());
    } else if let Some(error) = &outcome.persistence_error {
        // Transcripts were computed but could not be saved; dump the cleaned
        // text to stdout so the run's work is not lost.
        eprintln!("{}", format!("Warning: {error}").yellow());
        eprintln!(
            "Cleaned transcript follows on stdout ({} characters):",
            outcome.cleaned.len()
        );
        println!("{}", outcome.cleaned);
    }

    Ok(())
}
