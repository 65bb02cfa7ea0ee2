//! Command-line interface for hearscribe
//!
//! Provides argument parsing using clap derive macros.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

/// Fetch, clean, and archive YouTube hearing transcripts
#[derive(Parser, Debug)]
#[command(
    name = "hearscribe",
    version,
    about = "Fetch, clean, and archive YouTube hearing transcripts"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress progress output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a video's transcript, clean it, and save both versions
    Process {
        /// Hearing identifier used to name the saved artifacts
        hearing_id: u64,

        /// YouTube watch URL (https://www.youtube.com/watch?v=...)
        url: String,

        /// Cleaning model override
        #[arg(long, value_name = "MODEL")]
        model: Option<String>,

        /// Directory for saved transcripts (default: transcripts)
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Estimated-token budget per cleaning request
        #[arg(long, value_name = "TOKENS")]
        max_chunk_tokens: Option<usize>,

        /// Request timeout for cleaning calls. Examples: 90, 90s, 2m
        #[arg(long, value_name = "DURATION", value_parser = parse_timeout)]
        timeout: Option<Duration>,
    },

    /// Print the resolved configuration file path
    ConfigPath,
}

/// Parse a timeout string into a duration.
///
/// Supports bare numbers (seconds) and any format accepted by `humantime`
/// (`30s`, `5m`, `1h30m`).
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    // Bare number → seconds
    if let Ok(secs) = s.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }
    humantime::parse_duration(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_process_command() {
        let cli = Cli::try_parse_from([
            "hearscribe",
            "process",
            "42",
            "https://www.youtube.com/watch?v=abc123",
        ])
        .unwrap();

        match cli.command {
            Commands::Process {
                hearing_id,
                url,
                model,
                ..
            } => {
                assert_eq!(hearing_id, 42);
                assert_eq!(url, "https://www.youtube.com/watch?v=abc123");
                assert_eq!(model, None);
            }
            other => panic!("expected Process, got {other:?}"),
        }
    }

    #[test]
    fn parses_overrides_and_global_flags() {
        let cli = Cli::try_parse_from([
            "hearscribe",
            "process",
            "7",
            "https://www.youtube.com/watch?v=x",
            "--model",
            "gpt-4o",
            "--output-dir",
            "/tmp/out",
            "--max-chunk-tokens",
            "2000",
            "--timeout",
            "2m",
            "--quiet",
        ])
        .unwrap();

        assert!(cli.quiet);
        match cli.command {
            Commands::Process {
                model,
                output_dir,
                max_chunk_tokens,
                timeout,
                ..
            } => {
                assert_eq!(model.as_deref(), Some("gpt-4o"));
                assert_eq!(output_dir, Some(PathBuf::from("/tmp/out")));
                assert_eq!(max_chunk_tokens, Some(2000));
                assert_eq!(timeout, Some(Duration::from_secs(120)));
            }
            other => panic!("expected Process, got {other:?}"),
        }
    }

    #[test]
    fn timeout_accepts_bare_seconds() {
        assert_eq!(parse_timeout("90"), Ok(Duration::from_secs(90)));
        assert_eq!(parse_timeout(" 90s "), Ok(Duration::from_secs(90)));
        assert!(parse_timeout("soon").is_err());
    }

    #[test]
    fn rejects_non_numeric_hearing_id() {
        assert!(Cli::try_parse_from(["hearscribe", "process", "abc", "u"]).is_err());
    }
}
