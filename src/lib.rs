//! hearscribe - fetch, clean, and archive YouTube hearing transcripts
//!
//! Resolves a watch URL to its caption track, splits the transcript into
//! token-budgeted chunks, cleans each chunk through an OpenAI-compatible chat
//! completion service one request at a time, and persists both the raw and
//! cleaned transcripts keyed by hearing id.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod chunker;
pub mod cleaner;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod pipeline;
pub mod store;
pub mod transcript;

// Core traits (fetch → chunk → clean → store)
pub use cleaner::{ChatCleaner, ChunkCleaner, CleanerConfig};
pub use store::{FileStore, SavedTranscripts, TranscriptStore};
pub use transcript::{TranscriptSource, YouTubeSource};

// Pipeline
pub use pipeline::orchestrator::{Pipeline, RunOutcome};
pub use pipeline::progress::{BarProgress, NullProgress, ProgressSink};

// Error handling
pub use error::{HearscribeError, Result};

// Config
pub use config::Config;
