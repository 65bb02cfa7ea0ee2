//! Default configuration constants for hearscribe.
//!
//! Shared constants used across configuration and pipeline types to keep the
//! built-in defaults in one place.

/// Default base URL of the OpenAI-compatible cleaning service.
pub const BASE_URL: &str = "https://api.openai.com/v1";

/// Default model used for transcript cleanup.
///
/// A small, cheap chat model is enough for junk removal and capitalization
/// fixes; override per run with `--model` for higher-quality rewrites.
pub const MODEL: &str = "gpt-4o-mini";

/// Default estimated-token budget per chunk.
///
/// Each chunk is sent as a single cleaning request, so this bounds the size of
/// one request well below typical context limits, leaving room for the system
/// prompt and the cleaned response.
pub const MAX_CHUNK_TOKENS: usize = 10_000;

/// Estimated tokens per character of a word.
///
/// Heuristic proxy for sub-word tokenization cost. Not an exact token count;
/// only monotonic in word length.
pub const TOKENS_PER_CHAR: f32 = 1.3;

/// Default request timeout for cleaning calls, in seconds.
///
/// Cleaning a 10k-token chunk can take a while on slower models; timeouts
/// surface as cleaning failures and abort the run.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Default caption language requested from YouTube.
pub const LANGUAGE: &str = "en";

/// YouTube timedtext endpoint serving caption tracks.
pub const TIMEDTEXT_URL: &str = "https://www.youtube.com/api/timedtext";

/// Default directory where transcript artifacts are written.
pub const OUTPUT_DIR: &str = "transcripts";
