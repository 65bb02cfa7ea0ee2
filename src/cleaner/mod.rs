//! Transcript cleanup via a remote chat completion service.

pub mod client;
pub mod prompt;

pub use client::{ChatCleaner, CleanerConfig};

use async_trait::async_trait;

use crate::error::Result;

/// Trait for cleaning one transcript chunk at a time.
///
/// Implementations receive raw transcript text and return its cleaned form.
/// One call maps to one remote round trip; the pipeline drives chunks
/// strictly in sequence and never retries a failed call.
#[async_trait]
pub trait ChunkCleaner: Send + Sync {
    /// Clean a single transcript chunk.
    async fn clean(&self, chunk: &str) -> Result<String>;

    /// Return the name of this cleaner for logging.
    fn name(&self) -> &str;
}
