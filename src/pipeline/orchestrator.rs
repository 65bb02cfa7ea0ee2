//! Fetch → chunk → clean → persist, strictly in sequence.
//!
//! One `process` call is one run: it owns its chunk sequence, issues one
//! cleaning request at a time, and aborts on the first fetch or cleaning
//! failure. A persistence failure does not discard the computed transcripts.

use crate::chunker;
use crate::cleaner::ChunkCleaner;
use crate::defaults;
use crate::error::{HearscribeError, Result};
use crate::pipeline::progress::ProgressSink;
use crate::store::{SavedTranscripts, TranscriptStore};
use crate::transcript::TranscriptSource;

/// Result of one pipeline run.
#[derive(Debug)]
pub struct RunOutcome {
    /// Raw transcript as fetched, untouched.
    pub raw: String,
    /// Cleaned chunks joined with single spaces, in chunk order.
    pub cleaned: String,
    /// Artifact paths when persistence succeeded.
    pub saved: Option<SavedTranscripts>,
    /// Set when the transcripts were computed but could not be saved;
    /// `raw` and `cleaned` are still valid in that case.
    pub persistence_error: Option<HearscribeError>,
}

/// Drives one transcript through fetch, chunking, sequential cleaning, and
/// persistence.
pub struct Pipeline<'a> {
    source: &'a dyn TranscriptSource,
    cleaner: &'a dyn ChunkCleaner,
    store: &'a dyn TranscriptStore,
    max_chunk_tokens: usize,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        source: &'a dyn TranscriptSource,
        cleaner: &'a dyn ChunkCleaner,
        store: &'a dyn TranscriptStore,
    ) -> Self {
        Self {
            source,
            cleaner,
            store,
            max_chunk_tokens: defaults::MAX_CHUNK_TOKENS,
        }
    }

    /// Override the estimated-token budget per cleaning request.
    pub fn with_max_chunk_tokens(mut self, max_chunk_tokens: usize) -> Self {
        self.max_chunk_tokens = max_chunk_tokens;
        self
    }

    /// Process a single video: fetch its transcript, clean it chunk by chunk,
    /// and save both versions under `hearing_id`.
    ///
    /// Progress is reported as `i / N` after each completed chunk. The first
    /// fetch or cleaning failure aborts the run with nothing persisted;
    /// chunks after a failed one are never submitted. A persistence failure
    /// is returned inside the outcome instead of an `Err` so the computed
    /// transcripts stay available to the caller.
    pub async fn process(
        &self,
        hearing_id: u64,
        url: &str,
        progress: &mut dyn ProgressSink,
    ) -> Result<RunOutcome> {
        let raw = self.source.fetch_transcript(url).await?;

        let chunks = chunker::chunk_text(&raw, self.max_chunk_tokens);
        let total = chunks.len();

        let mut cleaned_chunks = Vec::with_capacity(total);
        for (index, chunk) in chunks.iter().enumerate() {
            let cleaned_chunk = self.cleaner.clean(chunk).await?;
            cleaned_chunks.push(cleaned_chunk);
            progress.report((index + 1) as f64 / total as f64);
        }

        let cleaned = cleaned_chunks.join(" ");

        match self.store.save(hearing_id, &raw, &cleaned) {
            Ok(saved) => Ok(RunOutcome {
                raw,
                cleaned,
                saved: Some(saved),
                persistence_error: None,
            }),
            Err(error) => Ok(RunOutcome {
                raw,
                cleaned,
                saved: None,
                persistence_error: Some(error),
            }),
        }
    }
}
