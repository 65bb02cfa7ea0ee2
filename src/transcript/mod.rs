//! Transcript retrieval from remote video platforms.

pub mod youtube;

pub use youtube::YouTubeSource;

use async_trait::async_trait;

use crate::error::Result;

/// Trait for resolving a video URL to its raw transcript text.
///
/// The returned string is the space-joined text of the video's transcript
/// segments, in segment order.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the raw transcript for the video behind `url`.
    async fn fetch_transcript(&self, url: &str) -> Result<String>;
}
