//! YouTube caption retrieval via the timedtext endpoint.
//!
//! Resolves a watch URL to its video id, fetches the caption track in `json3`
//! format, and joins the segment texts in order.

use async_trait::async_trait;

use crate::defaults;
use crate::error::{HearscribeError, Result};
use crate::transcript::TranscriptSource;

/// Extract the video id from a watch URL.
///
/// Takes the substring following `v=` up to the next `&`, or the whole
/// remainder when no `&` is present.
pub fn extract_video_id(url: &str) -> Result<&str> {
    let (_, after) = url
        .split_once("v=")
        .ok_or_else(|| HearscribeError::TranscriptFetch {
            message: format!("no video id (v=) in URL: {url}"),
        })?;

    let id = match after.find('&') {
        Some(pos) => &after[..pos],
        None => after,
    };

    if id.is_empty() {
        return Err(HearscribeError::TranscriptFetch {
            message: format!("empty video id in URL: {url}"),
        });
    }

    Ok(id)
}

/// Join the caption segments of a `json3` timedtext body in order.
///
/// Events without text segments (styling/window events) are skipped; segment
/// text within an event is concatenated, then events are joined with single
/// spaces with internal whitespace normalized.
fn join_segments(body: &str) -> Result<String> {
    let document: serde_json::Value =
        serde_json::from_str(body).map_err(|e| HearscribeError::TranscriptFetch {
            message: format!("failed to parse timedtext response: {e}"),
        })?;

    let events = document
        .get("events")
        .and_then(|v| v.as_array())
        .ok_or_else(|| HearscribeError::TranscriptFetch {
            message: "timedtext response has no events".to_string(),
        })?;

    let mut parts: Vec<String> = Vec::new();
    for event in events {
        let Some(segments) = event.get("segs").and_then(|v| v.as_array()) else {
            continue;
        };

        let text: String = segments
            .iter()
            .filter_map(|segment| segment.get("utf8").and_then(|v| v.as_str()))
            .collect();

        // Captions carry hard line breaks; normalize to single spaces.
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !normalized.is_empty() {
            parts.push(normalized);
        }
    }

    if parts.is_empty() {
        return Err(HearscribeError::TranscriptFetch {
            message: "caption track contained no text".to_string(),
        });
    }

    Ok(parts.join(" "))
}

/// Transcript source backed by YouTube's timedtext endpoint.
pub struct YouTubeSource {
    client: reqwest::Client,
    endpoint: String,
    language: String,
}

impl YouTubeSource {
    /// Create a source requesting captions in `language`.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: defaults::TIMEDTEXT_URL.to_string(),
            language: language.into(),
        }
    }
}

#[async_trait]
impl TranscriptSource for YouTubeSource {
    async fn fetch_transcript(&self, url: &str) -> Result<String> {
        let video_id = extract_video_id(url)?;

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("v", video_id),
                ("lang", self.language.as_str()),
                ("fmt", "json3"),
            ])
            .send()
            .await
            .map_err(|e| HearscribeError::TranscriptFetch {
                message: format!("request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HearscribeError::TranscriptFetch {
                message: format!("timedtext returned status {status} for video {video_id}"),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| HearscribeError::TranscriptFetch {
                message: format!("failed to read timedtext response: {e}"),
            })?;

        // YouTube answers 200 with an empty body when the video has no
        // caption track in the requested language.
        if body.trim().is_empty() {
            return Err(HearscribeError::TranscriptFetch {
                message: format!(
                    "no '{}' transcript available for video {video_id}",
                    self.language
                ),
            });
        }

        join_segments(&body)
    }
}
