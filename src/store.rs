//! Durable storage of raw and cleaned transcripts.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HearscribeError, Result};

/// Paths of the artifacts written for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedTranscripts {
    pub raw_path: PathBuf,
    pub cleaned_path: PathBuf,
}

/// Trait for persisting one run's transcripts, keyed by hearing id.
///
/// Runs with distinct ids must not collide; two concurrent runs sharing an id
/// are a caller error.
pub trait TranscriptStore: Send + Sync {
    /// Write the raw and cleaned artifacts, overwriting any previous run
    /// with the same id.
    fn save(&self, hearing_id: u64, raw: &str, cleaned: &str) -> Result<SavedTranscripts>;
}

/// Store that writes plain-text files under an output directory.
pub struct FileStore {
    output_dir: PathBuf,
}

impl FileStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path of the raw artifact for `hearing_id`.
    pub fn raw_path(&self, hearing_id: u64) -> PathBuf {
        self.output_dir.join(format!("hearing_{hearing_id}_raw.txt"))
    }

    /// Path of the cleaned artifact for `hearing_id`.
    pub fn cleaned_path(&self, hearing_id: u64) -> PathBuf {
        self.output_dir
            .join(format!("hearing_{hearing_id}_cleaned.txt"))
    }

    fn write(path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).map_err(|e| HearscribeError::Persistence {
            message: format!("failed to write {}: {e}", path.display()),
        })
    }
}

impl TranscriptStore for FileStore {
    fn save(&self, hearing_id: u64, raw: &str, cleaned: &str) -> Result<SavedTranscripts> {
        fs::create_dir_all(&self.output_dir).map_err(|e| HearscribeError::Persistence {
            message: format!("failed to create {}: {e}", self.output_dir.display()),
        })?;

        let raw_path = self.raw_path(hearing_id);
        Self::write(&raw_path, raw)?;

        let cleaned_path = self.cleaned_path(hearing_id);
        Self::write(&cleaned_path, cleaned)?;

        Ok(SavedTranscripts {
            raw_path,
            cleaned_path,
        })
    }
}
