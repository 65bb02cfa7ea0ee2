//! Sequential transcript processing pipeline.

pub mod orchestrator;
pub mod progress;

pub use orchestrator::{Pipeline, RunOutcome};
pub use progress::{BarProgress, NullProgress, ProgressSink};
