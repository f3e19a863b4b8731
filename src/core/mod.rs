pub mod engine;
pub mod loader;
pub mod summary;

pub use crate::domain::model::{DiffSummary, GeminiSummary, SummaryReport, SummaryResponse, Verdict};
pub use crate::domain::ports::ArtifactStore;
pub use crate::utils::error::Result;
