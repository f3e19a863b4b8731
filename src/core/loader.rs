use crate::core::ArtifactStore;
use crate::utils::error::ResultsError;
use serde_json::{Map, Value};

pub const GEMINI_RESULTS: &str = "gemini/results.json";
pub const DIFF_RESULTS: &str = "cassandra-diff/job_results.json";

/// What happened when an artifact file was read.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactLoad {
    Found(Value),
    NotFound,
    Unreadable(String),
    ParseError(String),
}

impl ArtifactLoad {
    pub fn is_found(&self) -> bool {
        matches!(self, ArtifactLoad::Found(_))
    }

    /// Collapses every failure to an empty JSON object.
    pub fn into_value(self) -> Value {
        match self {
            ArtifactLoad::Found(value) => value,
            _ => Value::Object(Map::new()),
        }
    }
}

pub struct ArtifactLoader<S: ArtifactStore> {
    storage: S,
}

impl<S: ArtifactStore> ArtifactLoader<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads and parses one artifact. Never fails; problems are logged and
    /// reported through the returned variant.
    pub async fn load(&self, path: &str) -> ArtifactLoad {
        let location = self.storage.locate(path);

        let bytes = match self.storage.read_file(path).await {
            Ok(bytes) => bytes,
            Err(ResultsError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Could not read file {}", location);
                return ArtifactLoad::NotFound;
            }
            Err(e) => {
                tracing::warn!("Could not read file {}: {}", location, e);
                return ArtifactLoad::Unreadable(e.to_string());
            }
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => {
                tracing::debug!("Loaded {} ({} bytes)", location, bytes.len());
                ArtifactLoad::Found(value)
            }
            Err(e) => {
                tracing::warn!("Could not parse file {}: {}", location, e);
                ArtifactLoad::ParseError(e.to_string())
            }
        }
    }
}
