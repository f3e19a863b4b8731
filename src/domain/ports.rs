use crate::utils::error::Result;

/// Read access to the directory tree the upstream test tools write into.
pub trait ArtifactStore: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;

    /// Human-readable location of `path`, used in diagnostics only.
    fn locate(&self, path: &str) -> String;
}
