use crate::core::loader::{ArtifactLoader, DIFF_RESULTS, GEMINI_RESULTS};
use crate::core::summary::{build_summary, count_errors};
use crate::core::{ArtifactStore, SummaryReport, Verdict};

/// Builds one results summary per call. Holds no per-request state.
pub struct SummaryEngine<S: ArtifactStore> {
    loader: ArtifactLoader<S>,
}

impl<S: ArtifactStore> SummaryEngine<S> {
    pub fn new(storage: S) -> Self {
        Self {
            loader: ArtifactLoader::new(storage),
        }
    }

    pub fn storage(&self) -> &S {
        self.loader.storage()
    }

    pub async fn run(&self) -> SummaryReport {
        let gemini = self.loader.load(GEMINI_RESULTS).await.into_value();
        let diff = self.loader.load(DIFF_RESULTS).await.into_value();

        let body = build_summary(&gemini, &diff);

        match count_errors(&body) {
            Ok(error_count) => {
                let verdict = Verdict::from_error_count(error_count);
                tracing::debug!("Error count: {} ({:?})", error_count, verdict);
                SummaryReport {
                    body,
                    error_count: Some(error_count),
                    verdict,
                }
            }
            Err(e) => {
                // 無法計算錯誤數時一律視為失敗
                tracing::error!("Cannot count result errors: {}", e);
                SummaryReport {
                    body,
                    error_count: None,
                    verdict: Verdict::Failed,
                }
            }
        }
    }
}
