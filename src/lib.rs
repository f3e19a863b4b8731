pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{http::serve, storage::LocalStorage};
pub use crate::config::ServerConfig;
pub use crate::core::{engine::SummaryEngine, SummaryReport, SummaryResponse, Verdict};
pub use crate::utils::error::{ResultsError, Result};
