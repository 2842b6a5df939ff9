use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Startup load failures, one variant per phase so the logged diagnostic
/// names exactly where the load fell over. All are fatal: `main` propagates
/// them and the process exits before the listener is ever bound.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to open product file {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read product file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse product file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
