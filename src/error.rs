use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("artwork catalog must contain at least one artwork")]
    Empty,
}

#[derive(Debug, Error)]
pub enum StringsError {
    #[error("failed to read string table {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse string table {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Strings(#[from] StringsError),
    #[error("failed to start UI: {0}")]
    Ui(String),
}
