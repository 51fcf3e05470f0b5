use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("failed to read spreadsheet: {0}")]
    Ingest(String),

    #[error(
        "required columns missing after header mapping: {}. Check the spreadsheet headers.",
        .missing.join(", ")
    )]
    MissingColumns { missing: Vec<String> },

    #[error("failed to read selection list from {path}: {reason}")]
    SelectionLoad { path: PathBuf, reason: String },

    #[error("heading must not be empty")]
    EmptyHeading,

    #[error("selection input contains no product links or names")]
    EmptySelection,

    #[error("no products matched the selection input")]
    NoMatches,

    #[error("PDF rendering failed: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
