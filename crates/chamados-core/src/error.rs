#[derive(Debug, thiserror::Error)]
pub enum ChamadosError {
    #[error("empty file: the spreadsheet contains no data rows")]
    InputEmpty,

    #[error("failed to read spreadsheet: {0}")]
    ParseFailure(String),

    #[error("unsupported file extension '{0}'. Expected .xlsx, .xls or .csv")]
    UnsupportedFormat(String),

    #[error("unknown column '{name}'. Run `chamados schema` to list the canonical columns")]
    UnknownColumn { name: String },

    #[error("nothing to export: no pending rows due today or earlier")]
    NothingToExport,

    #[error("failed to write spreadsheet: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
