use thiserror::Error;

pub type TimetableResult<T> = Result<T, TimetableError>;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error(
        "Duplicate sheet name '{sheet}': classes '{first}' and '{second}' map to the same worksheet"
    )]
    DuplicateSheetName {
        sheet: String,
        first: String,
        second: String,
    },

    #[error("Export error: {0}")]
    Export(String),
}

impl From<rust_xlsxwriter::XlsxError> for TimetableError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        match err {
            rust_xlsxwriter::XlsxError::IoError(e) => TimetableError::Io(e),
            other => TimetableError::Export(other.to_string()),
        }
    }
}
