use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid time values"))]
    InvalidTimeValuesError {},

    #[snafu(display("Invalid value for {field}"))]
    InvalidFormValueError { field: String },

    #[snafu(display("Failed writing history file {}: {}", path.display(), source))]
    HistoryWriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed serializing history: {source}"))]
    HistorySerializeError { source: serde_json::Error },
}

impl Error {
    /// errors caused by what the user typed, safe to show on the page
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidTimeValuesError {} | Error::InvalidFormValueError { .. }
        )
    }
}

pub type CustomResult<T> = Result<T, Error>;
