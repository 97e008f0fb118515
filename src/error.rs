//! Raw file errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RawsError {
    /// Reading or writing a raw file failed
    #[error("Raw file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The raw file is not a valid spell list
    #[error("Unable to parse raws: {0}")]
    Parse(#[from] serde_json::Error),
}
