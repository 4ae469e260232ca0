use thiserror::Error;

use crate::datetime::DateFormat;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("date `{value}` does not match the {format} format")]
    Date { value: String, format: DateFormat },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
