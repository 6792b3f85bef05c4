use thiserror::Error;

pub type WlResult<T> = Result<T, WlError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WlError {
    #[error("Invalid color: {text:?}")]
    InvalidColor { text: String },

    #[error("Unknown {what}: {text:?}")]
    UnknownVariant { what: &'static str, text: String },
}
