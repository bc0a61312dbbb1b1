use thiserror::Error;

/// Why an imported record could not be turned into a typed entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid date in `{field}`: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("invalid number in `{field}`: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
