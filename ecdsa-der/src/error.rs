use thiserror::Error;

use crate::types::KeyType;

/**
    Errors from converting a raw `R||S` signature to DER.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    // ── Input shape ───────────────────────────────────────────────────
    #[error("raw signature length {0} cannot be split into R and S")]
    InvalidInputLength(usize),

    #[error("{key_type} signature must be {expected} bytes, got {actual}")]
    SignatureLengthMismatch {
        key_type: KeyType,
        expected: usize,
        actual: usize,
    },

    // ── Key type ──────────────────────────────────────────────────────
    #[error(transparent)]
    UnsupportedKeyType(#[from] ParseError),
}

/**
    Error returned by `FromStr` implementations on enum types.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

/**
    Type alias for results that may return an [`EncodeError`].
*/
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;
