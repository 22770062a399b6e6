//! Error types for the cvra-debug-proto crate.

use thiserror::Error;

/// Errors that can occur while turning wire messages into domain types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtoError {
    /// A list response arrived with no root trees at all.
    #[error("parameter list response contained no trees")]
    EmptyForest,

    /// A set request cannot be built from an unsupported value kind.
    #[error("cannot build a set request for parameter '{0}' without a supported value")]
    UnsupportedValue(String),
}
