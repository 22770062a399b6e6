//! Shell error types.
//!
//! Two classes matter to the operator: local usage errors caught before any
//! network interaction, and transport errors from the channel, always
//! rendered as `"<code>: <details>"`. Neither ever terminates the loop.

use thiserror::Error;

use cvra_debug_proto::ProtoError;

/// Shell-specific errors.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The channel could not complete a request.
    #[error("{code}: {message}")]
    Transport {
        /// gRPC status code name, `SCREAMING_SNAKE` form.
        code: &'static str,
        /// Human-readable detail string from the service.
        message: String,
    },

    /// Malformed command arguments, caught before any network call.
    #[error("{0}")]
    Usage(String),

    /// The channel completed but the response shape was unusable.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Invalid configuration (server address, history path).
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error while writing operator output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Line editor failure at startup or shutdown.
    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl From<tonic::Status> for ShellError {
    fn from(status: tonic::Status) -> Self {
        Self::Transport {
            code: code_name(status.code()),
            message: status.message().to_owned(),
        }
    }
}

impl From<ProtoError> for ShellError {
    fn from(err: ProtoError) -> Self {
        match err {
            ProtoError::EmptyForest => Self::Protocol(err.to_string()),
            ProtoError::UnsupportedValue(_) => Self::Usage(err.to_string()),
        }
    }
}

/// Wire-form name of a gRPC status code.
#[must_use]
pub fn code_name(code: tonic::Code) -> &'static str {
    match code {
        tonic::Code::Ok => "OK",
        tonic::Code::Cancelled => "CANCELLED",
        tonic::Code::Unknown => "UNKNOWN",
        tonic::Code::InvalidArgument => "INVALID_ARGUMENT",
        tonic::Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
        tonic::Code::NotFound => "NOT_FOUND",
        tonic::Code::AlreadyExists => "ALREADY_EXISTS",
        tonic::Code::PermissionDenied => "PERMISSION_DENIED",
        tonic::Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
        tonic::Code::FailedPrecondition => "FAILED_PRECONDITION",
        tonic::Code::Aborted => "ABORTED",
        tonic::Code::OutOfRange => "OUT_OF_RANGE",
        tonic::Code::Unimplemented => "UNIMPLEMENTED",
        tonic::Code::Internal => "INTERNAL",
        tonic::Code::Unavailable => "UNAVAILABLE",
        tonic::Code::DataLoss => "DATA_LOSS",
        tonic::Code::Unauthenticated => "UNAUTHENTICATED",
    }
}
