//! Predictor client error types

/// Errors returned by [`PredictorClient`](crate::PredictorClient) operations.
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    /// The host/port pair did not form a dialable endpoint URI.
    #[error("invalid endpoint address {addr}: {reason}")]
    InvalidAddress { addr: String, reason: String },

    /// The connection could not be established within the connect timeout.
    #[error("could not connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: tonic::transport::Error,
    },

    /// The remote returned a gRPC status for the named operation.
    ///
    /// `operation` labels which forwarding call failed ("schema fetch",
    /// "prediction", ...); it is the only diagnostic signal callers get, so
    /// every operation uses a distinct label.
    #[error("failed {operation}: {message} (code: {code})")]
    Rpc {
        operation: &'static str,
        code: tonic::Code,
        message: String,
    },
}

impl PredictorError {
    /// Wrap a [`tonic::Status`] with the label of the operation that failed.
    pub(crate) fn rpc(operation: &'static str, status: tonic::Status) -> Self {
        Self::Rpc {
            operation,
            code: status.code(),
            message: status.message().to_owned(),
        }
    }
}

/// Result type alias for predictor client operations
pub type Result<T> = std::result::Result<T, PredictorError>;
