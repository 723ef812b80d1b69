use thiserror::Error;

use southbridge_api::RegistryError;

/// Top-level error type for the domain layer.
///
/// The facade maps these into orchestrator-level `ResultRsp` codes; only
/// the proxy below this layer is error-free by contract.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation before any southbound call was made.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The controller could not be resolved or reached at all
    /// (the proxy returned its empty/default response).
    #[error("controller unreachable or not registered")]
    ControllerUnreachable,

    /// The controller answered with a non-2xx status.
    #[error("controller call failed with HTTP {status}")]
    Http { status: u16 },

    /// The controller's envelope carried a non-zero errcode.
    #[error("controller operation failed (errcode {errcode}): {errmsg}")]
    ControllerOp { errcode: String, errmsg: String },

    /// The controller's body did not decode, kept raw for debugging.
    #[error("deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// Controller registry lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A request payload failed to serialize.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
