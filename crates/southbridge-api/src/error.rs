use thiserror::Error;

/// Failures at the crate's fallible edges.
///
/// Deliberately small: the proxy itself encodes expected failures (bad
/// controller id, login rejection, transport trouble) in the
/// [`ControllerResponse`](crate::ControllerResponse) status instead of
/// returning errors, so callers branch on one status field. Only setup-time
/// problems surface here.
#[derive(Debug, Error)]
pub enum ApiError {
    /// TLS setup or HTTP client construction failed.
    #[error("TLS error: {0}")]
    Tls(String),
}
