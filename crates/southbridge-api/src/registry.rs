// Controller identity resolution seam.
//
// The proxy knows controllers only by an opaque id; something upstream owns
// the mapping to network address and credentials. That something implements
// this trait.

use secrecy::SecretString;
use thiserror::Error;

/// Address and credentials for one controller.
#[derive(Debug, Clone)]
pub struct ControllerAccess {
    /// `http` or `https`; branch controllers normally terminate TLS themselves.
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
}

impl ControllerAccess {
    /// Controller base URL, e.g. `https://10.0.0.1:8443`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

/// Resolution failures. Both are local configuration problems: the proxy
/// maps them to an empty response and never retries them.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No controller registered under the given id.
    #[error("unknown controller: {0}")]
    UnknownController(String),

    /// The registered base URL could not be parsed into host and port.
    #[error("malformed controller URL for {id}: {url}")]
    MalformedUrl { id: String, url: String },
}

/// Resolves a controller id to its [`ControllerAccess`].
///
/// Resolution is an in-memory lookup, so the trait is synchronous and stays
/// object-safe; the proxy holds an `Arc<dyn ControllerRegistry>`.
pub trait ControllerRegistry: Send + Sync {
    fn resolve(&self, controller_id: &str) -> Result<ControllerAccess, RegistryError>;
}
