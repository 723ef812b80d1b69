//! Service-owned configuration: listen address, transport knobs, and the
//! controller registry entries. Loaded from TOML with environment
//! overrides; the domain crates only ever see the built registry and
//! transport config, never these types.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use southbridge_api::transport::{TlsMode, TransportConfig};
use southbridge_core::{ControllerEntry, StaticRegistry};

#[derive(Debug, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Address the facade listens on.
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    /// Outbound call timeout, login handshakes included.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Verify controller TLS certificates. Branch controllers ship
    /// self-signed certs, so verification is opt-in.
    #[serde(default)]
    pub verify_tls: bool,

    /// Controller id → address and credentials.
    #[serde(default)]
    pub controllers: HashMap<String, ControllerProfile>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ControllerProfile {
    /// Controller base URL, e.g. `https://10.20.30.40:8443`.
    pub url: String,
    pub username: String,
    pub password: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            timeout_secs: default_timeout(),
            verify_tls: false,
            controllers: HashMap::new(),
        }
    }
}

fn default_listen() -> SocketAddr {
    ([0, 0, 0, 0], 8290).into()
}

fn default_timeout() -> u64 {
    30
}

/// Load the config file with `SOUTHBRIDGE_*` environment overrides
/// (e.g. `SOUTHBRIDGE_LISTEN`, `SOUTHBRIDGE_TIMEOUT_SECS`).
pub fn load(path: &Path) -> Result<ServiceConfig, figment::Error> {
    Figment::from(Serialized::defaults(ServiceConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SOUTHBRIDGE_"))
        .extract()
}

impl ServiceConfig {
    /// Build the controller registry from the configured entries.
    pub fn registry(&self) -> StaticRegistry {
        let entries = self
            .controllers
            .iter()
            .map(|(id, profile)| {
                (
                    id.clone(),
                    ControllerEntry {
                        url: profile.url.clone(),
                        username: profile.username.clone(),
                        password: SecretString::from(profile.password.clone()),
                    },
                )
            })
            .collect();
        StaticRegistry::new(entries)
    }

    /// Build the southbound transport config.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: if self.verify_tls {
                TlsMode::System
            } else {
                TlsMode::DangerAcceptInvalid
            },
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_controllers_from_toml() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            r#"
listen = "127.0.0.1:9000"
timeout_secs = 5

[controllers.6e29f6ae-372e-4d4c-89c1-1a4b3d9f2a01]
url = "https://10.20.30.40:8443"
username = "admin"
password = "pw"
"#
        )
        .unwrap();

        let config = load(file.path()).unwrap();

        assert_eq!(config.listen, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.controllers.len(), 1);
        assert_eq!(config.registry().len(), 1);
        assert_eq!(config.transport().timeout, Duration::from_secs(5));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load(Path::new("/nonexistent/southbridge.toml")).unwrap();
        assert_eq!(config.listen, default_listen());
        assert!(config.controllers.is_empty());
        assert!(!config.verify_tls);
    }
}
