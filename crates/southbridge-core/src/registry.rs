// Config-backed controller registry.
//
// Replaces the original deployment's inventory-service lookup with a
// static map loaded from the service's config file: controller id →
// base URL + credentials. URL parsing happens at resolve time so a bad
// entry only poisons calls to that controller.

use std::collections::HashMap;

use secrecy::SecretString;
use url::Url;

use southbridge_api::{ControllerAccess, ControllerRegistry, RegistryError};

/// One configured controller.
#[derive(Debug, Clone)]
pub struct ControllerEntry {
    /// Base URL, e.g. `https://10.20.30.40:8443`.
    pub url: String,
    pub username: String,
    pub password: SecretString,
}

/// In-memory [`ControllerRegistry`] built from configuration.
#[derive(Debug, Default)]
pub struct StaticRegistry {
    controllers: HashMap<String, ControllerEntry>,
}

impl StaticRegistry {
    pub fn new(controllers: HashMap<String, ControllerEntry>) -> Self {
        Self { controllers }
    }

    /// Register (or replace) a controller entry.
    pub fn insert(&mut self, id: impl Into<String>, entry: ControllerEntry) {
        self.controllers.insert(id.into(), entry);
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

impl ControllerRegistry for StaticRegistry {
    fn resolve(&self, controller_id: &str) -> Result<ControllerAccess, RegistryError> {
        let entry = self
            .controllers
            .get(controller_id)
            .ok_or_else(|| RegistryError::UnknownController(controller_id.to_owned()))?;

        let malformed = || RegistryError::MalformedUrl {
            id: controller_id.to_owned(),
            url: entry.url.clone(),
        };

        let url = Url::parse(&entry.url).map_err(|_| malformed())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(malformed());
        }
        let host = url.host_str().ok_or_else(malformed)?.to_owned();
        let port = url.port_or_known_default().ok_or_else(malformed)?;

        Ok(ControllerAccess {
            scheme: url.scheme().to_owned(),
            host,
            port,
            username: entry.username.clone(),
            password: entry.password.clone(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn registry_with(url: &str) -> StaticRegistry {
        let mut registry = StaticRegistry::default();
        registry.insert(
            "ac-branch-1",
            ControllerEntry {
                url: url.into(),
                username: "admin".into(),
                password: SecretString::from("pw".to_owned()),
            },
        );
        registry
    }

    #[test]
    fn resolves_host_port_and_credentials() {
        let registry = registry_with("https://10.20.30.40:8443");
        let access = registry.resolve("ac-branch-1").unwrap();
        assert_eq!(access.scheme, "https");
        assert_eq!(access.host, "10.20.30.40");
        assert_eq!(access.port, 8443);
        assert_eq!(access.username, "admin");
    }

    #[test]
    fn default_port_comes_from_the_scheme() {
        let registry = registry_with("https://controller.branch.example");
        let access = registry.resolve("ac-branch-1").unwrap();
        assert_eq!(access.port, 443);
    }

    #[test]
    fn unknown_controller_is_its_own_error() {
        let registry = registry_with("https://10.20.30.40:8443");
        let err = registry.resolve("nope").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownController(_)));
    }

    #[test]
    fn malformed_url_is_rejected_at_resolve_time() {
        for bad in ["not a url", "ftp://10.0.0.1", "https://"] {
            let registry = registry_with(bad);
            let err = registry.resolve("ac-branch-1").unwrap_err();
            assert!(
                matches!(err, RegistryError::MalformedUrl { .. }),
                "expected MalformedUrl for {bad:?}, got: {err:?}"
            );
        }
    }
}
