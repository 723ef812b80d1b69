// ── Controller sessions and the process-wide session store ──
//
// One authenticated relationship per controller identity (host, port).
// The token cell is swapped in place on relogin so every holder of the
// session handle observes the latest token without re-fetching.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use arc_swap::ArcSwapOption;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use secrecy::SecretString;
use tokio::sync::Mutex;

use crate::registry::ControllerAccess;

/// One authenticated relationship with a controller.
///
/// Owned exclusively by the [`SessionStore`]; exactly one instance exists
/// per (host, port). The token starts empty — the proxy issues the first
/// request unauthenticated and logs in reactively when the controller
/// signals an invalid session. Staleness is never decided by a timer.
pub struct ControllerSession {
    scheme: String,
    host: String,
    port: u16,
    username: String,
    password: SecretString,
    /// Opaque session cookie from the controller's SSO endpoint.
    /// Written only by the login handshake; concurrent relogins race
    /// benignly — last writer wins.
    token: ArcSwapOption<String>,
    created_at: DateTime<Utc>,
    last_used_ms: AtomicI64,
    /// Serializes the login handshake per controller so two expired callers
    /// don't interleave handshakes against the same SSO endpoint.
    login_guard: Mutex<()>,
}

impl ControllerSession {
    fn new(access: &ControllerAccess) -> Self {
        let now = Utc::now();
        Self {
            scheme: access.scheme.clone(),
            host: access.host.clone(),
            port: access.port,
            username: access.username.clone(),
            password: access.password.clone(),
            token: ArcSwapOption::empty(),
            created_at: now,
            last_used_ms: AtomicI64::new(now.timestamp_millis()),
            login_guard: Mutex::new(()),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Controller base URL, e.g. `https://10.0.0.1:8443`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    /// The current session token, if a login has succeeded yet.
    pub fn token(&self) -> Option<Arc<String>> {
        self.token.load_full()
    }

    /// Replace the session token. The previous token is discarded.
    pub fn set_token(&self, token: String) {
        self.token.store(Some(Arc::new(token)));
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_used(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.last_used_ms.load(Ordering::Relaxed))
    }

    /// Record a use of this session.
    pub fn touch(&self) {
        self.last_used_ms
            .store(Utc::now().timestamp_millis(), Ordering::Relaxed);
    }

    pub(crate) fn login_guard(&self) -> &Mutex<()> {
        &self.login_guard
    }
}

impl std::fmt::Debug for ControllerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerSession")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("authenticated", &self.token.load().is_some())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SessionKey {
    host: String,
    port: u16,
}

/// Process-wide cache of [`ControllerSession`]s keyed by (host, port).
///
/// Constructed once and passed by reference to callers — there is no global
/// instance. `DashMap::entry` gives per-key creation atomicity, so two
/// callers racing on first access to the same controller still end up
/// sharing one session, without a store-wide lock.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<SessionKey, Arc<ControllerSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the live session for the controller identity in `access`,
    /// creating it on first access.
    ///
    /// The first resolution wins: credentials passed on later calls for the
    /// same (host, port) are ignored in favor of the ones the session was
    /// created with.
    pub fn get_or_create(&self, access: &ControllerAccess) -> Arc<ControllerSession> {
        let key = SessionKey {
            host: access.host.clone(),
            port: access.port,
        };
        self.sessions
            .entry(key)
            .or_insert_with(|| Arc::new(ControllerSession::new(access)))
            .clone()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
