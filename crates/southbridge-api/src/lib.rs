//! Session-aware southbound client for branch-office network controllers.
//!
//! The controller family served here authenticates through an SSO login
//! endpoint and hands back an opaque session cookie. Sessions are not
//! expired by any timer; the controller signals a dead session by embedding
//! redirect/logout markers in a response body. This crate owns that whole
//! mechanism:
//!
//! - **[`DriverProxy`]** — issues GET/POST/PUT/DELETE calls against a
//!   controller, detects the session-invalid markers, re-authenticates once,
//!   and replays the original request exactly once. Expected failures are
//!   encoded in the returned [`ControllerResponse`] status, never as errors.
//! - **[`SessionStore`]** — process-wide cache holding exactly one live
//!   [`ControllerSession`] per (host, port), shared by all callers.
//! - **[`sso::login`]** — the login handshake; updates the session token in
//!   place on success.
//! - **[`ControllerRegistry`]** — the seam through which controller ids are
//!   resolved to host/port/credentials. Implementations live upstream.

pub mod error;
pub mod proxy;
pub mod registry;
pub mod session;
pub mod sso;
pub mod transport;

pub use error::ApiError;
pub use proxy::{ControllerResponse, DriverProxy, STATUS_FAILED};
pub use registry::{ControllerAccess, ControllerRegistry, RegistryError};
pub use session::{ControllerSession, SessionStore};
