// SSO login handshake.
//
// Credentials go in as JSON, the opaque session cookie comes back in
// Set-Cookie. The controller invalidates sessions server-side at will, so
// the handshake runs reactively whenever the proxy sees an invalid-session
// marker — never on a schedule.

use reqwest::header;
use secrecy::ExposeSecret;
use serde_json::json;
use tracing::{debug, warn};

use crate::session::ControllerSession;

/// Fixed SSO login path on every controller of this family.
pub const SSO_LOGIN_PATH: &str = "/sso/login";

/// Perform the login handshake for `session` against `login_path`.
///
/// On success the session's token is replaced in place and `true` is
/// returned. On any failure — transport error, non-2xx status, missing
/// session cookie — the previous token (if any) is left untouched and
/// `false` is returned; surfacing that as a call failure is the caller's
/// job.
pub async fn login(
    http: &reqwest::Client,
    session: &ControllerSession,
    login_path: &str,
) -> bool {
    let url = format!("{}{}", session.base_url(), login_path);
    debug!(%url, username = session.username(), "logging in to controller");

    let body = json!({
        "userName": session.username(),
        "password": session.password().expose_secret(),
    });

    let resp = match http.post(&url).json(&body).send().await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(%url, error = %e, "login request failed");
            return false;
        }
    };

    let status = resp.status();
    if !status.is_success() {
        warn!(%url, %status, "controller rejected login");
        return false;
    }

    // The cookie pair is the whole token; its contents are opaque to us.
    let token = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|raw| raw.split(';').next())
        .map(str::to_owned);

    match token {
        Some(token) => {
            session.set_token(token);
            debug!(host = session.host(), "login successful");
            true
        }
        None => {
            warn!(%url, "login response carried no session cookie");
            false
        }
    }
}
