// Controller response envelope.
//
// Every data-bearing answer from the controller family is wrapped in
// `{ "errcode": "...", "errmsg": "...", "data": ... }` with errcode "0"
// meaning success. This module turns a raw proxy response into typed data
// or a `CoreError`, preserving the raw body when decoding fails.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use southbridge_api::ControllerResponse;

use crate::error::CoreError;

/// The controller's success errcode.
pub const ERRCODE_OK: &str = "0";

/// The vendor `{errcode, errmsg, data}` envelope.
#[derive(Debug, Deserialize)]
pub struct DriverEnvelope<T> {
    #[serde(default)]
    pub errcode: String,
    #[serde(default)]
    pub errmsg: Option<String>,
    pub data: Option<T>,
}

/// Unwrap a data-bearing controller response.
///
/// Fails when the controller was unreachable (the proxy's empty response),
/// answered non-2xx, returned a non-zero errcode, or the envelope carried
/// no `data` where the caller expected some.
pub fn check_response<T: DeserializeOwned>(resp: &ControllerResponse) -> Result<T, CoreError> {
    let envelope = check_envelope(resp)?;
    envelope.data.ok_or_else(|| CoreError::Deserialization {
        message: "envelope carried no data".into(),
        body: resp.body.clone(),
    })
}

/// Check a controller response for success, ignoring any `data`.
///
/// For operations (delete, config push) where only the errcode matters.
pub fn check_ack(resp: &ControllerResponse) -> Result<(), CoreError> {
    check_envelope::<serde_json::Value>(resp).map(|_| ())
}

fn check_envelope<T: DeserializeOwned>(
    resp: &ControllerResponse,
) -> Result<DriverEnvelope<T>, CoreError> {
    if *resp == ControllerResponse::empty() {
        return Err(CoreError::ControllerUnreachable);
    }
    if !resp.is_success() {
        return Err(CoreError::Http {
            status: resp.status,
        });
    }

    let envelope: DriverEnvelope<T> =
        serde_json::from_str(&resp.body).map_err(|e| CoreError::Deserialization {
            message: e.to_string(),
            body: resp.body.clone(),
        })?;

    if envelope.errcode != ERRCODE_OK {
        return Err(CoreError::ControllerOp {
            errmsg: envelope
                .errmsg
                .unwrap_or_else(|| "controller reported failure".into()),
            errcode: envelope.errcode,
        });
    }

    Ok(envelope)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::DevicePort;

    fn resp(status: u16, body: &str) -> ControllerResponse {
        ControllerResponse {
            status,
            body: body.into(),
        }
    }

    #[test]
    fn unwraps_data_on_success() {
        let body = r#"{"errcode":"0","data":[{"name":"GigabitEthernet0/0/1","ipAddr":"192.0.2.10"}]}"#;
        let ports: Vec<DevicePort> = check_response(&resp(200, body)).unwrap();
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].name, "GigabitEthernet0/0/1");
        assert_eq!(ports[0].ip_addr.as_deref(), Some("192.0.2.10"));
    }

    #[test]
    fn nonzero_errcode_carries_code_and_message() {
        let body = r#"{"errcode":"33002","errmsg":"device not managed"}"#;
        let err = check_ack(&resp(200, body)).unwrap_err();
        match err {
            CoreError::ControllerOp { errcode, errmsg } => {
                assert_eq!(errcode, "33002");
                assert_eq!(errmsg, "device not managed");
            }
            other => panic!("expected ControllerOp, got: {other:?}"),
        }
    }

    #[test]
    fn empty_response_means_unreachable() {
        let err = check_ack(&ControllerResponse::empty()).unwrap_err();
        assert!(matches!(err, CoreError::ControllerUnreachable));
    }

    #[test]
    fn http_failure_is_surfaced_as_status() {
        let err = check_ack(&resp(500, "")).unwrap_err();
        assert!(matches!(err, CoreError::Http { status: 500 }));
    }

    #[test]
    fn garbage_body_keeps_raw_text() {
        let err = check_ack(&resp(200, "<html>not json</html>")).unwrap_err();
        match err {
            CoreError::Deserialization { body, .. } => {
                assert_eq!(body, "<html>not json</html>");
            }
            other => panic!("expected Deserialization, got: {other:?}"),
        }
    }

    #[test]
    fn missing_data_is_an_error_for_data_calls_only() {
        let body = r#"{"errcode":"0"}"#;
        assert!(check_ack(&resp(200, body)).is_ok());
        let err = check_response::<Vec<DevicePort>>(&resp(200, body)).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization { .. }));
    }
}
