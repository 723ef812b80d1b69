// Orchestrator-facing result envelope.

use serde::{Deserialize, Serialize};

/// Error code reported to the orchestrator on success.
pub const ERR_SUCCESS: &str = "overlayvpn.operation.success";
/// Error code reported to the orchestrator on any driver-level failure.
pub const ERR_FAILED: &str = "overlayvpn.operation.failed";

/// The envelope every orchestrator-facing endpoint returns.
///
/// Driver failures travel inside this envelope (failed code plus
/// description), not as HTTP transport errors — the orchestrator branches
/// on `error_code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRsp<T> {
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResultRsp<T> {
    /// Success with payload.
    pub fn ok(data: T) -> Self {
        Self {
            error_code: ERR_SUCCESS.into(),
            description: None,
            data: Some(data),
        }
    }

    /// Success without payload.
    pub fn success() -> Self {
        Self {
            error_code: ERR_SUCCESS.into(),
            description: None,
            data: None,
        }
    }

    /// Failure with a human-readable description.
    pub fn failed(description: impl Into<String>) -> Self {
        Self {
            error_code: ERR_FAILED.into(),
            description: Some(description.into()),
            data: None,
        }
    }

    /// Failure that still echoes a payload (e.g. the rejected input list).
    pub fn failed_with(description: impl Into<String>, data: T) -> Self {
        Self {
            error_code: ERR_FAILED.into(),
            description: Some(description.into()),
            data: Some(data),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error_code == ERR_SUCCESS
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_orchestrator_contract() {
        let ok: ResultRsp<()> = ResultRsp::success();
        assert_eq!(ok.error_code, "overlayvpn.operation.success");
        assert!(ok.is_success());

        let bad: ResultRsp<()> = ResultRsp::failed("boom");
        assert_eq!(bad.error_code, "overlayvpn.operation.failed");
        assert!(!bad.is_success());
    }

    #[test]
    fn serializes_camel_case_and_skips_empty_fields() {
        let rsp = ResultRsp::ok(vec!["a"]);
        let json = serde_json::to_value(&rsp).unwrap();
        assert_eq!(json["errorCode"], "overlayvpn.operation.success");
        assert!(json.get("description").is_none());
        assert_eq!(json["data"][0], "a");
    }
}
