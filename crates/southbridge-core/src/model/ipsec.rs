// IPSec models, north and south.

use serde::{Deserialize, Serialize};

/// Orchestrator-facing IPSec connection between two network elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpsecConnection {
    pub uuid: String,
    pub ne_id: String,
    /// WAN interface the tunnel terminates on.
    pub source_if_name: String,
    pub source_address: String,
    pub peer_address: String,
    /// Pre-shared key; opaque pass-through to the device.
    #[serde(default)]
    pub psk: String,
    #[serde(default)]
    pub ike_policy: Option<IkePolicy>,
    #[serde(default)]
    pub ipsec_policy: Option<IpsecPolicy>,
    #[serde(default)]
    pub source_subnets: Vec<String>,
    #[serde(default)]
    pub peer_subnets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IkePolicy {
    #[serde(default = "default_ike_version")]
    pub version: String,
    pub auth_algorithm: String,
    pub encryption_algorithm: String,
}

fn default_ike_version() -> String {
    "v2".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpsecPolicy {
    pub auth_algorithm: String,
    pub encryption_algorithm: String,
    #[serde(default)]
    pub transform_protocol: Option<String>,
}

// ── South model ─────────────────────────────────────────────────────

/// Per-device IPSec payload pushed to the controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpsecDeviceModel {
    /// Device-local connection name; the orchestrator's connection uuid.
    pub connection_name: String,
    pub interface_name: String,
    pub local_address: String,
    pub peer_address: String,
    pub psk: String,
    pub ike_version: String,
    pub auth_algorithm: String,
    pub encryption_algorithm: String,
    #[serde(default)]
    pub local_subnets: Vec<String>,
    #[serde(default)]
    pub peer_subnets: Vec<String>,
}
