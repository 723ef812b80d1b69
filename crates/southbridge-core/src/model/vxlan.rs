// VxLAN models, north and south.

use serde::{Deserialize, Serialize};

/// Orchestrator-facing VxLAN instance spanning one or more devices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VxlanInstance {
    pub uuid: String,
    /// The network element this instance is anchored on.
    pub ne_id: String,
    pub vni: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub vxlan_interfaces: Vec<VxlanInterface>,
    #[serde(default)]
    pub vxlan_tunnels: Vec<VxlanTunnel>,
}

/// A local interface bound into a VxLAN instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VxlanInterface {
    pub uuid: String,
    pub ne_id: String,
    pub local_name: String,
}

/// One tunnel leg of a VxLAN instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VxlanTunnel {
    pub uuid: String,
    pub ne_id: String,
    pub peer_ne_id: String,
    /// Local VTEP address.
    pub source_address: String,
    /// Remote VTEP address.
    pub dest_address: String,
}

/// VTEP endpoint derived from a device's WAN sub-interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vtep {
    pub device_id: String,
    pub vtep_ip: String,
}

impl Vtep {
    pub fn new(device_id: impl Into<String>, vtep_ip: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            vtep_ip: vtep_ip.into(),
        }
    }
}

// ── South models ────────────────────────────────────────────────────

/// Per-device VxLAN payload pushed to the controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VxlanDeviceModel {
    pub vni_id: u32,
    /// Local VTEP source address.
    pub local_address: String,
    /// Names of local interfaces bound to the VNI.
    #[serde(default)]
    pub vxlan_interface_list: Vec<String>,
    #[serde(default)]
    pub vxlan_tunnel_list: Vec<VxlanTunnelPeer>,
}

/// One remote peer of a device-level VxLAN tunnel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VxlanTunnelPeer {
    pub vni_id: u32,
    pub peer_address: String,
}
