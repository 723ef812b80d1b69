// ── North-to-south model conversion ──
//
// The orchestrator speaks in overlay-wide instances; the controller wants
// one payload per device. Conversion groups by target network element and
// keeps only the pieces local to that element.
//
// Field mappings are intentionally shallow: the driver is a translator,
// not a policy engine.

use std::collections::HashMap;

use crate::model::{
    IpsecConnection, IpsecDeviceModel, VxlanDeviceModel, VxlanInstance, VxlanTunnelPeer,
};

/// Group VxLAN instances into per-device south payloads, keyed by `ne_id`.
pub fn vxlan_device_models(instances: &[VxlanInstance]) -> HashMap<String, Vec<VxlanDeviceModel>> {
    let mut by_device: HashMap<String, Vec<VxlanDeviceModel>> = HashMap::new();
    for instance in instances {
        by_device
            .entry(instance.ne_id.clone())
            .or_default()
            .push(VxlanDeviceModel::from(instance));
    }
    by_device
}

/// Group IPSec connections into per-device south payloads, keyed by `ne_id`.
pub fn ipsec_device_models(
    connections: &[IpsecConnection],
) -> HashMap<String, Vec<IpsecDeviceModel>> {
    let mut by_device: HashMap<String, Vec<IpsecDeviceModel>> = HashMap::new();
    for connection in connections {
        by_device
            .entry(connection.ne_id.clone())
            .or_default()
            .push(IpsecDeviceModel::from(connection));
    }
    by_device
}

impl From<&VxlanInstance> for VxlanDeviceModel {
    fn from(instance: &VxlanInstance) -> Self {
        // Only the legs anchored on this instance's element belong in its
        // device payload; legs for the far side arrive with that side's
        // own instance.
        let local_tunnels: Vec<_> = instance
            .vxlan_tunnels
            .iter()
            .filter(|t| t.ne_id == instance.ne_id)
            .collect();

        Self {
            vni_id: instance.vni,
            local_address: local_tunnels
                .first()
                .map(|t| t.source_address.clone())
                .unwrap_or_default(),
            vxlan_interface_list: instance
                .vxlan_interfaces
                .iter()
                .filter(|i| i.ne_id == instance.ne_id)
                .map(|i| i.local_name.clone())
                .collect(),
            vxlan_tunnel_list: local_tunnels
                .iter()
                .map(|t| VxlanTunnelPeer {
                    vni_id: instance.vni,
                    peer_address: t.dest_address.clone(),
                })
                .collect(),
        }
    }
}

impl From<&IpsecConnection> for IpsecDeviceModel {
    fn from(conn: &IpsecConnection) -> Self {
        let ike_version = conn
            .ike_policy
            .as_ref()
            .map_or_else(|| "v2".to_owned(), |p| p.version.clone());
        // Proposal fields: the IPSec policy wins when both are present.
        let (auth_algorithm, encryption_algorithm) = match (&conn.ipsec_policy, &conn.ike_policy) {
            (Some(p), _) => (p.auth_algorithm.clone(), p.encryption_algorithm.clone()),
            (None, Some(p)) => (p.auth_algorithm.clone(), p.encryption_algorithm.clone()),
            (None, None) => ("sha2-256".to_owned(), "aes-256".to_owned()),
        };

        Self {
            connection_name: conn.uuid.clone(),
            interface_name: conn.source_if_name.clone(),
            local_address: conn.source_address.clone(),
            peer_address: conn.peer_address.clone(),
            psk: conn.psk.clone(),
            ike_version,
            auth_algorithm,
            encryption_algorithm,
            local_subnets: conn.source_subnets.clone(),
            peer_subnets: conn.peer_subnets.clone(),
        }
    }
}
