// Southbound URL conventions for the branch-controller REST API.

use crate::model::WanUsedType;

/// Ports of one device, filtered to a WAN overlay role.
pub(crate) fn device_ports(device_id: &str, used_type: WanUsedType) -> String {
    format!("/acbranch/v1/device/{device_id}/ports?usedType={used_type}")
}

/// VxLAN instance collection of one device.
pub(crate) fn vxlan_instances(device_id: &str) -> String {
    format!("/acbranch/v1/device/{device_id}/vxlan/instances")
}

/// One VxLAN instance, addressed controller-wide by its id.
pub(crate) fn vxlan_instance(instance_id: &str) -> String {
    format!("/acbranch/v1/vxlan/instances/{instance_id}")
}

/// IPSec connection collection of one device.
pub(crate) fn ipsec_connections(device_id: &str) -> String {
    format!("/acbranch/v1/device/{device_id}/ipsec/connections")
}

/// One IPSec connection, addressed controller-wide by its name.
pub(crate) fn ipsec_connection(connection_id: &str) -> String {
    format!("/acbranch/v1/ipsec/connections/{connection_id}")
}
