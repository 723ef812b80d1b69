use std::sync::Arc;

use tracing::debug;

use southbridge_api::DriverProxy;

use crate::envelope;
use crate::error::CoreError;
use crate::model::{DevicePort, WanSubInterface, WanUsedType};
use crate::service::urls;

/// Queries a device's WAN sub-interfaces through the controller.
pub struct WanInterfaceService {
    proxy: Arc<DriverProxy>,
}

impl WanInterfaceService {
    pub fn new(proxy: Arc<DriverProxy>) -> Self {
        Self { proxy }
    }

    /// Fetch the WAN sub-interfaces of `device_id` provisioned for
    /// `used_type`.
    ///
    /// Ports without an address are dropped: an unnumbered port cannot
    /// terminate an overlay, and callers derive VTEP/tunnel endpoints from
    /// the addresses returned here.
    pub async fn query_wan_interfaces(
        &self,
        ctrl_uuid: &str,
        device_id: &str,
        used_type: WanUsedType,
    ) -> Result<Vec<WanSubInterface>, CoreError> {
        debug!(controller = ctrl_uuid, device = device_id, %used_type, "querying WAN sub-interfaces");

        let path = urls::device_ports(device_id, used_type);
        let resp = self.proxy.get(&path, ctrl_uuid).await;
        let ports: Vec<DevicePort> = envelope::check_response(&resp)?;

        Ok(ports
            .into_iter()
            .filter(|p| p.ip_addr.as_deref().is_some_and(|ip| !ip.is_empty()))
            .map(WanSubInterface::from)
            .collect())
    }
}
