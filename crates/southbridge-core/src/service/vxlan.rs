use std::sync::Arc;

use tracing::debug;

use southbridge_api::DriverProxy;

use crate::envelope;
use crate::error::CoreError;
use crate::model::VxlanDeviceModel;
use crate::service::urls;

/// Creates and deletes VxLAN instances on branch devices.
pub struct VxlanService {
    proxy: Arc<DriverProxy>,
}

impl VxlanService {
    pub fn new(proxy: Arc<DriverProxy>) -> Self {
        Self { proxy }
    }

    /// Push a batch of VxLAN payloads to one device.
    ///
    /// Returns the controller's echo of the created instances.
    pub async fn create_vxlan(
        &self,
        ctrl_uuid: &str,
        device_id: &str,
        models: &[VxlanDeviceModel],
    ) -> Result<Vec<VxlanDeviceModel>, CoreError> {
        debug!(
            controller = ctrl_uuid,
            device = device_id,
            count = models.len(),
            "creating VxLAN instances"
        );

        let body = serde_json::to_string(models)?;
        let resp = self
            .proxy
            .post(&urls::vxlan_instances(device_id), &body, ctrl_uuid)
            .await;
        envelope::check_response(&resp)
    }

    /// Delete one VxLAN instance by its id.
    pub async fn delete_vxlan(&self, ctrl_uuid: &str, instance_id: &str) -> Result<(), CoreError> {
        debug!(controller = ctrl_uuid, instance = instance_id, "deleting VxLAN instance");

        let resp = self
            .proxy
            .delete(&urls::vxlan_instance(instance_id), None, ctrl_uuid)
            .await;
        envelope::check_ack(&resp)
    }
}
