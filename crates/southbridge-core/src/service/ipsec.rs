use std::sync::Arc;

use tracing::debug;

use southbridge_api::DriverProxy;

use crate::envelope;
use crate::error::CoreError;
use crate::model::IpsecDeviceModel;
use crate::service::urls;

/// Creates and deletes IPSec connections on branch devices.
pub struct IpsecService {
    proxy: Arc<DriverProxy>,
}

impl IpsecService {
    pub fn new(proxy: Arc<DriverProxy>) -> Self {
        Self { proxy }
    }

    /// Push a batch of IPSec payloads to one device.
    pub async fn create_ipsec(
        &self,
        ctrl_uuid: &str,
        device_id: &str,
        models: &[IpsecDeviceModel],
    ) -> Result<Vec<IpsecDeviceModel>, CoreError> {
        debug!(
            controller = ctrl_uuid,
            device = device_id,
            count = models.len(),
            "creating IPSec connections"
        );

        let body = serde_json::to_string(models)?;
        let resp = self
            .proxy
            .post(&urls::ipsec_connections(device_id), &body, ctrl_uuid)
            .await;
        envelope::check_response(&resp)
    }

    /// Delete one IPSec connection by its name.
    pub async fn delete_ipsec(
        &self,
        ctrl_uuid: &str,
        connection_id: &str,
    ) -> Result<(), CoreError> {
        debug!(controller = ctrl_uuid, connection = connection_id, "deleting IPSec connection");

        let resp = self
            .proxy
            .delete(&urls::ipsec_connection(connection_id), None, ctrl_uuid)
            .await;
        envelope::check_ack(&resp)
    }
}
