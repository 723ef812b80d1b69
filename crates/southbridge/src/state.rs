use std::sync::Arc;

use southbridge_api::{ApiError, DriverProxy};
use southbridge_core::{IpsecService, VxlanService, WanInterfaceService};

use crate::config::ServiceConfig;

/// Shared handler state: the device-operation services, all backed by one
/// session-aware proxy (and therefore one session store).
#[derive(Clone)]
pub struct AppState {
    pub wan: Arc<WanInterfaceService>,
    pub vxlan: Arc<VxlanService>,
    pub ipsec: Arc<IpsecService>,
}

impl AppState {
    pub fn new(proxy: Arc<DriverProxy>) -> Self {
        Self {
            wan: Arc::new(WanInterfaceService::new(Arc::clone(&proxy))),
            vxlan: Arc::new(VxlanService::new(Arc::clone(&proxy))),
            ipsec: Arc::new(IpsecService::new(proxy)),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, ApiError> {
        let registry = Arc::new(config.registry());
        let proxy = Arc::new(DriverProxy::new(registry, &config.transport())?);
        Ok(Self::new(proxy))
    }
}
