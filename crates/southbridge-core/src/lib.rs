//! Domain layer of the southbridge driver.
//!
//! Sits between the orchestrator-facing REST facade and the session-aware
//! southbound client (`southbridge-api`):
//!
//! - **[`model`]** — orchestrator-facing (north) and controller-facing
//!   (south) wire models for VxLAN, IPSec, and WAN sub-interfaces, plus the
//!   [`ResultRsp`] envelope the orchestrator consumes.
//! - **[`convert`]** — groups north models by target network element and
//!   produces the per-device south payloads.
//! - **[`envelope`]** — decodes the controller's `{errcode, errmsg, data}`
//!   envelope out of a raw [`ControllerResponse`](southbridge_api::ControllerResponse).
//! - **[`service`]** — device-operation services driving the proxy:
//!   [`VxlanService`], [`IpsecService`], [`WanInterfaceService`].
//! - **[`registry`]** — [`StaticRegistry`], the config-backed
//!   `ControllerRegistry` implementation.

pub mod convert;
pub mod envelope;
pub mod error;
pub mod model;
pub mod registry;
pub mod service;

pub use error::CoreError;
pub use registry::{ControllerEntry, StaticRegistry};
pub use service::{IpsecService, VxlanService, WanInterfaceService};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    DevicePort, IkePolicy, IpsecConnection, IpsecDeviceModel, IpsecPolicy, ResultRsp, Vtep,
    VxlanDeviceModel, VxlanInstance, VxlanInterface, VxlanTunnel, VxlanTunnelPeer,
    WanSubInterface, WanUsedType,
};
