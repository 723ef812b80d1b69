// Wire models, north and south.
//
// North models are what the orchestrator sends and receives; south models
// are the per-device payloads the controller expects. `convert` bridges
// the two.

pub mod ipsec;
pub mod port;
pub mod result;
pub mod vxlan;

pub use ipsec::{IkePolicy, IpsecConnection, IpsecDeviceModel, IpsecPolicy};
pub use port::{DevicePort, WanSubInterface, WanUsedType};
pub use result::ResultRsp;
pub use vxlan::{Vtep, VxlanDeviceModel, VxlanInstance, VxlanInterface, VxlanTunnel, VxlanTunnelPeer};
