// Device-operation services.
//
// Thin orchestration over the session-aware proxy: build the southbound
// path, fire the verb, check the vendor envelope. Relogin-and-replay is
// entirely the proxy's business — nothing here knows sessions exist.

mod ipsec;
mod urls;
mod vxlan;
mod wan;

pub use ipsec::IpsecService;
pub use vxlan::VxlanService;
pub use wan::WanInterfaceService;
