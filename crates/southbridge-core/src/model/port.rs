// Port and WAN sub-interface models.

use serde::{Deserialize, Serialize};

/// What the orchestrator intends to run over a WAN interface.
///
/// Sent southbound as the `usedType` filter; the controller only returns
/// ports provisioned for that overlay role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WanUsedType {
    Gre,
    Vxlan,
    Ipsec,
}

impl WanUsedType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gre => "GRE",
            Self::Vxlan => "VXLAN",
            Self::Ipsec => "IPSEC",
        }
    }

    /// Parse the orchestrator's query-parameter spelling.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "GRE" => Some(Self::Gre),
            "VXLAN" => Some(Self::Vxlan),
            "IPSEC" => Some(Self::Ipsec),
            _ => None,
        }
    }
}

impl std::fmt::Display for WanUsedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controller-side (south) port record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePort {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub ip_addr: Option<String>,
    #[serde(default)]
    pub mask: Option<String>,
    #[serde(default)]
    pub ce_low_vlan: Option<u16>,
    #[serde(default)]
    pub ce_high_vlan: Option<u16>,
}

/// Orchestrator-facing (north) WAN sub-interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WanSubInterface {
    pub name: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub mask: Option<String>,
    #[serde(default)]
    pub ce_low_vlan: Option<u16>,
}

impl From<DevicePort> for WanSubInterface {
    fn from(port: DevicePort) -> Self {
        Self {
            // Prefer the operator-assigned alias when the controller has one.
            name: port.alias.unwrap_or(port.name),
            ip_address: port.ip_addr,
            mask: port.mask,
            ce_low_vlan: port.ce_low_vlan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn used_type_round_trips_the_wire_spelling() {
        assert_eq!(WanUsedType::parse("VXLAN"), Some(WanUsedType::Vxlan));
        assert_eq!(WanUsedType::parse("IPSEC"), Some(WanUsedType::Ipsec));
        assert_eq!(WanUsedType::parse("GRE"), Some(WanUsedType::Gre));
        assert_eq!(WanUsedType::parse("vxlan"), None);
        assert_eq!(WanUsedType::Vxlan.as_str(), "VXLAN");
    }

    #[test]
    fn wan_sub_interface_prefers_alias() {
        let port = DevicePort {
            name: "GigabitEthernet0/0/1".into(),
            alias: Some("wan-primary".into()),
            ip_addr: Some("192.0.2.10".into()),
            mask: Some("255.255.255.0".into()),
            ce_low_vlan: Some(100),
            ce_high_vlan: None,
        };
        let wan = WanSubInterface::from(port);
        assert_eq!(wan.name, "wan-primary");
        assert_eq!(wan.ip_address.as_deref(), Some("192.0.2.10"));
    }
}
