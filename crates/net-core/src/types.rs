//! Core network types and defaults

/// Interface edited when none is given
pub const DEFAULT_INTERFACE: &str = "enp0s3";

/// Netplan file edited when none is given
pub const DEFAULT_CONFIG_PATH: &str = "/etc/netplan/01-netcfg.yaml";

/// Command run by `--apply` unless overridden
pub const DEFAULT_APPLY_COMMAND: [&str; 2] = ["netplan", "apply"];

/// Netplan schema version written to the file
pub const NETPLAN_VERSION: u8 = 2;

/// The only backend netswitch renders for
pub const NETPLAN_RENDERER: &str = "networkd";

/// Settings for the single ethernet interface netswitch manages.
///
/// Address values are kept exactly as given; syntax checks live in
/// `netswitch-validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceSettings {
    pub name: String,
    pub dhcp: bool,
    pub address: Option<String>,
    pub gateway: Option<String>,
    pub dns: Option<String>,
}

impl InterfaceSettings {
    /// Create settings for an interface with DHCP off and nothing else set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dhcp: false,
            address: None,
            gateway: None,
            dns: None,
        }
    }

    /// Set DHCP state
    pub fn with_dhcp(mut self, enabled: bool) -> Self {
        self.dhcp = enabled;
        self
    }

    /// Set static address (IP/CIDR)
    pub fn with_address(mut self, address: Option<String>) -> Self {
        self.address = non_empty(address);
        self
    }

    /// Set default gateway
    pub fn with_gateway(mut self, gateway: Option<String>) -> Self {
        self.gateway = non_empty(gateway);
        self
    }

    /// Set DNS nameserver
    pub fn with_dns(mut self, dns: Option<String>) -> Self {
        self.dns = non_empty(dns);
        self
    }

    /// Use one address as both DNS nameserver and default gateway
    pub fn with_dns_gateway(self, address: Option<String>) -> Self {
        match non_empty(address) {
            Some(addr) => self.with_dns(Some(addr.clone())).with_gateway(Some(addr)),
            None => self,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
