//! Netplan YAML generation
//!
//! The file is always rendered from scratch from a fixed skeleton holding a
//! single ethernet interface. Existing content is never parsed or merged.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use netswitch_core::error::SystemError;
use netswitch_core::{InterfaceSettings, Result, NETPLAN_RENDERER, NETPLAN_VERSION};

/// Indentation of keys under the interface entry
const KEY_INDENT: &str = "      ";

/// Indentation of keys nested one level below an interface key
const NESTED_INDENT: &str = "        ";

/// Builder for a single-interface netplan file
#[derive(Debug, Clone)]
pub struct NetplanConfigBuilder {
    config_path: PathBuf,
    interface: String,
    dhcp: bool,
    address: Option<String>,
    gateway: Option<String>,
    dns: Option<String>,
}

impl NetplanConfigBuilder {
    /// Create a builder targeting `config_path` for `interface`
    pub fn new<P: AsRef<Path>>(config_path: P, interface: impl Into<String>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            interface: interface.into(),
            dhcp: false,
            address: None,
            gateway: None,
            dns: None,
        }
    }

    /// Create a builder and apply every setting in order dhcp, address, gateway, dns
    pub fn from_settings<P: AsRef<Path>>(config_path: P, settings: &InterfaceSettings) -> Self {
        let mut builder = Self::new(config_path, settings.name.clone());
        builder.set_dhcp(settings.dhcp);
        builder.set_address(settings.address.as_deref());
        builder.set_gateway(settings.gateway.as_deref());
        builder.set_dns(settings.dns.as_deref());
        builder
    }

    /// Path the configuration is written to
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Interface the configuration describes
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Set DHCPv4 state. Always rendered.
    pub fn set_dhcp(&mut self, enabled: bool) {
        self.dhcp = enabled;
    }

    /// Set static address (IP/CIDR). Empty or missing values are ignored.
    pub fn set_address(&mut self, address: Option<&str>) {
        if let Some(address) = address.filter(|a| !a.is_empty()) {
            self.address = Some(address.to_string());
        }
    }

    /// Set default gateway. Empty or missing values are ignored.
    pub fn set_gateway(&mut self, gateway: Option<&str>) {
        if let Some(gateway) = gateway.filter(|g| !g.is_empty()) {
            self.gateway = Some(gateway.to_string());
        }
    }

    /// Set DNS nameserver. Empty or missing values are ignored.
    pub fn set_dns(&mut self, dns: Option<&str>) {
        if let Some(dns) = dns.filter(|d| !d.is_empty()) {
            self.dns = Some(dns.to_string());
        }
    }

    /// Render the netplan document
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str("network:\n");
        output.push_str(&format!("  version: {}\n", NETPLAN_VERSION));
        output.push_str(&format!("  renderer: {}\n", NETPLAN_RENDERER));
        output.push_str("  ethernets:\n");
        output.push_str(&format!("    {}:\n", self.interface));

        let dhcp_state = if self.dhcp { "yes" } else { "no" };
        output.push_str(&format!("{}dhcp4: {}\n", KEY_INDENT, dhcp_state));

        if let Some(address) = &self.address {
            output.push_str(&format!("{}addresses: [{}]\n", KEY_INDENT, address));
        }

        if let Some(gateway) = &self.gateway {
            output.push_str(&format!("{}gateway4: {}\n", KEY_INDENT, gateway));
        }

        if let Some(dns) = &self.dns {
            output.push_str(&format!("{}nameservers:\n", KEY_INDENT));
            output.push_str(&format!("{}addresses: [{}]\n", NESTED_INDENT, dns));
        }

        output
    }

    /// Human readable summary of the settings that were applied
    pub fn messages(&self) -> Vec<String> {
        let mut messages = Vec::new();

        if self.dhcp {
            messages.push(" - DHCP: Enabled".to_string());
        }
        if let Some(address) = &self.address {
            messages.push(format!(" - Address set: {}", address));
        }
        if let Some(gateway) = &self.gateway {
            messages.push(format!(" - Gateway set: {}", gateway));
        }
        if let Some(dns) = &self.dns {
            messages.push(format!(" - DNS set: {}", dns));
        }

        messages
    }

    /// Write the rendered document, replacing whatever the file held
    pub fn write(&self) -> Result<()> {
        let content = self.render();
        debug!(
            "Writing {} bytes to {}",
            content.len(),
            self.config_path.display()
        );

        fs::write(&self.config_path, content).map_err(|source| SystemError::ConfigWrite {
            path: self.config_path.clone(),
            source,
        })?;

        info!(
            "Netplan configuration for {} written to {}",
            self.interface,
            self.config_path.display()
        );
        Ok(())
    }
}

/// Read an existing netplan file verbatim
pub fn read_config<P: AsRef<Path>>(config_path: P) -> Result<String> {
    let path = config_path.as_ref();
    debug!("Reading netplan configuration from {}", path.display());

    fs::read_to_string(path).map_err(|source| {
        SystemError::ConfigRead {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Copy an existing netplan file verbatim to `out`
pub fn print_config<P: AsRef<Path>, W: Write>(config_path: P, out: &mut W) -> Result<()> {
    let content = read_config(config_path)?;
    out.write_all(content.as_bytes())?;
    out.flush()?;
    Ok(())
}
