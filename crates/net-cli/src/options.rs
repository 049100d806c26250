//! Validated options for a configuration switch

use std::path::PathBuf;

use netswitch_core::{InterfaceSettings, NetworkError};
use netswitch_validate::{validate_settings, AddressValidator};

use crate::cli::Cli;
use crate::settings::Settings;

/// Everything needed to write (and maybe apply) a netplan file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOptions {
    pub config_path: PathBuf,
    pub interface: InterfaceSettings,
    pub apply: bool,
}

impl SwitchOptions {
    /// Build options from parsed arguments, falling back to `settings` for
    /// the interface and file path. Every address is validated; a
    /// `--dns-gateway` value replaces both `--dns` and `--gateway`.
    pub fn from_cli(
        cli: &Cli,
        settings: &Settings,
        validator: &AddressValidator,
    ) -> Result<Self, NetworkError> {
        let name = cli
            .interface
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| settings.interface.clone());

        let interface = InterfaceSettings::new(name)
            .with_dhcp(cli.dhcp)
            .with_address(cli.address.clone())
            .with_gateway(cli.gateway.clone())
            .with_dns(cli.dns.clone());

        // Every flag is checked before the combined one overwrites dns and
        // gateway, so a bad --dns next to --dns-gateway is still reported.
        validate_settings(validator, &interface)?;
        if let Some(dns_gateway) = cli.dns_gateway.as_deref().filter(|v| !v.is_empty()) {
            validator.validate_address(dns_gateway)?;
        }
        let interface = interface.with_dns_gateway(cli.dns_gateway.clone());

        Ok(Self {
            config_path: config_path(cli, settings),
            interface,
            apply: cli.apply,
        })
    }
}

/// Netplan file selected by `--config` or the settings
pub fn config_path(cli: &Cli, settings: &Settings) -> PathBuf {
    cli.config
        .clone()
        .unwrap_or_else(|| settings.config_path.clone())
}
