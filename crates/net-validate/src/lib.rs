//! Netswitch Validation
//!
//! Syntax validation for the addresses handed to netswitch on the command line

pub mod syntax;

pub use crate::syntax::AddressValidator;

use netswitch_core::{InterfaceSettings, NetworkError};

/// Validate every address carried by the interface settings.
///
/// The static address must carry a CIDR suffix, gateway and DNS may omit it.
/// Fails on the first invalid value in the order address, gateway, dns.
pub fn validate_settings(
    validator: &AddressValidator,
    settings: &InterfaceSettings,
) -> Result<(), NetworkError> {
    if let Some(address) = &settings.address {
        validator.validate_address_cidr(address)?;
    }
    if let Some(gateway) = &settings.gateway {
        validator.validate_address(gateway)?;
    }
    if let Some(dns) = &settings.dns {
        validator.validate_address(dns)?;
    }

    log::debug!("Settings for interface {} passed validation", settings.name);
    Ok(())
}
