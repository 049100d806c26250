//! Syntax validation for IPv4 addresses and CIDR suffixes

use regex::Regex;

use netswitch_core::error::ValidationError;
use netswitch_core::NetworkError;

/// One decimal octet, 0-255. Leading zeros are tolerated.
const OCTET: &str = r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

/// Prefix length, 0-32
const PREFIX: &str = r"(?:[0-9]|[1-2][0-9]|3[0-2])";

/// Syntax validator for command line addresses
pub struct AddressValidator {
    /// Dotted quad with a mandatory CIDR suffix
    address_cidr_regex: Regex,
    /// Dotted quad with an optional CIDR suffix
    address_regex: Regex,
}

impl AddressValidator {
    /// Create new address validator
    pub fn new() -> Self {
        let quad = format!(r"{OCTET}(?:\.{OCTET}){{3}}");
        Self {
            address_cidr_regex: Regex::new(&format!(r"^{quad}/{PREFIX}$"))
                .expect("address/CIDR pattern is valid"),
            address_regex: Regex::new(&format!(r"^{quad}(?:/{PREFIX})?$"))
                .expect("address pattern is valid"),
        }
    }

    /// Validate an `IP/CIDR` value, returning it unchanged
    pub fn validate_address_cidr<'a>(&self, value: &'a str) -> Result<&'a str, NetworkError> {
        if self.address_cidr_regex.is_match(value) {
            Ok(value)
        } else {
            log::debug!("Rejected address/CIDR {:?}", value);
            Err(ValidationError::InvalidAddressCidr {
                value: value.to_string(),
            }
            .into())
        }
    }

    /// Validate an `IP` value with optional `/CIDR`, returning it unchanged
    pub fn validate_address<'a>(&self, value: &'a str) -> Result<&'a str, NetworkError> {
        if self.address_regex.is_match(value) {
            Ok(value)
        } else {
            log::debug!("Rejected address {:?}", value);
            Err(ValidationError::InvalidAddress {
                value: value.to_string(),
            }
            .into())
        }
    }
}

impl Default for AddressValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_cidr_accepts_valid_values() {
        let validator = AddressValidator::new();
        for value in [
            "192.168.1.1/24",
            "10.10.10.1/16",
            "0.0.0.0/0",
            "255.255.255.255/32",
            "172.16.0.1/12",
            "010.0.0.1/8",
        ] {
            assert_eq!(validator.validate_address_cidr(value).unwrap(), value);
        }
    }

    #[test]
    fn test_address_cidr_requires_prefix() {
        let validator = AddressValidator::new();
        assert!(validator.validate_address_cidr("192.168.1.1").is_err());
        assert!(validator.validate_address_cidr("192.168.1.1/").is_err());
    }

    #[test]
    fn test_address_cidr_rejects_bad_prefix() {
        let validator = AddressValidator::new();
        for value in ["192.168.1.1/33", "192.168.1.1/99", "192.168.1.1/-1", "192.168.1.1/2a"] {
            assert!(validator.validate_address_cidr(value).is_err(), "{}", value);
        }
    }

    #[test]
    fn test_octets_are_bounded() {
        let validator = AddressValidator::new();
        for value in ["256.1.1.1", "299.0.0.1", "1.1.1.300", "1000.1.1.1"] {
            assert!(validator.validate_address(value).is_err(), "{}", value);
        }
        assert!(validator.validate_address("0.0.0.0").is_ok());
        assert!(validator.validate_address("250.251.252.253").is_ok());
    }

    #[test]
    fn test_address_rejects_malformed_shapes() {
        let validator = AddressValidator::new();
        for value in [
            "",
            "1.2.3",
            "1.2.3.4.5",
            "a.b.c.d",
            "192.168.1.1 ",
            " 192.168.1.1",
            "192.168.1.1\n",
            "192,168,1,1",
            "fe80::1",
        ] {
            assert!(validator.validate_address(value).is_err(), "{:?}", value);
        }
    }

    #[test]
    fn test_address_prefix_is_optional() {
        let validator = AddressValidator::new();
        assert_eq!(validator.validate_address("8.8.8.8").unwrap(), "8.8.8.8");
        assert_eq!(validator.validate_address("10.0.0.1/24").unwrap(), "10.0.0.1/24");
        assert!(validator.validate_address("10.0.0.1/33").is_err());
    }

    #[test]
    fn test_error_carries_offending_value() {
        let validator = AddressValidator::new();
        let err = validator.validate_address_cidr("1.2.3.4.5/24").unwrap_err();
        assert_eq!(err.to_string(), "Invalid IP Address or CIDR '1.2.3.4.5/24'");

        let err = validator.validate_address("1.2.3.4/40").unwrap_err();
        assert_eq!(err.to_string(), "Invalid IP Address '1.2.3.4/40'");
    }
}
