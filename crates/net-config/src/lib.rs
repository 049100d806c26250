//! Netswitch Configuration
//!
//! Netplan file generation and access

pub mod netplan;

pub use netplan::{print_config, read_config, NetplanConfigBuilder};
