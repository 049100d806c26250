//! Netswitch Apply
//!
//! Runs the external command that activates a written netplan configuration

pub mod netplan;

pub use netplan::{ApplyResult, NetplanApplier};
