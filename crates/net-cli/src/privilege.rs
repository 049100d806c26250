//! Privilege checks

use nix::unistd::geteuid;

use netswitch_core::error::SystemError;
use netswitch_core::Result;

/// Fail unless the process runs with an effective uid of root
pub fn ensure_root() -> Result<()> {
    check_euid(geteuid().as_raw())
}

/// Fail unless `euid` is root
pub fn check_euid(euid: u32) -> Result<()> {
    if euid == 0 {
        Ok(())
    } else {
        log::debug!("Refusing to continue as uid {} without root privileges", euid);
        Err(SystemError::PrivilegeRequired.into())
    }
}
