//! Print command

use anyhow::{Context, Result};
use netswitch_config::print_config;
use std::path::Path;

/// Print command implementation
pub struct PrintCommand;

impl PrintCommand {
    /// Create new print command
    pub fn new() -> Self {
        Self
    }

    /// Print the current configuration file verbatim
    pub fn execute(&self, config_path: &Path) -> Result<()> {
        let stdout = std::io::stdout();
        print_config(config_path, &mut stdout.lock()).with_context(|| {
            format!(
                "Failed to print configuration file: {}",
                config_path.display()
            )
        })
    }
}

impl Default for PrintCommand {
    fn default() -> Self {
        Self::new()
    }
}
