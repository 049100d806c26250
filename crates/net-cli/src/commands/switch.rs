//! Switch command: write the netplan file and optionally apply it

use std::path::PathBuf;

use anyhow::{Context, Result};
use netswitch_apply::NetplanApplier;
use netswitch_config::NetplanConfigBuilder;

use crate::options::SwitchOptions;

/// What happened after the file was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// `--apply` was not given
    NotRequested,
    /// The apply command exited with status zero
    Applied,
    /// The apply command failed; the file stays written
    Failed,
}

/// Report of a switch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchReport {
    pub config_path: PathBuf,
    pub interface: String,
    pub outcome: ApplyOutcome,
    pub messages: Vec<String>,
}

impl SwitchReport {
    /// Whether the run should exit successfully
    pub fn succeeded(&self) -> bool {
        self.outcome != ApplyOutcome::Failed
    }

    /// Lines shown to the user
    pub fn lines(&self) -> Vec<String> {
        let header = match self.outcome {
            ApplyOutcome::NotRequested => format!(
                "[NS] Netplan configuration written to {}",
                self.config_path.display()
            ),
            ApplyOutcome::Applied => "[NS] Netplan configuration applied".to_string(),
            ApplyOutcome::Failed => "[NS] Netplan configuration failed.".to_string(),
        };

        let mut lines = vec![header];
        if self.outcome != ApplyOutcome::Failed {
            lines.extend(self.messages.iter().cloned());
        }
        lines
    }
}

/// Switch command implementation
pub struct SwitchCommand {
    applier: NetplanApplier,
}

impl SwitchCommand {
    /// Create new switch command
    pub fn new(applier: NetplanApplier) -> Self {
        Self { applier }
    }

    /// Build, write and optionally apply the configuration, then print the report
    pub fn execute(&self, options: &SwitchOptions) -> Result<SwitchReport> {
        let report = self.run(options)?;
        for line in report.lines() {
            println!("{}", line);
        }
        Ok(report)
    }

    /// Build, write and optionally apply the configuration
    pub fn run(&self, options: &SwitchOptions) -> Result<SwitchReport> {
        let builder = NetplanConfigBuilder::from_settings(&options.config_path, &options.interface);

        builder.write().with_context(|| {
            format!(
                "Failed to write configuration file: {}",
                builder.config_path().display()
            )
        })?;

        let outcome = if options.apply {
            let result = self
                .applier
                .apply()
                .with_context(|| format!("Failed to run '{}'", self.applier.command_line()))?;
            if result.success {
                ApplyOutcome::Applied
            } else {
                ApplyOutcome::Failed
            }
        } else {
            ApplyOutcome::NotRequested
        };

        log::debug!("Switch of {} finished: {:?}", builder.interface(), outcome);

        Ok(SwitchReport {
            config_path: builder.config_path().to_path_buf(),
            interface: builder.interface().to_string(),
            outcome,
            messages: builder.messages(),
        })
    }
}
