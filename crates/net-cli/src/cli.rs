//! Command line definition

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Legacy two letter short flag for `--dns-gateway`
const DNS_GATEWAY_SHORT: &str = "-dg";

#[derive(Parser, Debug, Clone)]
#[command(name = "netswitch")]
#[command(about = "Network Configuration Switch")]
#[command(version)]
#[command(long_about = "
Network Configuration Switch

Edits /etc/netplan/01-netcfg.yaml to quickly change network configurations.
Requires sudo/root privileges to edit the config file.
(Made for debian/ubuntu VMs using netplan)
")]
#[command(after_help = "\
Examples:
  netswitch -a 10.10.10.1/16
  netswitch --dhcp
  netswitch --address=192.168.1.1/24 -dg 192.168.1.2 --apply")]
pub struct Cli {
    /// Turn on DHCP
    #[arg(long)]
    pub dhcp: bool,

    /// Set IP address
    #[arg(short = 'a', long, value_name = "IP/CIDR")]
    pub address: Option<String>,

    /// Set DNS nameserver address
    #[arg(short = 'd', long, value_name = "IP")]
    pub dns: Option<String>,

    /// Set default gateway address
    #[arg(short = 'g', long, value_name = "IP")]
    pub gateway: Option<String>,

    /// Set DNS and default gateway to the same address (short form: -dg)
    #[arg(long = "dns-gateway", value_name = "IP")]
    pub dns_gateway: Option<String>,

    /// Set target interface (Default: enp0s3)
    #[arg(short = 'i', long, value_name = "INTERFACE")]
    pub interface: Option<String>,

    /// Path of config file to edit/create (Default: /etc/netplan/01-netcfg.yaml)
    #[arg(short = 'c', long = "config", value_name = "FILEPATH")]
    pub config: Option<PathBuf>,

    /// Print current netplan configuration
    #[arg(long)]
    pub print: bool,

    /// Run 'netplan apply' after writing config
    #[arg(long)]
    pub apply: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

/// Rewrite the legacy `-dg` short flag into `--dns-gateway`.
///
/// clap only knows single character short flags and would read `-dg` as
/// `-d g`. Arguments after a bare `--` are passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(Into::<OsString>::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let replacement = match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    None
                }
                Some(DNS_GATEWAY_SHORT) => Some(OsString::from("--dns-gateway")),
                Some(s) => s
                    .strip_prefix("-dg=")
                    .map(|value| OsString::from(format!("--dns-gateway={}", value))),
                None => None,
            };
            replacement.unwrap_or(arg)
        })
        .collect()
}
