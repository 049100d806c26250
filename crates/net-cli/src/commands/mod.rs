//! CLI commands

pub mod print;
pub mod switch;

pub use print::PrintCommand;
pub use switch::{ApplyOutcome, SwitchCommand, SwitchReport};
