//!
//! # lp_commands
//!
//! This provides a stream-based API for issuing scripting commands for opening, editing and
//! exporting a Live Pictures animation.
//!

mod command;
mod command_runner;
mod output;
mod state;
mod error;
mod subcommands;

pub use self::command::*;
pub use self::command_runner::*;
pub use self::output::*;
pub use self::state::*;
pub use self::error::*;
