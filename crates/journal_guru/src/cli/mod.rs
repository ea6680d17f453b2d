//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the journal-guru binary.

mod choices;
mod commands;
mod compose;
mod serve;

pub use choices::{handle_choices_command, render_choices};
pub use commands::{Cli, Commands, ComposeArgs, ServeArgs};
pub use compose::{form_from_args, handle_compose_command};
pub use serve::handle_serve_command;
