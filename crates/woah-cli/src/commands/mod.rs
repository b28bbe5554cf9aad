//! Command dispatch and handler modules.

mod home;
mod template;

use woah_util::errors::WoahResult;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> WoahResult<()> {
    match cli.command.unwrap_or(Command::Home) {
        Command::Home => home::exec(),
        Command::Template { url } => template::exec(&url),
    }
}
