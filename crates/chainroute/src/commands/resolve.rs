//! `chainroute resolve <name> [--protocol <p>]` - protocol for a command.

use anyhow::Result;
use chainroute_core::{emit_stdout, protocol_of, resolve_protocol, Command, Error, ResolveOutput};
use clap::ArgMatches;
use tracing::debug;

pub fn run(matches: &ArgMatches) -> Result<()> {
    let name = matches
        .get_one::<String>("name")
        .cloned()
        .unwrap_or_default();
    if name.trim().is_empty() {
        return Err(Error::validation("command name cannot be empty", "name").into());
    }

    let command = match matches.get_one::<String>("protocol") {
        Some(protocol) => Command::with_protocol(&name, protocol),
        None => Command::new(&name),
    };

    if command.protocol.is_none() {
        // Hint when an untagged name is actually a registered protocol command
        if let Some(owner) = protocol_of(&name) {
            debug!(name = %name, protocol = %owner, "untagged command name is registered");
        }
    }

    let protocol = resolve_protocol(&command).to_string();
    emit_stdout(&ResolveOutput { name, protocol })?;
    Ok(())
}
