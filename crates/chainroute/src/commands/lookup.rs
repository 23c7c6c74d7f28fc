//! `chainroute commands <protocol>` - ordered command list for a protocol.
//!
//! Mirrors the registry contract: unknown protocols are not an error, they
//! emit an empty list and exit 0.

use anyhow::Result;
use chainroute_core::{commands_for, emit_stdout, is_known, LookupOutput};
use clap::ArgMatches;
use tracing::debug;

pub fn run(matches: &ArgMatches) -> Result<()> {
    let protocol = matches
        .get_one::<String>("protocol")
        .cloned()
        .unwrap_or_default();

    let commands = commands_for(&protocol);
    debug!(protocol = %protocol, count = commands.len(), "command lookup");

    emit_stdout(&LookupOutput {
        known: is_known(&protocol),
        commands: commands.to_vec(),
        protocol,
    })?;
    Ok(())
}
