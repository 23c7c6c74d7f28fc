//! `chainroute protocols` - full registry listing.

use anyhow::Result;
use chainroute_core::{emit_stdout, known_protocols, ProtocolEntry, ProtocolsOutput};

pub fn run() -> Result<()> {
    let protocols: Vec<ProtocolEntry> = known_protocols()
        .map(|protocol| ProtocolEntry {
            protocol: protocol.as_str().to_string(),
            commands: protocol.commands().to_vec(),
        })
        .collect();

    emit_stdout(&ProtocolsOutput {
        count: protocols.len(),
        protocols,
    })?;
    Ok(())
}
