//! Static protocol-to-command registry.
//!
//! The registry is two fixed tables defined at compile time, alive for the
//! process lifetime and safe for unlimited concurrent readers. Lookup is
//! total: unrecognized protocol names yield an empty command list rather
//! than an error.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use strum::IntoEnumIterator;
use tracing::debug;

use crate::domain::{Command, Protocol};

/// Commands registered for Uniswap v4, in dispatch order.
const UNISWAP_V4_COMMANDS: &[&str] = &["v4_swap", "v4_add_liquidity"];

/// Commands registered for Aave v3, in dispatch order.
const AAVE_V3_COMMANDS: &[&str] = &["v3_lend", "v3_borrow"];

/// The empty result for unrecognized protocols.
const NO_COMMANDS: &[&str] = &[];

impl Protocol {
    /// The ordered command list registered for this protocol.
    ///
    /// Typed lookup cannot miss: every variant has a table.
    #[must_use]
    pub const fn commands(self) -> &'static [&'static str] {
        match self {
            Self::UniswapV4 => UNISWAP_V4_COMMANDS,
            Self::AaveV3 => AAVE_V3_COMMANDS,
        }
    }
}

/// Look up the ordered command list registered for a protocol name.
///
/// Total for any input: unknown names (including `""` and `"core"`) yield an
/// empty slice, never an error. No allocation on either path.
#[must_use]
pub fn commands_for(protocol: &str) -> &'static [&'static str] {
    Protocol::parse(protocol).map_or_else(
        || {
            debug!(protocol, "unknown protocol, returning empty command list");
            NO_COMMANDS
        },
        Protocol::commands,
    )
}

/// Resolve the protocol a command belongs to.
///
/// Commands without a protocol tag belong to `"core"`. Total for any input;
/// the tag is reported as-is whether or not the registry knows it.
#[must_use]
pub fn resolve_protocol(command: &Command) -> &str {
    command.protocol_or_core()
}

/// Whether a protocol name has registered commands.
#[must_use]
pub fn is_known(protocol: &str) -> bool {
    Protocol::parse(protocol).is_some()
}

/// Every protocol in the registry, in declaration order.
pub fn known_protocols() -> impl Iterator<Item = Protocol> {
    Protocol::iter()
}

/// Reverse lookup: the protocol that registered a command name.
///
/// Unregistered names (core commands included) yield `None`.
#[must_use]
pub fn protocol_of(command_name: &str) -> Option<Protocol> {
    Protocol::iter().find(|protocol| protocol.commands().contains(&command_name))
}
