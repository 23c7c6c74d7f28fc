//! Protocol identifiers for the command registry.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Fallback protocol for commands that carry no protocol tag.
pub const CORE_PROTOCOL: &str = "core";

/// A protocol known to the command registry.
///
/// Wire names are kebab-case and match the registry keys exactly. Note that
/// `"core"` is deliberately not a variant: it is the fallback for untagged
/// commands, not a registry entry, and looking it up yields an empty list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Protocol {
    /// Uniswap v4 integration.
    #[strum(serialize = "uniswap-v4")]
    #[serde(rename = "uniswap-v4")]
    UniswapV4,
    /// Aave v3 integration.
    #[strum(serialize = "aave-v3")]
    #[serde(rename = "aave-v3")]
    AaveV3,
}

impl Protocol {
    /// Parse a protocol name, returning `None` for anything the registry
    /// does not recognize.
    ///
    /// Unknown names are not an error; lookup stays total.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::from_str(name).ok()
    }

    /// The registry key for this protocol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UniswapV4 => "uniswap-v4",
            Self::AaveV3 => "aave-v3",
        }
    }
}
