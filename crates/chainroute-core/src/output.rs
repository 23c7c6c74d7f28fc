//! Output envelopes for AI-first CLI design.
//!
//! All output is JSONL (JSON Lines) format for machine consumption.
//! Each line is a complete, parseable JSON object.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]

use std::io::Write;

use serde::Serialize;

use crate::error::{Error, Result};

/// Result of a command lookup for one protocol name.
#[derive(Debug, Clone, Serialize)]
pub struct LookupOutput {
    /// The protocol name as queried.
    pub protocol: String,
    /// Whether the registry recognizes the protocol.
    pub known: bool,
    /// Registered commands in dispatch order; empty when unrecognized.
    pub commands: Vec<&'static str>,
}

/// Result of resolving a command to its protocol.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveOutput {
    /// The command name as given.
    pub name: String,
    /// Resolved protocol; `"core"` when the command carried no tag.
    pub protocol: String,
}

/// One registry entry in a full listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolEntry {
    /// Registry key for the protocol.
    pub protocol: String,
    /// Registered commands in dispatch order.
    pub commands: Vec<&'static str>,
}

/// Full registry listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolsOutput {
    /// Number of protocols in the registry.
    pub count: usize,
    /// Every registry entry, in declaration order.
    pub protocols: Vec<ProtocolEntry>,
}

/// Serialize a value as one JSON line on stdout.
pub fn emit_stdout<T: Serialize>(value: &T) -> Result<()> {
    let line = serde_json::to_string(value)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}").map_err(|err| Error::Output(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_output_shape() {
        let output = LookupOutput {
            protocol: "uniswap-v4".to_string(),
            known: true,
            commands: vec!["v4_swap", "v4_add_liquidity"],
        };
        let json = serde_json::to_string(&output).expect("serialize");
        assert_eq!(
            json,
            r#"{"protocol":"uniswap-v4","known":true,"commands":["v4_swap","v4_add_liquidity"]}"#
        );
    }

    #[test]
    fn test_lookup_output_unknown_protocol() {
        let output = LookupOutput {
            protocol: "sushiswap".to_string(),
            known: false,
            commands: vec![],
        };
        let json = serde_json::to_string(&output).expect("serialize");
        assert_eq!(
            json,
            r#"{"protocol":"sushiswap","known":false,"commands":[]}"#
        );
    }

    #[test]
    fn test_resolve_output_shape() {
        let output = ResolveOutput {
            name: "deploy".to_string(),
            protocol: "core".to_string(),
        };
        let json = serde_json::to_string(&output).expect("serialize");
        assert_eq!(json, r#"{"name":"deploy","protocol":"core"}"#);
    }

    #[test]
    fn test_protocols_output_shape() {
        let output = ProtocolsOutput {
            count: 1,
            protocols: vec![ProtocolEntry {
                protocol: "aave-v3".to_string(),
                commands: vec!["v3_lend", "v3_borrow"],
            }],
        };
        let json = serde_json::to_string(&output).expect("serialize");
        assert_eq!(
            json,
            r#"{"count":1,"protocols":[{"protocol":"aave-v3","commands":["v3_lend","v3_borrow"]}]}"#
        );
    }
}
