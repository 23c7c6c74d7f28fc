//! Property-based tests for the command registry.
//!
//! These verify the total-lookup invariants:
//! - Tagged commands always resolve to their tag
//! - Untagged commands always resolve to "core"
//! - Unrecognized protocols always yield an empty command list
//! - Neither operation can panic for any input

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use chainroute_core::{commands_for, resolve_protocol, Command, CORE_PROTOCOL};
use proptest::prelude::*;

// ═══════════════════════════════════════════════════════════════════════════
// PROPERTY TESTS - Protocol Resolution
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property: A command carrying a protocol tag resolves to exactly
    /// that tag, whatever it is
    #[test]
    fn prop_tagged_command_resolves_to_its_tag(name in ".*", protocol in ".*") {
        let command = Command::with_protocol(name, protocol.clone());
        prop_assert_eq!(resolve_protocol(&command), protocol.as_str());
    }

    /// Property: A command without a protocol tag always resolves to "core"
    #[test]
    fn prop_untagged_command_resolves_to_core(name in ".*") {
        let command = Command::new(name);
        prop_assert_eq!(resolve_protocol(&command), CORE_PROTOCOL);
    }

    /// Property: Resolution never panics, including for empty names
    #[test]
    fn prop_resolve_never_panics(name in "\\PC*", protocol in proptest::option::of("\\PC*")) {
        let command = Command { name, protocol };
        let _ = resolve_protocol(&command);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PROPERTY TESTS - Command Lookup
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property: Every string outside the two registered keys yields an
    /// empty command list
    #[test]
    fn prop_unknown_protocol_yields_empty(s in ".*") {
        prop_assume!(s != "uniswap-v4" && s != "aave-v3");
        prop_assert!(commands_for(&s).is_empty());
    }

    /// Property: Lookup never panics for arbitrary input
    #[test]
    fn prop_lookup_never_panics(s in "\\PC*") {
        let _ = commands_for(&s);
    }

    /// Property: Lookup is pure - repeated calls agree
    #[test]
    fn prop_lookup_is_deterministic(s in ".*") {
        let first = commands_for(&s);
        let second = commands_for(&s);
        prop_assert_eq!(first, second);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PROPERTY TESTS - Serde
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property: Serialization preserves the optional protocol field,
    /// absent or present
    #[test]
    fn prop_command_serde_preserves_tag(
        name in "[a-z0-9_]{1,32}",
        protocol in proptest::option::of("[a-z0-9-]{1,32}"),
    ) {
        let command = Command {
            name,
            protocol,
        };
        let json = serde_json::to_string(&command).expect("serialize command");
        let back: Command = serde_json::from_str(&json).expect("deserialize command");
        prop_assert_eq!(back, command);
    }
}
