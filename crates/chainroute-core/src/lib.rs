//! # Chainroute Core
//!
//! Core protocol command registry - strictly functional Rust with zero unwraps.
//!
//! Routes DeFi commands to their owning protocols. Two surfaces make up the
//! entire public contract:
//!
//! - [`registry::commands_for`] - the ordered command list registered for a
//!   protocol name, empty for anything unrecognized
//! - [`registry::resolve_protocol`] - the protocol a command belongs to,
//!   falling back to `"core"` when the command carries no tag
//!
//! Both are total: defined for every input, never an error, never a panic.
//!
//! ## Error Handling
//!
//! The lookup path has no failure modes. The [`Error`] type exists for the
//! CLI boundary (input validation, output emission) only. All fallible
//! operations return `Result<T, Error>`. Use:
//! - `?` operator for propagation
//! - `map`, `and_then` combinators for transformation
//! - `match` / `map_or` / `unwrap_or_else` for defaults

pub mod domain;
mod error;
pub mod output;
pub mod registry;

pub use domain::{Command, Protocol, CORE_PROTOCOL};
pub use error::{Error, Result};
pub use output::{emit_stdout, LookupOutput, ProtocolEntry, ProtocolsOutput, ResolveOutput};
pub use registry::{commands_for, is_known, known_protocols, protocol_of, resolve_protocol};
