//! Subcommand handlers. Each emits JSONL via `chainroute_core::output`.

pub mod lookup;
pub mod protocols;
pub mod resolve;
