//! Domain types for protocol command routing.

mod command;
mod protocol;

pub use command::Command;
pub use protocol::{Protocol, CORE_PROTOCOL};
