//! Subcommand dispatch.

pub mod assets;
pub mod unused_code;
