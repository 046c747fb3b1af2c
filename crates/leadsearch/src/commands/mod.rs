//! Command handlers: bridge CLI args -> core operations -> output formatting.

pub mod config_cmd;
pub mod lookup;
pub mod stats;
pub mod util;
