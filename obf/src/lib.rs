use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod error;
pub mod io;
pub mod opt;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Name of the tool as it appears in reports
pub const TOOL_NAME: &str = "OfflineBestFit";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
