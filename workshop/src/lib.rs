use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod driver;
pub mod io;
pub mod notify;
pub mod session;
pub mod store;

/// Reference point for the elapsed time printed in log lines
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
