// src/utils/logger.rs

use env_logger::{Builder, Env};
use log::Level;
use std::io::Write;

/// Symbol shown in front of every log line.
fn level_icon(level: Level) -> &'static str {
  match level {
    Level::Error => "🔴",
    Level::Warn => "🟠",
    Level::Info => "🔵",
    Level::Debug => "⚪",
    Level::Trace => "▫️",
  }
}

/// Installs the stderr logger. `RUST_LOG` wins over the `verbose` default.
pub fn init(verbose: bool) {
  let default_level = if verbose { "debug" } else { "info" };

  // Format: "🔴  File not found"
  let _ = Builder::from_env(Env::default().default_filter_or(default_level))
    .format(|buf, record| writeln!(buf, "{}  {}", level_icon(record.level()), record.args()))
    .try_init();
}
