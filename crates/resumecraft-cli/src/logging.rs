//! Logging setup
//!
//! Logs go to stderr, or to `log_file` when one is configured. `RUST_LOG`
//! wins over the `-v` count when set.

use std::fs::OpenOptions;
use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Filter directive for the given `-v` count
fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("resumecraft_core={},resumecraft_cli={}", level, level)
}

/// Initialize the global subscriber (ignored if one is already set)
pub fn init(log_file: Option<&Path>, verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    if let Some(path) = log_file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(file)
                    .try_init();
                return;
            }
            Err(e) => {
                eprintln!("Warning: Could not open log file {:?}: {}", path, e);
            }
        }
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(
            default_directive(0),
            "resumecraft_core=warn,resumecraft_cli=warn"
        );
        assert_eq!(
            default_directive(2),
            "resumecraft_core=debug,resumecraft_cli=debug"
        );
        assert!(default_directive(9).ends_with("=trace"));
    }
}
