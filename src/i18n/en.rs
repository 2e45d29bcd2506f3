//! English messages

use super::messages::*;

/// Get English message
pub fn get(key: &str) -> &'static str {
    match key {
        MSG_CLI_VERSION => "{} version {}",
        MSG_CLI_ERROR => "Error: {}",
        MSG_CLI_EMPTY_PROGRAM => "(empty program)",
        MSG_CLI_STATS => "statements: {}, blocks: {}, expressions: {}, identifiers: {}",
        MSG_CLI_KEYWORDS => "Reserved words:",
        MSG_CLI_LOGGER_FAILED => "Failed to initialize logging: {}",

        // Unknown message key
        _ => "Unknown message key",
    }
}
