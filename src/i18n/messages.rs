//! 消息键

pub const MSG_CLI_VERSION: &str = "cli.version";
pub const MSG_CLI_ERROR: &str = "cli.error";
pub const MSG_CLI_EMPTY_PROGRAM: &str = "cli.empty_program";
pub const MSG_CLI_STATS: &str = "cli.stats";
pub const MSG_CLI_KEYWORDS: &str = "cli.keywords";
pub const MSG_CLI_LOGGER_FAILED: &str = "cli.logger_failed";

/// 所有消息键
pub const ALL_KEYS: [&str; 6] = [
    MSG_CLI_VERSION,
    MSG_CLI_ERROR,
    MSG_CLI_EMPTY_PROGRAM,
    MSG_CLI_STATS,
    MSG_CLI_KEYWORDS,
    MSG_CLI_LOGGER_FAILED,
];
