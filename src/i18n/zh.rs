//! 中文消息

use super::messages::*;

/// 获取中文消息
pub fn get(key: &str) -> &'static str {
    match key {
        MSG_CLI_VERSION => "{} 版本 {}",
        MSG_CLI_ERROR => "错误: {}",
        MSG_CLI_EMPTY_PROGRAM => "（空程序）",
        MSG_CLI_STATS => "语句: {}，块: {}，表达式: {}，标识符: {}",
        MSG_CLI_KEYWORDS => "保留字:",
        MSG_CLI_LOGGER_FAILED => "日志系统初始化失败: {}",

        // 未知消息键
        _ => "未知消息键",
    }
}
