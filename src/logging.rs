//! 日志工具模块
//!
//! 封装 flexi_logger 的初始化：日志输出到 stderr，不干扰 stdout 上的渲染结果

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// 初始化日志系统
///
/// `spec` 为 flexi_logger 规格字符串，例如 `warn` 或 `monkey_ast=debug`。
/// 返回的句柄需要保持存活直到程序退出
pub fn init(spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    let handle = Logger::try_with_str(spec)?.log_to_stderr().start()?;
    log::debug!("日志系统初始化完成: {}", spec);
    Ok(handle)
}
