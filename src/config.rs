//! 配置常量模块
//!
//! 所有可配置的常量都在这里定义，便于后期修改

/// 语言名称
pub const LANG_NAME: &str = "Monkey";

/// 语法树文件扩展名
pub const TREE_FILE_EXTENSION: &str = "json";

/// 默认日志级别（flexi_logger 规格字符串）
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
