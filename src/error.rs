//! 错误类型定义
//!
//! 语法树本身没有失败路径；这里只覆盖树文件的读取与解码

use std::path::PathBuf;

use thiserror::Error;

/// 工具层错误类型
#[derive(Error, Debug)]
pub enum AstError {
    #[error("无法读取文件 {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("语法树 JSON 无效: {0}")]
    Json(#[from] serde_json::Error),

    #[error("无效的文件扩展名: {}，应为 .{expected}", .path.display())]
    InvalidExtension { path: PathBuf, expected: &'static str },
}

/// 工具层结果类型
pub type Result<T> = std::result::Result<T, AstError>;
