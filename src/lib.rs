//! Monkey 语言的词法单元与抽象语法树
//!
//! - `token`：Token 类型与关键字表
//! - `ast`：语句/表达式节点、文本重建、访问者、JSON 交换格式
//!
//! 词法分析器、解析器与求值器不在本 crate 范围内：
//! 解析器负责构建节点，本 crate 只负责保存与渲染

pub mod ast;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod token;

pub use ast::{Expression, Node, Program, Statement};
pub use error::{AstError, Result};
pub use token::{lookup_ident, Token, TokenKind};
