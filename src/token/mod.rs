//! 词法单元模块
//!
//! 词法分析器（外部）产生的 Token 以及关键字表

pub mod token;

pub use token::{keywords, lookup_ident, Token, TokenKind, KEYWORDS};
