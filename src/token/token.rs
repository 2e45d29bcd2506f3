//! Token 定义
//!
//! 词法分析器产生的标记类型，以及关键字查找

use std::fmt;

use serde::{Deserialize, Serialize};

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // ============ 特殊 ============
    /// 无法识别的字符
    Illegal,
    /// 输入结束
    Eof,

    // ============ 标识符和字面量 ============
    /// 标识符
    Ident,
    /// 整数字面量
    Int,
    /// 字符串字面量
    String,

    // ============ 运算符 ============
    /// =
    Assign,
    /// +
    Plus,
    /// -
    Minus,
    /// !
    Bang,
    /// *
    Asterisk,
    /// /
    Slash,
    /// <
    Lt,
    /// >
    Gt,
    /// ==
    Eq,
    /// !=
    NotEq,

    // ============ 分隔符 ============
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// :
    Colon,
    /// (
    LParen,
    /// )
    RParen,
    /// {
    LBrace,
    /// }
    RBrace,
    /// [
    LBracket,
    /// ]
    RBracket,

    // ============ 关键字 ============
    /// fn
    Function,
    /// let
    Let,
    /// true
    True,
    /// false
    False,
    /// if
    If,
    /// else
    Else,
    /// return
    Return,
}

/// 关键字表（保留字 -> Token 类型）
///
/// 进程级只读数据，可以在任意线程中无同步地读取
pub static KEYWORDS: [(&str, TokenKind); 7] = [
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

/// 按声明顺序遍历关键字表
pub fn keywords() -> impl Iterator<Item = (&'static str, TokenKind)> {
    KEYWORDS.iter().copied()
}

/// 识别关键字或返回标识符
///
/// 大小写敏感的精确匹配；不是保留字的文本一律归为 `Ident`
pub fn lookup_ident(ident: &str) -> TokenKind {
    keywords()
        .find(|(word, _)| *word == ident)
        .map(|(_, kind)| kind)
        .unwrap_or(TokenKind::Ident)
}

impl TokenKind {
    /// 类型名称：符号类 Token 为符号本身，其余为大写标签
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",

            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",

            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",

            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",

            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }

    /// 判断是否是关键字
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token 结构
///
/// 创建后不再修改；`literal` 是源码中匹配到的原始文本
/// （字符串字面量为去掉引号后的内容）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Token 类型
    pub kind: TokenKind,
    /// 原始文本
    pub literal: String,
}

impl Token {
    /// 创建新的 Token
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// 判断是否是指定类型
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// 判断是否是输入结束
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.literal)
    }
}
