//! 抽象语法树（AST）节点定义
//!
//! 语句与表达式都是封闭的枚举；每个节点独占其子节点，
//! 并保存构造时的锚点 Token（仅用于诊断）

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// 所有节点共有的能力
pub trait Node: fmt::Display {
    /// 节点对应 Token 的字面文本（诊断用）
    fn token_literal(&self) -> Cow<'_, str>;

    /// 节点的规范文本重建（调试/展示用，不保证可重新解析）
    fn render(&self) -> String {
        self.to_string()
    }
}

/// 程序：语法树的根，按顺序持有顶层语句
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// 追加一条顶层语句（供解析器逐步构建）
    pub fn push(&mut self, statement: impl Into<Statement>) {
        self.statements.push(statement.into());
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn token_literal(&self) -> Cow<'_, str> {
        self.statements
            .iter()
            .map(|stmt| stmt.token_literal())
            .collect::<String>()
            .into()
    }
}

// ============ 语句 ============

/// 语句节点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// let 语句
    Let(LetStatement),
    /// return 语句
    Return(ReturnStatement),
    /// 表达式语句
    Expression(ExpressionStatement),
    /// 块语句
    Block(BlockStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> Cow<'_, str> {
        let token = match self {
            Statement::Let(stmt) => &stmt.token,
            Statement::Return(stmt) => &stmt.token,
            Statement::Expression(stmt) => &stmt.token,
            Statement::Block(stmt) => &stmt.token,
        };
        Cow::Borrowed(token.literal.as_str())
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetStatement {
    /// let
    pub token: Token,
    /// 变量名
    pub name: Identifier,
    /// 初始值（构建中的树可能缺失）
    pub value: Option<Expression>,
}

impl LetStatement {
    pub fn new(token: Token, name: Identifier, value: Option<Expression>) -> Self {
        Self { token, name, value }
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatement {
    /// return
    pub token: Token,
    /// 返回值（构建中的树可能缺失）
    pub return_value: Option<Expression>,
}

impl ReturnStatement {
    pub fn new(token: Token, return_value: Option<Expression>) -> Self {
        Self {
            token,
            return_value,
        }
    }
}

/// 表达式语句
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    /// 表达式的第一个 Token
    pub token: Token,
    pub expression: Option<Expression>,
}

impl ExpressionStatement {
    pub fn new(token: Token, expression: Option<Expression>) -> Self {
        Self { token, expression }
    }
}

/// 块语句
///
/// 自身不带花括号，由使用方（if / fn）决定如何包裹
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStatement {
    /// {
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(token: Token, statements: Vec<Statement>) -> Self {
        Self { token, statements }
    }
}

// ============ 表达式 ============

/// 表达式节点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// 标识符
    Identifier(Identifier),
    /// 整数字面量
    Integer(IntegerLiteral),
    /// 字符串字面量
    String(StringLiteral),
    /// 布尔字面量
    Boolean(Boolean),
    /// 前缀表达式 `-x` `!x`
    Prefix(PrefixExpression),
    /// 中缀表达式 `a + b`
    Infix(InfixExpression),
    /// if 表达式
    If(IfExpression),
    /// 函数字面量
    Function(FunctionLiteral),
    /// 函数调用
    Call(CallExpression),
    /// 数组字面量
    Array(ArrayLiteral),
    /// 索引表达式 `a[i]`
    Index(IndexExpression),
    /// 哈希字面量
    Hash(HashLiteral),
}

impl Expression {
    /// 锚点 Token
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(expr) => &expr.token,
            Expression::Integer(expr) => &expr.token,
            Expression::String(expr) => &expr.token,
            Expression::Boolean(expr) => &expr.token,
            Expression::Prefix(expr) => &expr.token,
            Expression::Infix(expr) => &expr.token,
            Expression::If(expr) => &expr.token,
            Expression::Function(expr) => &expr.token,
            Expression::Call(expr) => &expr.token,
            Expression::Array(expr) => &expr.token,
            Expression::Index(expr) => &expr.token,
            Expression::Hash(expr) => &expr.token,
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.token().literal.as_str())
    }
}

/// 标识符
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token, value: impl Into<String>) -> Self {
        Self {
            token,
            value: value.into(),
        }
    }
}

/// 整数字面量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl IntegerLiteral {
    pub fn new(token: Token, value: i64) -> Self {
        Self { token, value }
    }
}

/// 字符串字面量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub token: Token,
    /// 去掉引号后的内容
    pub value: String,
}

impl StringLiteral {
    pub fn new(token: Token, value: impl Into<String>) -> Self {
        Self {
            token,
            value: value.into(),
        }
    }
}

/// 布尔字面量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boolean {
    pub token: Token,
    pub value: bool,
}

impl Boolean {
    pub fn new(token: Token, value: bool) -> Self {
        Self { token, value }
    }
}

/// 前缀表达式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixExpression {
    /// 前缀运算符 Token
    pub token: Token,
    /// 运算符
    pub operator: String,
    /// 右侧操作数
    pub right: Box<Expression>,
}

impl PrefixExpression {
    pub fn new(token: Token, operator: impl Into<String>, right: Expression) -> Self {
        Self {
            token,
            operator: operator.into(),
            right: Box::new(right),
        }
    }
}

/// 中缀表达式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfixExpression {
    /// 运算符 Token
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

impl InfixExpression {
    pub fn new(
        token: Token,
        left: Expression,
        operator: impl Into<String>,
        right: Expression,
    ) -> Self {
        Self {
            token,
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }
}

/// if 表达式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfExpression {
    /// if
    pub token: Token,
    /// 条件
    pub condition: Box<Expression>,
    /// 条件为真时执行的块
    pub consequence: BlockStatement,
    /// else 块
    pub alternative: Option<BlockStatement>,
}

impl IfExpression {
    pub fn new(
        token: Token,
        condition: Expression,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    ) -> Self {
        Self {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }
    }
}

/// 函数字面量 `fn(x, y) { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionLiteral {
    /// fn
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl FunctionLiteral {
    pub fn new(token: Token, parameters: Vec<Identifier>, body: BlockStatement) -> Self {
        Self {
            token,
            parameters,
            body,
        }
    }
}

/// 函数调用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    /// (
    pub token: Token,
    /// 被调用者：标识符或函数字面量
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl CallExpression {
    pub fn new(token: Token, function: Expression, arguments: Vec<Expression>) -> Self {
        Self {
            token,
            function: Box::new(function),
            arguments,
        }
    }
}

/// 数组字面量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayLiteral {
    /// [
    pub token: Token,
    pub elements: Vec<Expression>,
}

impl ArrayLiteral {
    pub fn new(token: Token, elements: Vec<Expression>) -> Self {
        Self { token, elements }
    }
}

/// 数组或哈希的下标访问
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpression {
    /// [
    pub token: Token,
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

impl IndexExpression {
    pub fn new(token: Token, left: Expression, index: Expression) -> Self {
        Self {
            token,
            left: Box::new(left),
            index: Box::new(index),
        }
    }
}

/// 哈希字面量
///
/// 键值对按插入顺序保存，渲染顺序与之一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashLiteral {
    /// {
    pub token: Token,
    pub pairs: Vec<(Expression, Expression)>,
}

impl HashLiteral {
    pub fn new(token: Token, pairs: Vec<(Expression, Expression)>) -> Self {
        Self { token, pairs }
    }
}

macro_rules! impl_node_from {
    ($enum:ident :: $variant:ident ( $node:ty )) => {
        impl From<$node> for $enum {
            fn from(node: $node) -> Self {
                $enum::$variant(node)
            }
        }
    };
}

impl_node_from!(Statement::Let(LetStatement));
impl_node_from!(Statement::Return(ReturnStatement));
impl_node_from!(Statement::Expression(ExpressionStatement));
impl_node_from!(Statement::Block(BlockStatement));

impl_node_from!(Expression::Identifier(Identifier));
impl_node_from!(Expression::Integer(IntegerLiteral));
impl_node_from!(Expression::String(StringLiteral));
impl_node_from!(Expression::Boolean(Boolean));
impl_node_from!(Expression::Prefix(PrefixExpression));
impl_node_from!(Expression::Infix(InfixExpression));
impl_node_from!(Expression::If(IfExpression));
impl_node_from!(Expression::Function(FunctionLiteral));
impl_node_from!(Expression::Call(CallExpression));
impl_node_from!(Expression::Array(ArrayLiteral));
impl_node_from!(Expression::Index(IndexExpression));
impl_node_from!(Expression::Hash(HashLiteral));

macro_rules! impl_token_literal {
    ($($node:ty),* $(,)?) => {
        $(
            impl Node for $node {
                fn token_literal(&self) -> Cow<'_, str> {
                    Cow::Borrowed(self.token.literal.as_str())
                }
            }
        )*
    };
}

impl_token_literal!(
    LetStatement,
    ReturnStatement,
    ExpressionStatement,
    BlockStatement,
    Identifier,
    IntegerLiteral,
    StringLiteral,
    Boolean,
    PrefixExpression,
    InfixExpression,
    IfExpression,
    FunctionLiteral,
    CallExpression,
    ArrayLiteral,
    IndexExpression,
    HashLiteral,
);
