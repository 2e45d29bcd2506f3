//! 语法树模块
//!
//! 节点定义、文本重建、访问者以及 JSON 交换格式

pub mod node;
pub mod display;
pub mod visitor;
pub mod json;

pub use node::*;
pub use visitor::{walk_block, walk_expression, walk_program, walk_statement, NodeCounter, Visitor};
pub use json::load_program;
