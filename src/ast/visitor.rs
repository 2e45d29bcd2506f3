//! 只读访问者
//!
//! 基于枚举的访问者：每个钩子的默认实现都会继续遍历子节点（前序），
//! 实现者只需覆盖关心的钩子，并在需要时调用对应的 `walk_*` 函数

use super::node::*;

/// 语法树访问者 trait
pub trait Visitor {
    /// 访问程序 - 主入口点
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program);
    }

    /// 访问语句
    fn visit_statement(&mut self, statement: &Statement) {
        walk_statement(self, statement);
    }

    /// 访问块语句（包括 if / fn 内部的块）
    fn visit_block(&mut self, block: &BlockStatement) {
        walk_block(self, block);
    }

    /// 访问表达式
    fn visit_expression(&mut self, expression: &Expression) {
        walk_expression(self, expression);
    }

    /// 访问标识符（绑定名、形参以及标识符表达式）
    fn visit_identifier(&mut self, _identifier: &Identifier) {}
}

pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, program: &Program) {
    for stmt in &program.statements {
        visitor.visit_statement(stmt);
    }
}

pub fn walk_statement<V: Visitor + ?Sized>(visitor: &mut V, statement: &Statement) {
    match statement {
        Statement::Let(stmt) => {
            visitor.visit_identifier(&stmt.name);
            if let Some(value) = &stmt.value {
                visitor.visit_expression(value);
            }
        }
        Statement::Return(stmt) => {
            if let Some(value) = &stmt.return_value {
                visitor.visit_expression(value);
            }
        }
        Statement::Expression(stmt) => {
            if let Some(expr) = &stmt.expression {
                visitor.visit_expression(expr);
            }
        }
        Statement::Block(block) => visitor.visit_block(block),
    }
}

pub fn walk_block<V: Visitor + ?Sized>(visitor: &mut V, block: &BlockStatement) {
    for stmt in &block.statements {
        visitor.visit_statement(stmt);
    }
}

pub fn walk_expression<V: Visitor + ?Sized>(visitor: &mut V, expression: &Expression) {
    match expression {
        Expression::Identifier(ident) => visitor.visit_identifier(ident),
        Expression::Integer(_) | Expression::String(_) | Expression::Boolean(_) => {}
        Expression::Prefix(expr) => visitor.visit_expression(&expr.right),
        Expression::Infix(expr) => {
            visitor.visit_expression(&expr.left);
            visitor.visit_expression(&expr.right);
        }
        Expression::If(expr) => {
            visitor.visit_expression(&expr.condition);
            visitor.visit_block(&expr.consequence);
            if let Some(alternative) = &expr.alternative {
                visitor.visit_block(alternative);
            }
        }
        Expression::Function(expr) => {
            for param in &expr.parameters {
                visitor.visit_identifier(param);
            }
            visitor.visit_block(&expr.body);
        }
        Expression::Call(expr) => {
            visitor.visit_expression(&expr.function);
            for arg in &expr.arguments {
                visitor.visit_expression(arg);
            }
        }
        Expression::Array(expr) => {
            for element in &expr.elements {
                visitor.visit_expression(element);
            }
        }
        Expression::Index(expr) => {
            visitor.visit_expression(&expr.left);
            visitor.visit_expression(&expr.index);
        }
        Expression::Hash(expr) => {
            for (key, value) in &expr.pairs {
                visitor.visit_expression(key);
                visitor.visit_expression(value);
            }
        }
    }
}

/// 节点计数器
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeCounter {
    pub statements: usize,
    pub blocks: usize,
    pub expressions: usize,
    pub identifiers: usize,
}

impl NodeCounter {
    /// 统计整棵树
    pub fn count(program: &Program) -> Self {
        let mut counter = Self::default();
        counter.visit_program(program);
        counter
    }
}

impl Visitor for NodeCounter {
    fn visit_statement(&mut self, statement: &Statement) {
        self.statements += 1;
        walk_statement(self, statement);
    }

    fn visit_block(&mut self, block: &BlockStatement) {
        self.blocks += 1;
        walk_block(self, block);
    }

    fn visit_expression(&mut self, expression: &Expression) {
        self.expressions += 1;
        walk_expression(self, expression);
    }

    fn visit_identifier(&mut self, _identifier: &Identifier) {
        self.identifiers += 1;
    }
}
