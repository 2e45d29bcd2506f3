//! 语法树的文本重建
//!
//! 前缀/中缀/索引表达式总是加括号，不依赖优先级表；
//! 块语句不输出花括号，因此 if / fn 的结果不是可重新解析的源码

use std::fmt::{self, Display, Formatter};

use super::node::*;

/// 以 `sep` 连接各项
fn write_joined<T: Display>(f: &mut Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

// ============ 语句 ============

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => stmt.fmt(f),
            Statement::Return(stmt) => stmt.fmt(f),
            Statement::Expression(stmt) => stmt.fmt(f),
            Statement::Block(stmt) => stmt.fmt(f),
        }
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        f.write_str(";")
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // 关键字后固定两个空格
        write!(f, "{}  ", self.token.literal)?;
        if let Some(value) = &self.return_value {
            write!(f, "{}", value)?;
        }
        f.write_str(";")
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Some(expr) => expr.fmt(f),
            None => Ok(()),
        }
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

// ============ 表达式 ============

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(expr) => expr.fmt(f),
            Expression::Integer(expr) => expr.fmt(f),
            Expression::String(expr) => expr.fmt(f),
            Expression::Boolean(expr) => expr.fmt(f),
            Expression::Prefix(expr) => expr.fmt(f),
            Expression::Infix(expr) => expr.fmt(f),
            Expression::If(expr) => expr.fmt(f),
            Expression::Function(expr) => expr.fmt(f),
            Expression::Call(expr) => expr.fmt(f),
            Expression::Array(expr) => expr.fmt(f),
            Expression::Index(expr) => expr.fmt(f),
            Expression::Hash(expr) => expr.fmt(f),
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // 保留源码写法（例如前导零），而不是重新格式化数值
        f.write_str(&self.token.literal)
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

impl Display for Boolean {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl Display for IfExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }
        Ok(())
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.token.literal)?;
        write_joined(f, &self.parameters, ", ")?;
        write!(f, "){}", self.body)
    }
}

impl Display for CallExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        write_joined(f, &self.arguments, ", ")?;
        f.write_str(")")
    }
}

impl Display for ArrayLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_joined(f, &self.elements, ", ")?;
        f.write_str("]")
    }
}

impl Display for IndexExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}

impl Display for HashLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", key, value)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, TokenKind};

    fn ident(name: &str) -> Identifier {
        Identifier::new(Token::new(TokenKind::Ident, name), name)
    }

    fn ident_expr(name: &str) -> Expression {
        ident(name).into()
    }

    fn int(value: i64) -> Expression {
        IntegerLiteral::new(Token::new(TokenKind::Int, value.to_string()), value).into()
    }

    fn boolean(value: bool) -> Expression {
        let kind = if value { TokenKind::True } else { TokenKind::False };
        Boolean::new(Token::new(kind, value.to_string()), value).into()
    }

    fn string(value: &str) -> Expression {
        StringLiteral::new(Token::new(TokenKind::String, value), value).into()
    }

    fn infix(left: Expression, op: &str, right: Expression) -> Expression {
        InfixExpression::new(Token::new(TokenKind::Plus, op), left, op, right).into()
    }

    fn expr_stmt(expr: Expression) -> Statement {
        ExpressionStatement::new(expr.token().clone(), Some(expr)).into()
    }

    fn block(statements: Vec<Statement>) -> BlockStatement {
        BlockStatement::new(Token::new(TokenKind::LBrace, "{"), statements)
    }

    #[test]
    fn test_let_statement() {
        let stmt = LetStatement::new(Token::new(TokenKind::Let, "let"), ident("x"), Some(int(5)));
        assert_eq!(stmt.render(), "let x = 5;");
    }

    #[test]
    fn test_let_statement_missing_value() {
        let stmt = LetStatement::new(Token::new(TokenKind::Let, "let"), ident("x"), None);
        assert_eq!(stmt.render(), "let x = ;");
    }

    #[test]
    fn test_return_statement() {
        let stmt = ReturnStatement::new(Token::new(TokenKind::Return, "return"), Some(boolean(true)));
        assert_eq!(stmt.render(), "return  true;");

        let empty = ReturnStatement::new(Token::new(TokenKind::Return, "return"), None);
        assert_eq!(empty.render(), "return  ;");
    }

    #[test]
    fn test_expression_statement() {
        assert_eq!(expr_stmt(ident_expr("foo")).render(), "foo");

        let empty = ExpressionStatement::new(Token::new(TokenKind::Illegal, "@"), None);
        assert_eq!(empty.render(), "");
    }

    #[test]
    fn test_block_has_no_braces() {
        let body = block(vec![expr_stmt(ident_expr("x")), expr_stmt(ident_expr("y"))]);
        assert_eq!(body.render(), "xy");
    }

    #[test]
    fn test_literals() {
        assert_eq!(ident_expr("foobar").render(), "foobar");
        assert_eq!(boolean(false).render(), "false");
        assert_eq!(string("hello world").render(), "hello world");

        // 整数按源码文本输出
        let padded: Expression = IntegerLiteral::new(Token::new(TokenKind::Int, "007"), 7).into();
        assert_eq!(padded.render(), "007");
    }

    #[test]
    fn test_prefix_expression() {
        let expr: Expression = PrefixExpression::new(Token::new(TokenKind::Minus, "-"), "-", int(5)).into();
        assert_eq!(expr.render(), "(-5)");

        let bang: Expression = PrefixExpression::new(Token::new(TokenKind::Bang, "!"), "!", boolean(true)).into();
        assert_eq!(bang.render(), "(!true)");
    }

    #[test]
    fn test_infix_expression() {
        assert_eq!(infix(int(1), "+", int(2)).render(), "(1 + 2)");
        assert_eq!(infix(infix(int(1), "+", int(2)), "+", int(3)).render(), "((1 + 2) + 3)");
        assert_eq!(
            infix(int(1), "+", infix(int(2), "*", int(3))).render(),
            "(1 + (2 * 3))"
        );
    }

    #[test]
    fn test_if_expression() {
        let condition = infix(ident_expr("x"), "<", ident_expr("y"));
        let expr: Expression = IfExpression::new(
            Token::new(TokenKind::If, "if"),
            condition.clone(),
            block(vec![expr_stmt(ident_expr("x"))]),
            None,
        )
        .into();
        // 不输出花括号，结果不是可重新解析的源码
        assert_eq!(expr.render(), "if(x < y) x");

        let with_else: Expression = IfExpression::new(
            Token::new(TokenKind::If, "if"),
            condition,
            block(vec![expr_stmt(ident_expr("x"))]),
            Some(block(vec![expr_stmt(ident_expr("y"))])),
        )
        .into();
        assert_eq!(with_else.render(), "if(x < y) xelse y");
    }

    #[test]
    fn test_function_literal() {
        let expr: Expression = FunctionLiteral::new(
            Token::new(TokenKind::Function, "fn"),
            vec![ident("x"), ident("y")],
            block(vec![expr_stmt(infix(ident_expr("x"), "+", ident_expr("y")))]),
        )
        .into();
        assert_eq!(expr.render(), "fn(x, y)(x + y)");

        let no_params: Expression = FunctionLiteral::new(
            Token::new(TokenKind::Function, "fn"),
            vec![],
            block(vec![]),
        )
        .into();
        assert_eq!(no_params.render(), "fn()");
    }

    #[test]
    fn test_call_expression() {
        let expr: Expression = CallExpression::new(
            Token::new(TokenKind::LParen, "("),
            ident_expr("add"),
            vec![int(1), infix(int(2), "*", int(3)), infix(int(4), "+", int(5))],
        )
        .into();
        assert_eq!(expr.render(), "add(1, (2 * 3), (4 + 5))");

        let no_args: Expression =
            CallExpression::new(Token::new(TokenKind::LParen, "("), ident_expr("f"), vec![]).into();
        assert_eq!(no_args.render(), "f()");
    }

    #[test]
    fn test_array_literal() {
        let expr: Expression = ArrayLiteral::new(Token::new(TokenKind::LBracket, "["), vec![int(1), int(2)]).into();
        assert_eq!(expr.render(), "[1, 2]");

        let empty: Expression = ArrayLiteral::new(Token::new(TokenKind::LBracket, "["), vec![]).into();
        assert_eq!(empty.render(), "[]");
    }

    #[test]
    fn test_index_expression() {
        let expr: Expression =
            IndexExpression::new(Token::new(TokenKind::LBracket, "["), ident_expr("arr"), int(0)).into();
        assert_eq!(expr.render(), "(arr[0])");
    }

    #[test]
    fn test_hash_literal_keeps_insertion_order() {
        let expr: Expression = HashLiteral::new(
            Token::new(TokenKind::LBrace, "{"),
            vec![
                (string("two"), int(2)),
                (string("one"), int(1)),
                (boolean(true), infix(int(1), "+", int(2))),
            ],
        )
        .into();
        assert_eq!(expr.render(), "{two:2, one:1, true:(1 + 2)}");

        let empty: Expression = HashLiteral::new(Token::new(TokenKind::LBrace, "{"), vec![]).into();
        assert_eq!(empty.render(), "{}");
    }

    #[test]
    fn test_program_render_concatenates() {
        let program = Program::new(vec![
            LetStatement::new(Token::new(TokenKind::Let, "let"), ident("myVar"), Some(ident_expr("anotherVar"))).into(),
            ReturnStatement::new(Token::new(TokenKind::Return, "return"), Some(int(10))).into(),
            expr_stmt(infix(ident_expr("a"), "*", ident_expr("b"))),
        ]);
        assert_eq!(program.render(), "let myVar = anotherVar;return  10;(a * b)");
        assert_eq!(program.to_string(), program.render());
    }

    #[test]
    fn test_concurrent_readers_render_the_same_text() {
        let program = Program::new(vec![
            LetStatement::new(
                Token::new(TokenKind::Let, "let"),
                ident("xs"),
                Some(ArrayLiteral::new(Token::new(TokenKind::LBracket, "["), vec![int(1), int(2), int(3)]).into()),
            )
            .into(),
            expr_stmt(IndexExpression::new(Token::new(TokenKind::LBracket, "["), ident_expr("xs"), int(1)).into()),
        ]);
        let expected = program.render();

        let results: Vec<String> = crossbeam::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|_| program.render())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        })
        .unwrap();

        assert_eq!(expected, "let xs = [1, 2, 3];(xs[1])");
        assert!(results.iter().all(|r| *r == expected));
    }
}
