//! 语法树的 JSON 交换格式
//!
//! 外部解析器构建好的树可以保存为 JSON，再由工具加载和渲染

use std::fs;
use std::path::Path;

use log::debug;

use super::node::Program;
use crate::config::TREE_FILE_EXTENSION;
use crate::error::{AstError, Result};

impl Program {
    /// 从 JSON 文本解码
    pub fn from_json(json: &str) -> Result<Self> {
        let program: Program = serde_json::from_str(json)?;
        debug!("解码语法树: {} 条顶层语句", program.len());
        Ok(program)
    }

    /// 编码为带缩进的 JSON 文本
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 加载语法树文件
///
/// 扩展名必须是 `.json`
pub fn load_program(path: &Path) -> Result<Program> {
    let has_extension = path
        .extension()
        .is_some_and(|ext| ext == TREE_FILE_EXTENSION);
    if !has_extension {
        return Err(AstError::InvalidExtension {
            path: path.to_path_buf(),
            expected: TREE_FILE_EXTENSION,
        });
    }

    debug!("读取语法树文件: {}", path.display());
    let json = fs::read_to_string(path).map_err(|source| AstError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Program::from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::token::{Token, TokenKind};

    fn sample_program() -> Program {
        let ident = |name: &str| Identifier::new(Token::new(TokenKind::Ident, name), name);
        let int = |value: i64| -> Expression {
            IntegerLiteral::new(Token::new(TokenKind::Int, value.to_string()), value).into()
        };
        let string = |value: &str| -> Expression {
            StringLiteral::new(Token::new(TokenKind::String, value), value).into()
        };
        let hash = HashLiteral::new(
            Token::new(TokenKind::LBrace, "{"),
            vec![(string("b"), int(2)), (string("a"), int(1))],
        );
        let index = IndexExpression::new(Token::new(TokenKind::LBracket, "["), ident("h").into(), int(0));
        Program::new(vec![
            LetStatement::new(Token::new(TokenKind::Let, "let"), ident("h"), Some(hash.into())).into(),
            ReturnStatement::new(Token::new(TokenKind::Return, "return"), Some(index.into())).into(),
            LetStatement::new(Token::new(TokenKind::Let, "let"), ident("y"), None).into(),
        ])
    }

    #[test]
    fn test_json_preserves_tree() {
        let program = sample_program();
        let json = program.to_json_pretty().unwrap();
        let decoded = Program::from_json(&json).unwrap();

        assert_eq!(decoded, program);
        assert_eq!(decoded.render(), "let h = {b:2, a:1};return  (h[0]);let y = ;");
    }

    #[test]
    fn test_invalid_json() {
        let err = Program::from_json("{\"statements\": [{\"Loop\": {}}]}").unwrap_err();
        assert!(matches!(err, AstError::Json(_)));
    }

    #[test]
    fn test_load_program() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        fs::write(&path, sample_program().to_json_pretty().unwrap()).unwrap();

        let program = load_program(&path).unwrap();
        assert_eq!(program, sample_program());
    }

    #[test]
    fn test_load_program_rejects_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.mk");
        fs::write(&path, "{}").unwrap();

        let err = load_program(&path).unwrap_err();
        assert!(matches!(err, AstError::InvalidExtension { expected: "json", .. }));
    }

    #[test]
    fn test_load_program_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_program(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, AstError::Io { .. }));
    }
}
