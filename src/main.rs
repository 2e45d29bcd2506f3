//! Monkey 语法树检查工具
//!
//! 主入口点：加载外部解析器产出的 JSON 语法树，输出渲染结果或统计信息

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::info;

use monkey_ast::ast::{load_program, NodeCounter};
use monkey_ast::config::{DEFAULT_LOG_LEVEL, LANG_NAME, VERSION};
use monkey_ast::i18n::{format_message, get_message, messages, Locale};
use monkey_ast::token::{keywords, lookup_ident};
use monkey_ast::{logging, Node, Result};

#[derive(Parser)]
#[command(name = "monkey-ast", version, about = "Inspect Monkey syntax trees")]
struct Cli {
    /// 消息语言（en / zh）
    #[arg(long, global = true, default_value = "en")]
    lang: String,

    /// 日志级别规格，例如 warn、debug、monkey_ast=trace
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 输出语法树的规范文本
    Render { file: PathBuf },
    /// 输出顶层语句的 Token 字面文本
    Literal { file: PathBuf },
    /// 统计节点数量
    Stats { file: PathBuf },
    /// 对单词做关键字分类
    Classify {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// 列出保留字
    Keywords,
    /// 显示版本信息
    Version,
}

/// 执行子命令
fn run(command: Command, locale: Locale) -> Result<()> {
    match command {
        Command::Render { file } => {
            let program = load_program(&file)?;
            info!("渲染 {} ({} 条语句)", file.display(), program.len());
            if program.is_empty() {
                eprintln!("{}", get_message(messages::MSG_CLI_EMPTY_PROGRAM, locale));
            }
            println!("{}", program.render());
        }
        Command::Literal { file } => {
            let program = load_program(&file)?;
            println!("{}", program.token_literal());
        }
        Command::Stats { file } => {
            let program = load_program(&file)?;
            let counts = NodeCounter::count(&program);
            let values = [
                counts.statements.to_string(),
                counts.blocks.to_string(),
                counts.expressions.to_string(),
                counts.identifiers.to_string(),
            ];
            let args: Vec<&str> = values.iter().map(String::as_str).collect();
            let msg = format_message(messages::MSG_CLI_STATS, locale, &args);
            println!("{}", msg);
        }
        Command::Classify { words } => {
            for word in &words {
                println!("{}\t{}", word, lookup_ident(word));
            }
        }
        Command::Keywords => {
            println!("{}", get_message(messages::MSG_CLI_KEYWORDS, locale));
            for (word, kind) in keywords() {
                println!("  {:<8}{}", word, kind);
            }
        }
        Command::Version => {
            let msg = format_message(messages::MSG_CLI_VERSION, locale, &[LANG_NAME, VERSION]);
            println!("{}", msg);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let locale = Locale::from_name(&cli.lang);

    let _logger = match logging::init(&cli.log_level) {
        Ok(handle) => handle,
        Err(e) => {
            let msg = format_message(messages::MSG_CLI_LOGGER_FAILED, locale, &[e.to_string().as_str()]);
            eprintln!("{}", msg);
            process::exit(2);
        }
    };

    if let Err(e) = run(cli.command, locale) {
        let msg = format_message(messages::MSG_CLI_ERROR, locale, &[e.to_string().as_str()]);
        eprintln!("{}", msg);
        process::exit(1);
    }
}
