//! 国际化模块
//!
//! 提供命令行消息的多语言支持，目前支持英文和中文

pub mod messages;
pub mod en;
pub mod zh;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// 英文（默认）
    #[default]
    En,
    /// 中文
    Zh,
}

impl Locale {
    /// 根据命令行参数选择语言，无法识别时回退到英文
    pub fn from_name(name: &str) -> Self {
        match name {
            "zh" | "cn" | "chinese" => Locale::Zh,
            _ => Locale::En,
        }
    }
}

/// 获取指定语言的消息
pub fn get_message(key: &str, locale: Locale) -> &'static str {
    match locale {
        Locale::En => en::get(key),
        Locale::Zh => zh::get(key),
    }
}

/// 获取带参数的消息（使用 {} 占位符）
pub fn format_message(key: &str, locale: Locale, args: &[&str]) -> String {
    let mut msg = get_message(key, locale).to_string();
    let mut from = 0;
    for arg in args {
        match msg[from..].find("{}") {
            Some(pos) => {
                let pos = from + pos;
                msg.replace_range(pos..pos + 2, arg);
                from = pos + arg.len();
            }
            None => break,
        }
    }
    msg
}
