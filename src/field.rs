use std::fmt;
use std::ops::Add;

use once_cell::sync::Lazy;
use regex::Regex;

/// 类型标记（不要求带括号，与原始文本的子串匹配一致）
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"float|byte").unwrap());

/// 行尾注释
static COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"//.*").unwrap());

/// 字段类型标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Float,
    Byte,
}

impl FieldType {
    /// 从关键字获取字段类型
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "float" => Some(FieldType::Float),
            "byte" => Some(FieldType::Byte),
            _ => None,
        }
    }

    /// 获取关键字
    pub fn keyword(&self) -> &'static str {
        match self {
            FieldType::Float => "float",
            FieldType::Byte => "byte",
        }
    }

    /// 获取带括号的标记文本，如 `(float)`
    pub fn tag(&self) -> &'static str {
        match self {
            FieldType::Float => "(float)",
            FieldType::Byte => "(byte)",
        }
    }
}

/// 字段数值
///
/// 整数与浮点数分开保存，以便写回时保持原有的书写形式。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// 解析数值文本：包含 `.` 时按浮点数解析，否则按整数解析
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.contains('.') {
            text.parse::<f64>().ok().map(Number::Float)
        } else {
            text.parse::<i64>().ok().map(Number::Int)
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// 向零截断为整数
    pub fn truncate(self) -> Number {
        match self {
            Number::Int(v) => Number::Int(v),
            Number::Float(v) => Number::Int(v.trunc() as i64),
        }
    }

    /// 限制在闭区间内，保持数值类型不变
    pub fn clamp(self, min: i64, max: i64) -> Number {
        match self {
            Number::Int(v) => Number::Int(v.clamp(min, max)),
            Number::Float(v) => Number::Float(v.clamp(min as f64, max as f64)),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            // 不使用指数形式，且总带有小数部分（如 `2.0`），否则下次读取会被当成非字段
            Number::Float(v) => {
                let text = v.to_string();
                if v.is_finite() && !text.contains('.') {
                    write!(f, "{}.0", text)
                } else {
                    f.write_str(&text)
                }
            }
        }
    }
}

/// 相加；只要有一方是浮点数，结果即为浮点数
impl Add for Number {
    type Output = Number;

    fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a.saturating_add(b)),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// 解析后的字段行
///
/// 一行形如 `\t(float)-20 // y`，拆分为缩进、类型标记、数值和可选注释。
/// 未修改的部分在写回时原样保留。
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// 类型标记之前的空白
    pub indent: String,
    /// 类型标记
    pub field_type: FieldType,
    /// 当前数值
    pub value: Number,
    /// 数值与注释之间的空白
    pub comment_gap: String,
    /// 注释（包含 `//`）
    pub comment: Option<String>,
    /// 行结束符（`\n`、`\r\n` 或空）
    pub line_ending: String,
}

impl Field {
    /// 解析一行文本
    ///
    /// 不含 `float` / `byte` 的行，或去掉标记与注释后不是合法数值的行，返回 `None`。
    pub fn parse(line: &str) -> Option<Self> {
        let (body, line_ending) = split_line_ending(line);

        let tag_match = TAG_REGEX.find(body)?;
        let field_type = FieldType::from_keyword(tag_match.as_str())?;

        let indent_len = body.len() - body.trim_start().len();
        let indent = &body[..indent_len];

        // 去掉类型标记
        let stripped = body.trim().replace(field_type.tag(), "");

        // 分离注释
        let (value_text, comment) = match COMMENT_REGEX.find(&stripped) {
            Some(m) => (&stripped[..m.start()], Some(m.as_str().to_string())),
            None => (stripped.as_str(), None),
        };

        let value_trimmed = value_text.trim_end();
        let comment_gap = &value_text[value_trimmed.len()..];

        let mut value = Number::parse(value_trimmed)?;
        if field_type == FieldType::Byte {
            value = value.truncate();
        }

        Some(Field {
            indent: indent.to_string(),
            field_type,
            value,
            comment_gap: comment_gap.to_string(),
            comment,
            line_ending: line_ending.to_string(),
        })
    }

    /// 重新组装为一行文本
    pub fn to_line(&self) -> String {
        let mut line = format!("{}{}{}", self.indent, self.field_type.tag(), self.value);

        if let Some(comment) = &self.comment {
            if self.comment_gap.is_empty() {
                line.push(' ');
            } else {
                line.push_str(&self.comment_gap);
            }
            line.push_str(comment);
        }

        if self.line_ending.is_empty() {
            line.push('\n');
        } else {
            line.push_str(&self.line_ending);
        }

        line
    }
}

/// 拆分行内容与行结束符
fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
