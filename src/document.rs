use encoding_rs::Encoding;
use tracing::debug;

use crate::utils::{contains_keyword, GdbError};

/// 反编译后的 GDB 文本
///
/// 按行保存，每行保留自身的行结束符，写回时直接拼接，
/// 因此未修改的行逐字节保持不变。编辑过程中行数不会改变。
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<String>,
    /// 读取时使用的编码，写回时沿用
    encoding: &'static Encoding,
}

/// 可编辑区域，左闭右开 `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditableRegion {
    pub start: usize,
    pub end: usize,
}

impl EditableRegion {
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl Document {
    /// 从文本创建文档（UTF-8）
    pub fn from_text(text: &str) -> Self {
        Self::with_encoding(text, encoding_rs::UTF_8)
    }

    /// 从文本创建文档，并记录原始编码
    pub fn with_encoding(text: &str, encoding: &'static Encoding) -> Self {
        let lines = text.split_inclusive('\n').map(str::to_string).collect();
        Self { lines, encoding }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// 替换一行；索引越界时返回 false
    pub fn replace_line(&mut self, index: usize, line: String) -> bool {
        match self.lines.get_mut(index) {
            Some(slot) => {
                *slot = line;
                true
            }
            None => false,
        }
    }

    /// 拼接为完整文本
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }

    /// 按文档原始编码编码为字节
    pub fn to_bytes(&self) -> Vec<u8> {
        let text = self.to_text();
        let (bytes, _, _) = self.encoding.encode(&text);
        bytes.into_owned()
    }

    /// 第一行包含该关键字的行号
    pub fn find_keyword(&self, keyword: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| contains_keyword(line, keyword))
    }

    /// 定位可编辑区域
    ///
    /// 两个关键字分别独立地从头扫描：
    /// 起始 = 起始关键字所在行 + 2，结束 = 结束关键字所在行 - 1。
    /// 任一关键字缺失时返回 `MalformedInput`。
    pub fn locate_region(&self, start_keyword: &str, end_keyword: &str) -> Result<EditableRegion, GdbError> {
        let start_line = self.find_keyword(start_keyword).ok_or_else(|| GdbError::MalformedInput {
            keyword: start_keyword.to_string(),
        })?;
        let end_line = self.find_keyword(end_keyword).ok_or_else(|| GdbError::MalformedInput {
            keyword: end_keyword.to_string(),
        })?;

        let region = EditableRegion {
            start: start_line + 2,
            end: end_line.saturating_sub(1),
        };

        debug!(
            "关键字 {:?} 位于第 {} 行, {:?} 位于第 {} 行, 可编辑区域 [{}, {})",
            start_keyword, start_line, end_keyword, end_line, region.start, region.end
        );

        Ok(region)
    }
}
