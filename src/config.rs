use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::GdbError;

pub const DEFAULT_START_KEYWORD: &str = "vertices";
pub const DEFAULT_END_KEYWORD: &str = "polygons";

/// 编辑器配置
///
/// 可通过 `--config` 指定 JSON 文件，缺省字段使用默认值：
///
/// ```json
/// { "start_keyword": "vertices", "end_keyword": "polygons", "encoding": "windows-1252" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// 可编辑区域起始关键字
    pub start_keyword: String,
    /// 可编辑区域结束关键字
    pub end_keyword: String,
    /// 强制使用的文本编码；为空时自动检测
    pub encoding: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            start_keyword: DEFAULT_START_KEYWORD.to_string(),
            end_keyword: DEFAULT_END_KEYWORD.to_string(),
            encoding: None,
        }
    }
}

impl EditorConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file(path: &Path) -> Result<Self, GdbError> {
        let content = std::fs::read_to_string(path)?;
        let config: EditorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 检查关键字与编码是否可用
    pub fn validate(&self) -> Result<(), GdbError> {
        if self.start_keyword.trim().is_empty() || self.end_keyword.trim().is_empty() {
            return Err(GdbError::Config("关键字不能为空".to_string()));
        }

        if let Some(label) = &self.encoding {
            if encoding_rs::Encoding::for_label(label.as_bytes()).is_none() {
                return Err(GdbError::UnsupportedEncoding(label.clone()));
            }
        }

        Ok(())
    }
}
