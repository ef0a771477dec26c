use thiserror::Error;
use std::path::{Path, PathBuf};

/// 自定义错误类型
#[derive(Error, Debug)]
pub enum GdbError {
    #[error("Invalid axis: {0} (expected one of x, y, z, tu, tv, r, g, b, a)")]
    InvalidAxis(String),

    #[error("Invalid change value: {0}")]
    InvalidChangeValue(String),

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Malformed input: keyword \"{keyword}\" not found")]
    MalformedInput { keyword: String },

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// 检查行中是否包含完整的关键字 token
///
/// token 以非字母数字（及非下划线）字符分隔，大小写敏感，
/// 因此 `vertices(12)` 匹配 `vertices`，而 `vertices_old` 不匹配。
pub fn contains_keyword(line: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }

    line.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .any(|token| token == keyword)
}

/// 创建文件备份
pub fn create_backup(file_path: &Path) -> Result<PathBuf, GdbError> {
    if !file_path.exists() {
        return Err(GdbError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "原文件不存在"
        )));
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d-%H-%M-%S");
    let backup_path = file_path.with_extension(format!("{}.bak", timestamp));

    std::fs::copy(file_path, &backup_path)
        .map_err(GdbError::IoError)?;

    Ok(backup_path)
}
