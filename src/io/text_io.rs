/// GDB 文本 IO 实现
///
/// 提供基于文件系统的默认读写实现
use std::path::Path;

use encoding_rs::Encoding;
use tracing::{debug, info};

use super::traits::{GdbReader, GdbWriter};
use crate::document::Document;
use crate::utils::GdbError;

// 自动检测时依次尝试的编码；windows-1252 可以解码任意字节，
// 其他单字节编码（windows-1250、windows-1251）只能通过配置中的 `encoding` 指定
const SUPPORTED_ENCODINGS: &[&str] = &["utf-8", "windows-1252"];

/// 默认的 GDB 文本读取器（基于 std::fs）
#[derive(Debug, Clone, Default)]
pub struct DefaultGdbReader {
    /// 强制编码；为 `None` 时自动检测
    encoding: Option<&'static Encoding>,
}

impl DefaultGdbReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用编码标签（如 "windows-1252"）创建读取器
    pub fn with_encoding_label(label: &str) -> Result<Self, GdbError> {
        let encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| GdbError::UnsupportedEncoding(label.to_string()))?;
        Ok(Self { encoding: Some(encoding) })
    }
}

impl GdbReader for DefaultGdbReader {
    fn read(&self, path: &Path) -> Result<Document, GdbError> {
        if !path.is_file() {
            return Err(GdbError::InputNotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path)?;
        let (text, encoding) = match self.encoding {
            Some(encoding) => {
                let (text, _) = encoding.decode_without_bom_handling(&bytes);
                (text.into_owned(), encoding)
            }
            None => decode_auto(&bytes),
        };

        let document = Document::with_encoding(&text, encoding);
        debug!(
            "读取 {:?}: {} 行, 编码 {}",
            path,
            document.line_count(),
            encoding.name()
        );

        Ok(document)
    }
}

/// 尝试多种编码解码
fn decode_auto(bytes: &[u8]) -> (String, &'static Encoding) {
    for encoding_name in SUPPORTED_ENCODINGS {
        if let Some(encoding) = Encoding::for_label(encoding_name.as_bytes()) {
            let (decoded, had_errors) = encoding.decode_without_bom_handling(bytes);
            if !had_errors {
                return (decoded.into_owned(), encoding);
            }
        }
    }

    // 回退到UTF-8，忽略错误
    (String::from_utf8_lossy(bytes).into_owned(), encoding_rs::UTF_8)
}

/// 默认的 GDB 文本写入器（基于 std::fs）
#[derive(Debug, Clone, Default)]
pub struct DefaultGdbWriter;

impl GdbWriter for DefaultGdbWriter {
    fn write(&self, document: &Document, path: &Path) -> Result<(), GdbError> {
        // 确保父目录存在
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, document.to_bytes())?;
        info!("已写入 {:?} ({} 行)", path, document.line_count());
        Ok(())
    }
}
