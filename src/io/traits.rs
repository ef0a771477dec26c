/// IO 抽象层 - trait 定义
///
/// 该模块定义了 GDB 文本的读写接口，支持依赖注入和测试 mock。

use std::path::Path;
use crate::document::Document;
use crate::utils::GdbError;

/// GDB 文本读取 trait
///
/// # 职责
/// - 从文件系统读取反编译后的 GDB 文本并解码为 `Document`
/// - 不负责定位字段，仅负责 IO 与编码
pub trait GdbReader {
    /// 读取 GDB 文本
    ///
    /// # 参数
    /// * `path` - 文件路径
    ///
    /// # 返回
    /// 文件不存在时返回 `InputNotFound`
    fn read(&self, path: &Path) -> Result<Document, GdbError>;
}

/// GDB 文本写入 trait
///
/// # 职责
/// - 将文档按原编码写入文件系统
pub trait GdbWriter {
    /// 写入文档
    ///
    /// # 参数
    /// * `document` - 要写入的文档
    /// * `path` - 目标文件路径
    fn write(&self, document: &Document, path: &Path) -> Result<(), GdbError>;
}
