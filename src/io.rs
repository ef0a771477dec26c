/// IO 抽象层模块
///
/// 该模块提供了 GDB 文本读写的抽象接口，遵循依赖倒置原则。
/// 支持依赖注入、测试 mock 和替换 IO 实现（如内存 IO）。
///
/// # 架构设计
///
/// - **traits**: 定义 Reader/Writer trait 接口
/// - **text_io**: 基于文件系统的默认实现（含编码检测）
///
/// # 使用示例
///
/// ```rust,ignore
/// use gdbump::io::{DefaultGdbReader, GdbReader};
///
/// let reader = DefaultGdbReader::new();
/// let document = reader.read(Path::new("y-axis.txt"))?;
/// ```
pub mod traits;
pub mod text_io;

// === 导出 trait 定义 ===
pub use traits::{GdbReader, GdbWriter};

// === 导出默认实现 ===
pub use text_io::{DefaultGdbReader, DefaultGdbWriter};
