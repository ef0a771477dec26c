/// 编辑器层模块
///
/// 该模块负责在内存中的文档上批量修改指定轴的数值。
/// 遵循"修改-保存分离"原则，所有修改操作仅在内存中进行，需要显式调用保存。
///
/// # 架构设计
///
/// - **gdb_editor**: 编辑器，定位可编辑区域并按步长修改字段
/// - **delta**: 编辑结果（修改计数与变更日志）
///
/// # 使用示例
///
/// ```rust,ignore
/// use gdbump::{Axis, ChangeValue, EditorConfig, GdbEditor};
/// use gdbump::io::{DefaultGdbReader, DefaultGdbWriter};
///
/// let mut editor = GdbEditor::load(&DefaultGdbReader::new(), Path::new("in.txt"), EditorConfig::default())?;
/// let report = editor.change_values(Axis::Y, "20".parse()?)?;
/// println!("修改了 {} 处", report.times_changed());
///
/// editor.save(&DefaultGdbWriter, Path::new("out.txt"))?;
/// ```
pub mod delta;
pub mod gdb_editor;

// === 导出公共接口 ===
pub use delta::{EditReport, FieldChange};
pub use gdb_editor::{GdbEditor, HEADER_LINES};
