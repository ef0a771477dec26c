/// GDB 编辑器模块
///
/// 在可编辑区域内按固定步长定位目标轴的字段并修改数值。

use std::path::Path;

use tracing::{debug, info};

use super::delta::{EditReport, FieldChange};
use crate::axis::{Axis, RECORD_SIZE};
use crate::change::ChangeValue;
use crate::config::EditorConfig;
use crate::document::{Document, EditableRegion};
use crate::field::Field;
use crate::io::{DefaultGdbReader, DefaultGdbWriter, GdbReader, GdbWriter};
use crate::utils::GdbError;

/// 首条记录占用的行数（第 0 行 + 9 个字段）
pub const HEADER_LINES: usize = 10;

/// 没有见过任何缩进时使用的默认缩进
const DEFAULT_INDENT: &str = "\t";

/// GDB 编辑器 - 持有文档并执行批量修改
///
/// # 使用示例
///
/// ```rust,ignore
/// let mut editor = GdbEditor::new(document, EditorConfig::default());
/// let report = editor.change_values(Axis::Y, ChangeValue::Delta(Number::Int(20)))?;
/// editor.save(&DefaultGdbWriter, Path::new("out.txt"))?;
/// ```
pub struct GdbEditor {
    document: Document,
    config: EditorConfig,
}

/// 记录最近一次见到的字段缩进
#[derive(Debug, Default)]
struct IndentTracker {
    last: Option<String>,
}

impl IndentTracker {
    fn resolve(&mut self, captured: &str) -> String {
        if !captured.is_empty() {
            self.last = Some(captured.to_string());
            return captured.to_string();
        }
        self.last.clone().unwrap_or_else(|| DEFAULT_INDENT.to_string())
    }
}

impl GdbEditor {
    /// 创建新的编辑器
    pub fn new(document: Document, config: EditorConfig) -> Self {
        Self { document, config }
    }

    /// 读取文件并创建编辑器
    pub fn load(reader: &dyn GdbReader, path: &Path, config: EditorConfig) -> Result<Self, GdbError> {
        let document = reader.read(path)?;
        Ok(Self::new(document, config))
    }

    /// 按配置中的编码选择读取器并读取文件
    pub fn open(path: &Path, config: EditorConfig) -> Result<Self, GdbError> {
        let reader = match &config.encoding {
            Some(label) => DefaultGdbReader::with_encoding_label(label)?,
            None => DefaultGdbReader::new(),
        };
        Self::load(&reader, path, config)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// 按配置的关键字定位可编辑区域
    pub fn editable_region(&self) -> Result<EditableRegion, GdbError> {
        self.document
            .locate_region(&self.config.start_keyword, &self.config.end_keyword)
    }

    /// 修改指定轴的全部字段（仅修改内存状态）
    ///
    /// 首条记录（第 1..=9 行）只修改位于轴位置上的那一行，且不做通道限制；
    /// 其余记录从 `start + offset` 开始每 9 行访问一次，直到 `end`。
    /// 无法解析的行直接跳过，不计入修改数。
    ///
    /// # 返回
    /// 关键字缺失时返回 `MalformedInput`，此时文档未被修改
    pub fn change_values(&mut self, axis: Axis, change: ChangeValue) -> Result<EditReport, GdbError> {
        let region = self.editable_region()?;
        let offset = axis.offset();
        let mut report = EditReport::new(axis, change);
        let mut indent = IndentTracker::default();

        debug!("修改轴 {} (位置 {}), 变更 {}", axis, offset, change);

        // 首条记录
        self.edit_line(offset, change, None, &mut indent, &mut report);

        // 其余记录
        let mut index = region.start + offset;
        while index < region.end {
            // 首条记录已经处理过
            if index >= HEADER_LINES {
                self.edit_line(index, change, Some(offset), &mut indent, &mut report);
            }
            index += RECORD_SIZE;
        }

        info!("轴 {} 共修改 {} 个字段", axis, report.times_changed());
        Ok(report)
    }

    /// 修改单行；成功时记录到 report
    fn edit_line(
        &mut self,
        index: usize,
        change: ChangeValue,
        position: Option<usize>,
        indent: &mut IndentTracker,
        report: &mut EditReport,
    ) -> bool {
        let Some(line) = self.document.line(index) else {
            return false;
        };

        let Some(mut field) = Field::parse(line) else {
            debug!("跳过第 {} 行: 不是字段 {:?}", index, line.trim_end());
            return false;
        };

        let old_value = field.value;
        field.value = change.apply(field.field_type, old_value, position);
        field.indent = indent.resolve(&field.indent);

        let new_line = field.to_line();
        self.document.replace_line(index, new_line.clone());

        debug!("第 {} 行: {} -> {}", index, old_value, field.value);

        report.add_change(FieldChange {
            line_index: index,
            in_header: position.is_none(),
            old_value,
            new_value: field.value,
            line: new_line,
        });
        true
    }

    /// 保存到文件（需要显式调用）
    ///
    /// # 参数
    /// * `writer` - 文本写入器
    /// * `path` - 目标文件路径
    pub fn save(&self, writer: &dyn GdbWriter, path: &Path) -> Result<(), GdbError> {
        writer.write(&self.document, path)
    }

    /// 读取、修改并写出，一次完成
    ///
    /// 任一步骤失败时不会写出文件。
    pub fn bump_file(
        input: &Path,
        output: &Path,
        axis: Axis,
        change: ChangeValue,
        config: EditorConfig,
    ) -> Result<EditReport, GdbError> {
        let mut editor = Self::open(input, config)?;
        let report = editor.change_values(axis, change)?;
        editor.save(&DefaultGdbWriter, output)?;

        Ok(report)
    }
}
