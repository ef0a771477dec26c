/// 编辑结果记录模块
///
/// 一次编辑过程的计数与变更日志以返回值的形式交给调用方，
/// 编辑器本身不保存累积状态。

use std::fmt;

use crate::axis::Axis;
use crate::change::ChangeValue;
use crate::field::Number;

/// 单个字段的变更
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    /// 行号（从 0 开始）
    pub line_index: usize,
    /// 是否属于首条记录（不做通道限制）
    pub in_header: bool,
    /// 修改前的值
    pub old_value: Number,
    /// 修改后的值
    pub new_value: Number,
    /// 重新组装后的整行文本（含行结束符）
    pub line: String,
}

/// 一次编辑的结果
///
/// 变更按访问顺序保存：先是首条记录，然后按步长依次向后。
#[derive(Debug, Clone, PartialEq)]
pub struct EditReport {
    axis: Axis,
    change: ChangeValue,
    changes: Vec<FieldChange>,
}

impl EditReport {
    pub fn new(axis: Axis, change: ChangeValue) -> Self {
        Self {
            axis,
            change,
            changes: Vec::new(),
        }
    }

    /// 添加一个变更
    pub fn add_change(&mut self, change: FieldChange) {
        self.changes.push(change);
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn change(&self) -> ChangeValue {
        self.change
    }

    /// 修改的字段数
    pub fn times_changed(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// 按访问顺序遍历变更
    pub fn iter(&self) -> impl Iterator<Item = &FieldChange> {
        self.changes.iter()
    }

    /// 修改后的行
    pub fn lines_changed(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().map(|change| change.line.as_str())
    }

    /// 修改后的值
    pub fn new_values(&self) -> Vec<Number> {
        self.changes.iter().map(|change| change.new_value).collect()
    }

    /// 生成变更摘要
    pub fn summary(&self, output: &std::path::Path) -> String {
        format!(
            "{} updated \"{}\" values saved to {}",
            self.times_changed(),
            self.axis,
            output.display()
        )
    }
}

impl fmt::Display for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} -> {}{}",
            self.line_index + 1,
            self.old_value,
            self.new_value,
            if self.in_header { " (header)" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn change(line_index: usize, old: i64, new: i64) -> FieldChange {
        FieldChange {
            line_index,
            in_header: line_index < 10,
            old_value: Number::Int(old),
            new_value: Number::Int(new),
            line: format!("\t(float){}\n", new),
        }
    }

    #[test]
    fn test_report_keeps_visit_order() {
        let mut report = EditReport::new(Axis::Y, ChangeValue::Delta(Number::Int(20)));
        assert!(report.is_empty());

        report.add_change(change(2, -20, 0));
        report.add_change(change(11, -50, -30));

        assert_eq!(report.times_changed(), 2);
        assert_eq!(report.new_values(), vec![Number::Int(0), Number::Int(-30)]);
        assert_eq!(
            report.lines_changed().collect::<Vec<_>>(),
            vec!["\t(float)0\n", "\t(float)-30\n"]
        );
    }

    #[test]
    fn test_summary_and_display() {
        let mut report = EditReport::new(Axis::Tu, ChangeValue::Replace(Number::Int(1)));
        report.add_change(change(4, 0, 1));

        assert_eq!(report.summary(Path::new("out.txt")), "1 updated \"tu\" values saved to out.txt");
        assert_eq!(report.iter().next().unwrap().to_string(), "line 5: 0 -> 1 (header)");
    }
}
