/// 数值变更
///
/// 命令行传入的变更值在构造时解析一次：
/// - `20`、`-1.5`：在原值基础上相加
/// - `~20`：直接替换为该值

use std::fmt;
use std::str::FromStr;

use crate::axis::is_channel_offset;
use crate::field::{FieldType, Number};
use crate::utils::GdbError;

/// 替换模式前缀
pub const REPLACE_PREFIX: char = '~';

/// 颜色通道取值范围
pub const CHANNEL_MIN: i64 = 0;
pub const CHANNEL_MAX: i64 = 255;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeValue {
    /// 增量（负数即减少）
    Delta(Number),
    /// 覆盖原值
    Replace(Number),
}

impl ChangeValue {
    /// 计算字段的新值
    ///
    /// # 参数
    /// * `field_type` - 字段类型，`byte` 的结果总是截断为整数
    /// * `current` - 当前值
    /// * `position` - 字段在记录内的位置；`None` 表示不做通道限制（首条记录）
    pub fn apply(&self, field_type: FieldType, current: Number, position: Option<usize>) -> Number {
        let mut result = match *self {
            ChangeValue::Delta(delta) => current + delta,
            ChangeValue::Replace(value) => value,
        };

        if field_type == FieldType::Byte {
            result = result.truncate();
        }

        if position.is_some_and(is_channel_offset) {
            result = result.clamp(CHANNEL_MIN, CHANNEL_MAX);
        }

        result
    }
}

impl FromStr for ChangeValue {
    type Err = GdbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || GdbError::InvalidChangeValue(s.to_string());

        match text.strip_prefix(REPLACE_PREFIX) {
            Some(rest) => Number::parse(rest).map(ChangeValue::Replace).ok_or_else(invalid),
            None => Number::parse(text).map(ChangeValue::Delta).ok_or_else(invalid),
        }
    }
}

impl fmt::Display for ChangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeValue::Delta(n) => write!(f, "{}", n),
            ChangeValue::Replace(n) => write!(f, "{}{}", REPLACE_PREFIX, n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_change_values() {
        assert_eq!("20".parse::<ChangeValue>().unwrap(), ChangeValue::Delta(Number::Int(20)));
        assert_eq!("-1.5".parse::<ChangeValue>().unwrap(), ChangeValue::Delta(Number::Float(-1.5)));
        assert_eq!("~20".parse::<ChangeValue>().unwrap(), ChangeValue::Replace(Number::Int(20)));
        assert_eq!("~-0.5".parse::<ChangeValue>().unwrap(), ChangeValue::Replace(Number::Float(-0.5)));

        assert!("abc".parse::<ChangeValue>().is_err());
        assert!("~".parse::<ChangeValue>().is_err());
        assert!("".parse::<ChangeValue>().is_err());
    }

    #[test]
    fn test_additive() {
        let change = ChangeValue::Delta(Number::Int(20));
        assert_eq!(change.apply(FieldType::Float, Number::Int(-50), Some(2)), Number::Int(-30));
        assert_eq!(
            change.apply(FieldType::Float, Number::Float(1.25), Some(1)),
            Number::Float(21.25)
        );
    }

    #[test]
    fn test_replace_ignores_current_value() {
        let change = ChangeValue::Replace(Number::Int(20));
        assert_eq!(change.apply(FieldType::Float, Number::Int(-60), Some(2)), Number::Int(20));
        assert_eq!(change.apply(FieldType::Float, Number::Float(3.5), None), Number::Int(20));
    }

    #[test]
    fn test_byte_result_is_truncated() {
        let change = ChangeValue::Delta(Number::Float(2.9));
        assert_eq!(change.apply(FieldType::Byte, Number::Int(10), Some(6)), Number::Int(12));
        assert_eq!(change.apply(FieldType::Float, Number::Int(10), Some(6)), Number::Float(12.9));
    }

    #[test]
    fn test_channel_clamping() {
        let up = ChangeValue::Delta(Number::Int(50));
        let down = ChangeValue::Delta(Number::Int(-50));

        assert_eq!(up.apply(FieldType::Byte, Number::Int(250), Some(6)), Number::Int(255));
        assert_eq!(down.apply(FieldType::Byte, Number::Int(10), Some(7)), Number::Int(0));

        // 替换模式同样限制
        let replace = ChangeValue::Replace(Number::Int(400));
        assert_eq!(replace.apply(FieldType::Byte, Number::Int(0), Some(9)), Number::Int(255));
    }

    #[test]
    fn test_no_clamping_outside_channels() {
        let up = ChangeValue::Delta(Number::Int(50));

        assert_eq!(up.apply(FieldType::Float, Number::Int(250), Some(1)), Number::Int(300));
        assert_eq!(up.apply(FieldType::Float, Number::Int(250), Some(5)), Number::Int(300));
        // 首条记录不传位置，颜色通道也不限制
        assert_eq!(up.apply(FieldType::Byte, Number::Int(250), None), Number::Int(300));
    }

    #[test]
    fn test_display() {
        assert_eq!(ChangeValue::Delta(Number::Int(-20)).to_string(), "-20");
        assert_eq!(ChangeValue::Replace(Number::Float(1.5)).to_string(), "~1.5");
    }
}
