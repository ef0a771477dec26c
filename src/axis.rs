use std::fmt;
use std::str::FromStr;

use crate::utils::GdbError;

/// 每条记录的行数（一个顶点 = 9 个字段）
pub const RECORD_SIZE: usize = 9;

/// 可编辑的轴/通道
///
/// 每条记录中字段的顺序固定为 x, y, z, tu, tv, r, g, b, a。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    /// 纹理坐标 U
    Tu,
    /// 纹理坐标 V
    Tv,
    R,
    G,
    B,
    /// 透明度
    A,
}

impl Axis {
    /// 全部轴，按记录内顺序排列
    pub const ALL: [Axis; RECORD_SIZE] = [
        Axis::X,
        Axis::Y,
        Axis::Z,
        Axis::Tu,
        Axis::Tv,
        Axis::R,
        Axis::G,
        Axis::B,
        Axis::A,
    ];

    /// 从名称获取轴（大小写不敏感）
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            "tu" => Some(Axis::Tu),
            "tv" => Some(Axis::Tv),
            "r" => Some(Axis::R),
            "g" => Some(Axis::G),
            "b" => Some(Axis::B),
            "a" => Some(Axis::A),
            _ => None,
        }
    }

    /// 获取轴名称（小写）
    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::Tu => "tu",
            Axis::Tv => "tv",
            Axis::R => "r",
            Axis::G => "g",
            Axis::B => "b",
            Axis::A => "a",
        }
    }

    /// 字段在记录内的位置（从 1 开始）
    pub fn offset(&self) -> usize {
        match self {
            Axis::X => 1,
            Axis::Y => 2,
            Axis::Z => 3,
            Axis::Tu => 4,
            Axis::Tv => 5,
            Axis::R => 6,
            Axis::G => 7,
            Axis::B => 8,
            Axis::A => 9,
        }
    }

    /// 是否为颜色/透明度通道（需要限制在 0..=255）
    pub fn is_channel(&self) -> bool {
        is_channel_offset(self.offset())
    }
}

/// 位置 6..=9 (r/g/b/a) 为颜色通道
pub fn is_channel_offset(offset: usize) -> bool {
    (6..=9).contains(&offset)
}

impl FromStr for Axis {
    type Err = GdbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Axis::from_name(s).ok_or_else(|| GdbError::InvalidAxis(s.to_string()))
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(Axis::from_name("y"), Some(Axis::Y));
        assert_eq!(Axis::from_name("TU"), Some(Axis::Tu));
        assert_eq!(Axis::from_name("Tv"), Some(Axis::Tv));
        assert_eq!(Axis::from_name("w"), None);
        assert_eq!(Axis::from_name(""), None);
    }

    #[test]
    fn test_offsets_follow_record_order() {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.offset(), i + 1);
            assert_eq!(Axis::from_name(axis.name()), Some(*axis));
        }
    }

    #[test]
    fn test_channels() {
        assert!(!Axis::X.is_channel());
        assert!(!Axis::Tv.is_channel());
        assert!(Axis::R.is_channel());
        assert!(Axis::A.is_channel());
    }

    #[test]
    fn test_invalid_axis_error() {
        let err = "q".parse::<Axis>().unwrap_err();
        assert!(matches!(err, GdbError::InvalidAxis(ref name) if name == "q"));
    }
}
