use core::fmt;
use core::str::FromStr;

use crate::error::ModeParseError;

/// 自动刷新策略，构造时确定，之后不可变。
///
/// - `LinePerWrite`：每一行完整数据单独调用一次 sink；
/// - `BatchedMultiline`：缓冲内所有完整行合并为一次 sink 调用，末尾的半行保留。
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FlushMode {
    /// 逐行写出。
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "line"))]
    LinePerWrite,
    /// 批量写出所有完整行。
    #[cfg_attr(feature = "serde", serde(alias = "batched", alias = "multiline"))]
    BatchedMultiline,
}

impl FlushMode {
    /// 规范名称，与 `Display` 及 serde 表示一致。
    pub const fn as_str(self) -> &'static str {
        match self {
            FlushMode::LinePerWrite => "line-per-write",
            FlushMode::BatchedMultiline => "batched-multiline",
        }
    }

    /// 是否为批量多行模式。
    pub const fn is_batched(self) -> bool {
        matches!(self, FlushMode::BatchedMultiline)
    }
}

impl fmt::Display for FlushMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlushMode {
    type Err = ModeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "line" | "line-per-write" => Ok(FlushMode::LinePerWrite),
            "batched" | "multiline" | "batched-multiline" => Ok(FlushMode::BatchedMultiline),
            _ => Err(ModeParseError::new(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names_and_aliases() {
        assert_eq!("line-per-write".parse(), Ok(FlushMode::LinePerWrite));
        assert_eq!(" Line ".parse(), Ok(FlushMode::LinePerWrite));
        assert_eq!("MULTILINE".parse(), Ok(FlushMode::BatchedMultiline));
        assert_eq!("batched".parse(), Ok(FlushMode::BatchedMultiline));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "crlf".parse::<FlushMode>().expect_err("未知模式应报错");
        assert_eq!(err.value(), "crlf");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in [FlushMode::LinePerWrite, FlushMode::BatchedMultiline] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }
}
