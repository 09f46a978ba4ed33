//! 行缓冲写入器的构造参数。
//!
//! # 契约（What）
//! - `mode`：自动刷新策略，默认 [`FlushMode::LinePerWrite`]；
//! - `initial_capacity`：缓冲预分配字节数，默认 0，即首次写入时再按需增长；
//! - 启用 `serde` 特性后，两者均可从配置文件反序列化，缺省字段回落到默认值。

use crate::mode::FlushMode;

/// [`LineWriter`](crate::LineWriter) 的配置。
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct LineWriterConfig {
    mode: FlushMode,
    initial_capacity: usize,
}

impl LineWriterConfig {
    /// 以指定模式构造，容量使用默认值。
    pub fn new(mode: FlushMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// 替换刷新策略。
    #[must_use]
    pub fn with_mode(mut self, mode: FlushMode) -> Self {
        self.mode = mode;
        self
    }

    /// 替换预分配容量。
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// 刷新策略。
    pub fn mode(&self) -> FlushMode {
        self.mode
    }

    /// 预分配容量。
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}

impl From<FlushMode> for LineWriterConfig {
    fn from(mode: FlushMode) -> Self {
        Self::new(mode)
    }
}
