//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 行缓冲写入器只有一种失败来源：下游 sink 的写入失败。
//!   错误值原样透传，本模块只负责把“失败前已被接受的字节数”与错误本身绑定在一起返回。
//!
//! ## 设计要求（What）
//! - [`PartialWrite`] 同时承担两个方向的契约：sink 用它向写入器报告“接受了 n 字节后失败”，
//!   写入器用它向调用方报告“本次操作处理了 n 字节后遇到 sink 错误”；
//! - 内部错误 `E` 不做包装或重新分类，可通过 [`PartialWrite::error`]、
//!   [`PartialWrite::into_error`] 或 `std::error::Error::source` 取回；
//! - [`ModeParseError`] 仅在解析配置字符串时出现，与写入路径无关。

use thiserror::Error;

/// 一次写入在 sink 报错时的结果：已处理字节数 + sink 的原始错误。
///
/// # 教案式说明
/// - **意图 (Why)**：尽力而为的写入契约允许“部分成功 + 失败”同时出现，调用方必须同时拿到两者，
///   才能判断还有多少数据需要重新投递。
/// - **契约 (What)**：
///   - `written` 的含义取决于产生它的操作：sink 返回时表示其接受的字节数（可能虚报，写入器会钳制）；
///     `flush`/`flush_all` 返回时表示本次从缓冲头部移除的字节数；
///     `write`/`write_str`/`write_fmt` 返回时表示追加进缓冲的字节数，恒等于输入长度；
///   - `written` 可以为 0，表示失败前没有任何字节被接受。
/// - **执行逻辑 (How)**：`thiserror` 派生 `Display` 与 `source`，`source` 指向 sink 错误本身。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("sink write failed after {written} byte(s) were accepted")]
pub struct PartialWrite<E> {
    written: usize,
    #[source]
    error: E,
}

impl<E> PartialWrite<E> {
    /// 以已处理字节数与原始错误构造结果。
    pub fn new(written: usize, error: E) -> Self {
        Self { written, error }
    }

    /// sink 一个字节也未接受时的快捷构造。
    pub fn rejected(error: E) -> Self {
        Self::new(0, error)
    }

    /// 失败前已处理的字节数。
    pub fn written(&self) -> usize {
        self.written
    }

    /// 借用 sink 的原始错误。
    pub fn error(&self) -> &E {
        &self.error
    }

    /// 取回 sink 的原始错误，丢弃字节计数。
    pub fn into_error(self) -> E {
        self.error
    }

    /// 拆分为 `(written, error)` 二元组。
    pub fn into_parts(self) -> (usize, E) {
        (self.written, self.error)
    }

    /// 保留错误、替换字节计数；写入路径用它把“刷新计数”换成“追加计数”。
    pub(crate) fn with_written(self, written: usize) -> Self {
        Self {
            written,
            error: self.error,
        }
    }
}

/// 解析 [`FlushMode`](crate::FlushMode) 字符串失败。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown flush mode `{value}`; expected `line-per-write` or `batched-multiline`")]
pub struct ModeParseError {
    value: String,
}

impl ModeParseError {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// 无法识别的原始输入。
    pub fn value(&self) -> &str {
        &self.value
    }
}
