//! `WriteSink`：行缓冲写入器的下游契约。
//!
//! # 契约定义（What）
//! - 单次 `write` 可以只接受部分字节，返回值必须如实报告接受数量；
//!   虚报（大于提供长度）会被写入器钳制，但实现者不应依赖这一点；
//! - 失败时可以携带非零的已接受字节数，语义为“这些字节在失败发生前已经落地”；
//! - 写入器只借用 sink 完成每次调用，从不关闭、重置或重新打开它。
//!
//! # 现成实现（How）
//! - `&mut S`：调用方保留所有权、仅借出 sink；
//! - `Vec<u8>`/`BytesMut`：内存收集器，永不失败；
//! - [`IoSink`]：把任意 [`std::io::Write`] 适配为 `WriteSink`。

use std::convert::Infallible;
use std::io;

use bytes::BytesMut;

use crate::error::PartialWrite;

/// 接受字节序列并报告接受数量的下游。
pub trait WriteSink {
    /// sink 的原始错误类型，写入器原样透传。
    type Error: std::error::Error + Send + Sync + 'static;

    /// 尝试写出 `data`。
    ///
    /// - `Ok(n)`：接受了 `n` 字节，没有错误；`n` 可以小于 `data.len()`，也可以为 0；
    /// - `Err(partial)`：接受了 `partial.written()` 字节后失败。
    fn write(&mut self, data: &[u8]) -> Result<usize, PartialWrite<Self::Error>>;
}

impl<S: WriteSink + ?Sized> WriteSink for &mut S {
    type Error = S::Error;

    fn write(&mut self, data: &[u8]) -> Result<usize, PartialWrite<Self::Error>> {
        (**self).write(data)
    }
}

impl<S: WriteSink + ?Sized> WriteSink for Box<S> {
    type Error = S::Error;

    fn write(&mut self, data: &[u8]) -> Result<usize, PartialWrite<Self::Error>> {
        (**self).write(data)
    }
}

impl WriteSink for Vec<u8> {
    type Error = Infallible;

    fn write(&mut self, data: &[u8]) -> Result<usize, PartialWrite<Self::Error>> {
        self.extend_from_slice(data);
        Ok(data.len())
    }
}

impl WriteSink for BytesMut {
    type Error = Infallible;

    fn write(&mut self, data: &[u8]) -> Result<usize, PartialWrite<Self::Error>> {
        self.extend_from_slice(data);
        Ok(data.len())
    }
}

/// 把 [`std::io::Write`] 适配为 [`WriteSink`]。
///
/// # 教案式说明
/// - **契约 (What)**：每次 `write` 只调用一次底层 `io::Write::write`，不使用 `write_all`，
///   也不重试 `Interrupted`；`Ok(n)` 映射为接受 `n` 字节，`Err(e)` 映射为 `(0, e)`。
/// - **风险 (Trade-offs)**：`io::Write` 无法表达“部分成功 + 失败”，因此适配后的错误计数恒为 0。
#[derive(Debug, Default)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    /// 包装一个 `io::Write`。
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// 借用底层 writer。
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// 可变借用底层 writer。
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// 取回底层 writer。
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> WriteSink for IoSink<W> {
    type Error = io::Error;

    fn write(&mut self, data: &[u8]) -> Result<usize, PartialWrite<Self::Error>> {
        self.inner.write(data).map_err(PartialWrite::rejected)
    }
}
