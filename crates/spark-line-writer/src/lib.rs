#![warn(missing_docs)]

//! `spark-line-writer` 提供按行边界缓冲字节流的写入装饰器。
//!
//! # 模块定位（Why）
//! - 上游以任意粒度写入字节，下游（日志采集、终端、管道）只应看到完整的行；
//!   [`LineWriter`] 在两者之间积累数据，只把以 `\n` 结尾的完整行交给 [`WriteSink`]，
//!   未结束的半行保留到后续写入补齐，或由 [`LineWriter::flush_all`] 强制写出。
//!
//! # 设计概要（How）
//! - `writer` 模块实现 [`LineWriter`]：缓冲（`bytes::BytesMut`）与 sink 位于同一把
//!   `parking_lot::RwLock` 之后，每次写入在独占锁内完成“追加 + 自动刷新”；
//! - `flush` 模块承载两种自动刷新策略，由 [`FlushMode`] 在构造时选定：
//!   - [`FlushMode::LinePerWrite`]：每个完整行单独调用一次 sink；
//!   - [`FlushMode::BatchedMultiline`]：所有完整行合并为一次 sink 调用；
//! - `sink` 模块定义下游契约 [`WriteSink`]，以及 `&mut S`、`Vec<u8>`、`BytesMut`
//!   与 [`IoSink`]（适配 `std::io::Write`）等现成实现。
//!
//! # 契约说明（What）
//! - sink 报告的接受字节数一律钳制到本次提交的长度，再从缓冲头部移除，已确认的字节不会重复投递；
//! - sink 的错误不重试、不包装，连同已处理字节数以 [`PartialWrite`] 返回给调用方；
//! - 诊断信息通过 `tracing` 以 `spark_line_writer` 为 target 输出，本 crate 不安装 subscriber。
//!
//! # 示例
//!
//! ```
//! use spark_line_writer::{FlushMode, LineWriter};
//!
//! let mut out = Vec::<u8>::new();
//! {
//!     let writer = LineWriter::new(FlushMode::LinePerWrite, &mut out);
//!     writer.write_str("partial").unwrap();
//!     assert_eq!(writer.buffered_len(), 7);
//!     writer.write_str(" line\nnext").unwrap();
//!     assert_eq!(writer.buffered_len(), 4);
//! }
//! assert_eq!(out, b"partial line\n");
//! ```

mod config;
mod error;
mod flush;
mod mode;
mod sink;
mod writer;

pub use config::LineWriterConfig;
pub use error::{ModeParseError, PartialWrite};
pub use mode::FlushMode;
pub use sink::{IoSink, WriteSink};
pub use writer::LineWriter;
