use core::fmt;

use bytes::BytesMut;
use parking_lot::RwLock;

use crate::config::LineWriterConfig;
use crate::error::PartialWrite;
use crate::flush;
use crate::mode::FlushMode;
use crate::sink::WriteSink;

/// 按行边界缓冲字节并转发给 sink 的写入装饰器。
///
/// # 设计动机（Why）
/// - 日志、子进程输出等场景要求下游只看到完整行，而上游的写入粒度往往与行边界无关；
///   `LineWriter` 在两者之间积累字节，只把完整行交给 sink，半行留到下一次写入或显式 `flush_all`。
///
/// # 行为概览（How）
/// - `write`/`write_str`/`write_fmt`：独占锁内追加到缓冲尾部，再按 [`FlushMode`] 自动刷新一次；
/// - `flush`：手动触发与自动刷新相同的策略；
/// - `flush_all`：忽略行边界，把整个缓冲提交一次；
/// - `buffered_len`：共享锁读取当前未刷新字节数。
///
/// # 契约说明（What）
/// - 追加永远成功；写入类操作返回的计数恒为输入长度，错误来自随后的自动刷新；
/// - sink 确认接受的字节立即从缓冲头部移除，其余字节（包括末尾半行）保留以待下次刷新；
/// - 不重试、不吞错：每个 sink 错误都原样返回给触发它的调用方；
/// - sink 只在每次调用期间被借用，`LineWriter` 从不关闭或重置它。
///
/// # 并发（Trade-offs）
/// - 缓冲与 sink 由同一把 `parking_lot::RwLock` 保护：写入的“追加 + 刷新”是一个原子单元，
///   其他写入者不会插入到两者之间；
/// - sink 调用发生在锁内，慢 sink 会阻塞其他写入者，也会阻塞 `buffered_len`。
pub struct LineWriter<S> {
    mode: FlushMode,
    state: RwLock<State<S>>,
}

struct State<S> {
    buffer: BytesMut,
    sink: S,
}

impl<S: WriteSink> LineWriter<S> {
    /// 以给定模式包装 sink；不做任何 I/O。
    pub fn new(mode: FlushMode, sink: S) -> Self {
        Self::with_config(LineWriterConfig::new(mode), sink)
    }

    /// 按配置构造，缓冲预分配 `initial_capacity` 字节。
    pub fn with_config(config: LineWriterConfig, sink: S) -> Self {
        Self {
            mode: config.mode(),
            state: RwLock::new(State {
                buffer: BytesMut::with_capacity(config.initial_capacity()),
                sink,
            }),
        }
    }

    /// 构造时确定的刷新策略。
    pub fn mode(&self) -> FlushMode {
        self.mode
    }

    /// 当前尚未交给 sink 的字节数。
    pub fn buffered_len(&self) -> usize {
        self.state.read().buffer.len()
    }

    /// 缓冲是否为空。
    pub fn is_empty(&self) -> bool {
        self.buffered_len() == 0
    }

    /// 不论行是否完整，把整个缓冲提交给 sink 一次。
    ///
    /// 返回从缓冲头部移除的字节数；缓冲为空时返回 `Ok(0)` 且不调用 sink。
    pub fn flush_all(&self) -> Result<usize, PartialWrite<S::Error>> {
        let mut state = self.state.write();
        let State { buffer, sink } = &mut *state;
        flush::flush_all(buffer, sink)
    }

    /// 按构造时的模式刷新缓冲中的完整行，返回移除的字节数。
    pub fn flush(&self) -> Result<usize, PartialWrite<S::Error>> {
        let mut state = self.state.write();
        self.flush_locked(&mut state)
    }

    /// 追加字节并自动刷新。
    ///
    /// 成功时返回 `data.len()`；自动刷新失败时返回的 [`PartialWrite::written`] 同样是 `data.len()`，
    /// 已追加的数据仍在缓冲中，可通过后续 `flush`/`flush_all` 重新投递。
    pub fn write(&self, data: &[u8]) -> Result<usize, PartialWrite<S::Error>> {
        let appended = data.len();
        let mut state = self.state.write();
        state.buffer.extend_from_slice(data);
        match self.flush_locked(&mut state) {
            Ok(_) => Ok(appended),
            Err(partial) => Err(partial.with_written(appended)),
        }
    }

    /// 追加文本的 UTF-8 字节并自动刷新，契约同 [`LineWriter::write`]。
    pub fn write_str(&self, text: &str) -> Result<usize, PartialWrite<S::Error>> {
        self.write(text.as_bytes())
    }

    /// 格式化后追加并自动刷新，契约同 [`LineWriter::write_str`]。
    ///
    /// 与 `write!`/`writeln!` 宏配合使用：`writeln!(writer, "{value}")`。
    pub fn write_fmt(&self, args: fmt::Arguments<'_>) -> Result<usize, PartialWrite<S::Error>> {
        match args.as_str() {
            Some(text) => self.write_str(text),
            None => self.write_str(&args.to_string()),
        }
    }

    /// 拆解为 sink 与尚未刷新的字节。
    pub fn into_parts(self) -> (S, BytesMut) {
        let State { buffer, sink } = self.state.into_inner();
        (sink, buffer)
    }

    fn flush_locked(&self, state: &mut State<S>) -> Result<usize, PartialWrite<S::Error>> {
        let State { buffer, sink } = state;
        match self.mode {
            FlushMode::LinePerWrite => flush::flush_lines(buffer, sink),
            FlushMode::BatchedMultiline => flush::flush_batched(buffer, sink),
        }
    }
}

impl<S> fmt::Debug for LineWriter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("LineWriter");
        debug.field("mode", &self.mode);
        match self.state.try_read() {
            Some(state) => debug.field("buffered", &state.buffer.len()),
            None => debug.field("buffered", &format_args!("<locked>")),
        };
        debug.finish_non_exhaustive()
    }
}
