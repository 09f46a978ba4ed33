//! 刷新策略：作用于同一对 `(BytesMut, sink)` 的三个纯函数。
//!
//! # 设计概要（How）
//! - [`flush_all`]：不看行边界，把整个缓冲交给 sink 一次；
//! - [`flush_lines`]：逐行调用 sink，每次只提交一行（含分隔符）；
//! - [`flush_batched`]：找到最后一个分隔符，把之前的所有完整行合并为一次提交。
//!
//! # 契约（What）
//! - 每次 sink 调用的返回计数都先钳制到本次提交的长度，再用于推进缓冲头部；
//! - 缓冲只从头部消费，已确认的字节不会被再次提交；
//! - 锁由调用方持有，这里的函数不做任何同步。

use bytes::{Buf, BytesMut};
use tracing::{debug, trace};

use crate::error::PartialWrite;
use crate::sink::WriteSink;

/// 行分隔符。
const DELIMITER: u8 = b'\n';

/// 单次提交的结果：钳制后的接受字节数与可选错误。
struct Submission<E> {
    accepted: usize,
    error: Option<E>,
}

/// 调用一次 sink，并把返回计数钳制到 `chunk.len()`。
fn submit<S>(sink: &mut S, chunk: &[u8], strategy: &'static str) -> Submission<S::Error>
where
    S: WriteSink + ?Sized,
{
    let offered = chunk.len();
    let (reported, error) = match sink.write(chunk) {
        Ok(reported) => (reported, None),
        Err(partial) => {
            let (reported, error) = partial.into_parts();
            (reported, Some(error))
        }
    };
    let accepted = reported.min(offered);
    trace!(
        target: "spark_line_writer",
        strategy,
        offered,
        reported,
        accepted,
        "sink write returned"
    );
    if let Some(err) = &error {
        debug!(
            target: "spark_line_writer",
            strategy,
            accepted,
            error = %err,
            "sink reported a write failure"
        );
    }
    Submission { accepted, error }
}

fn conclude<E>(consumed: usize, error: Option<E>) -> Result<usize, PartialWrite<E>> {
    match error {
        None => Ok(consumed),
        Some(error) => Err(PartialWrite::new(consumed, error)),
    }
}

/// 把整个缓冲提交给 sink 一次，忽略行边界。
///
/// 缓冲为空时直接返回 `Ok(0)`，不调用 sink。
pub(crate) fn flush_all<S>(
    buffer: &mut BytesMut,
    sink: &mut S,
) -> Result<usize, PartialWrite<S::Error>>
where
    S: WriteSink + ?Sized,
{
    if buffer.is_empty() {
        return Ok(0);
    }
    let Submission { accepted, error } = submit(sink, &buffer[..], "all");
    buffer.advance(accepted);
    conclude(accepted, error)
}

/// 逐行提交：每个完整行单独调用一次 sink。
///
/// # 执行逻辑 (How)
/// 1. 从 `tail`（已确认的累计字节数）开始查找下一个分隔符，提交 `tail..=分隔符`；
/// 2. 接受数累加到 `tail`；若只接受了半行，下一轮从同一行的剩余部分继续；
/// 3. sink 报错则立即停止，剩余完整行留待下次刷新；
/// 4. sink 返回 0 且无错误时同样停止，不重试、不空转；
/// 5. 循环结束后一次性从缓冲头部移除 `tail` 字节。
pub(crate) fn flush_lines<S>(
    buffer: &mut BytesMut,
    sink: &mut S,
) -> Result<usize, PartialWrite<S::Error>>
where
    S: WriteSink + ?Sized,
{
    let mut tail = 0;
    let mut failure = None;
    while let Some(offset) = find_delimiter(&buffer[tail..]) {
        let end = tail + offset + 1;
        let Submission { accepted, error } = submit(sink, &buffer[tail..end], "line");
        tail += accepted;
        if error.is_some() {
            failure = error;
            break;
        }
        if accepted == 0 {
            trace!(
                target: "spark_line_writer",
                consumed = tail,
                "sink accepted nothing, stopping line flush"
            );
            break;
        }
    }
    if tail > 0 {
        buffer.advance(tail);
    }
    conclude(tail, failure)
}

/// 批量提交：最后一个分隔符之前的所有字节合并为一次 sink 调用。
///
/// 缓冲中没有分隔符时返回 `Ok(0)`，不调用 sink。
pub(crate) fn flush_batched<S>(
    buffer: &mut BytesMut,
    sink: &mut S,
) -> Result<usize, PartialWrite<S::Error>>
where
    S: WriteSink + ?Sized,
{
    let Some(last) = buffer.iter().rposition(|byte| *byte == DELIMITER) else {
        return Ok(0);
    };
    let Submission { accepted, error } = submit(sink, &buffer[..=last], "batched");
    buffer.advance(accepted);
    conclude(accepted, error)
}

fn find_delimiter(haystack: &[u8]) -> Option<usize> {
    haystack.iter().position(|byte| *byte == DELIMITER)
}
