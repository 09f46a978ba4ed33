//! 集成测试共享的 sink 探针。
//!
//! # 设计动机（Why）
//! - 各测试都需要观察写入器对 sink 的调用次数、每次提交的字节，以及按脚本伪造 sink 的返回值；
//!   集中定义避免每个测试文件重复实现。
//!
//! # 行为描述（How）
//! - [`RecordingSink`] 内部使用 `Arc<parking_lot::Mutex<_>>`，克隆出的句柄共享同一份记录：
//!   一份交给 `LineWriter`，另一份留在测试中断言；
//! - 默认全部接受；通过 [`RecordingSink::respond_with`] 注入自定义返回值。
#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use spark_line_writer::{PartialWrite, WriteSink};
use thiserror::Error;

/// 测试中使用的 sink 错误。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{0}")]
pub struct SinkFailure(pub &'static str);

type Responder = Box<dyn FnMut(&[u8]) -> Result<usize, PartialWrite<SinkFailure>> + Send>;

#[derive(Default)]
struct Recording {
    calls: Vec<Vec<u8>>,
    accepted: Vec<u8>,
    responder: Option<Responder>,
}

/// 记录每次调用并可脚本化返回值的 sink。
#[derive(Clone, Default)]
pub struct RecordingSink {
    inner: Arc<Mutex<Recording>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换 sink 的返回值生成器；参数为本次提交的字节。
    pub fn respond_with<F>(&self, responder: F)
    where
        F: FnMut(&[u8]) -> Result<usize, PartialWrite<SinkFailure>> + Send + 'static,
    {
        self.inner.lock().responder = Some(Box::new(responder));
    }

    /// 恢复为全部接受。
    pub fn accept_all(&self) {
        self.inner.lock().responder = None;
    }

    /// 让 sink 始终返回 `(written, SinkFailure(message))`。
    pub fn fail_with(&self, written: usize, message: &'static str) {
        self.respond_with(move |_| Err(PartialWrite::new(written, SinkFailure(message))));
    }

    /// 每次调用提交的字节。
    pub fn calls(&self) -> Vec<Vec<u8>> {
        self.inner.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().calls.len()
    }

    /// 所有提交内容按顺序拼接（不论 sink 是否接受）。
    pub fn received(&self) -> Vec<u8> {
        self.inner.lock().calls.concat()
    }

    /// sink 实际确认接受的字节（按钳制后的计数截取）。
    pub fn accepted(&self) -> Vec<u8> {
        self.inner.lock().accepted.clone()
    }

    /// 清空调用记录，保留返回值生成器。
    pub fn reset(&self) {
        let mut recording = self.inner.lock();
        recording.calls.clear();
        recording.accepted.clear();
    }
}

impl WriteSink for RecordingSink {
    type Error = SinkFailure;

    fn write(&mut self, data: &[u8]) -> Result<usize, PartialWrite<Self::Error>> {
        let mut recording = self.inner.lock();
        recording.calls.push(data.to_vec());
        let outcome = match recording.responder.as_mut() {
            Some(responder) => responder(data),
            None => Ok(data.len()),
        };
        let reported = match &outcome {
            Ok(n) => *n,
            Err(partial) => partial.written(),
        };
        let kept = reported.min(data.len());
        recording.accepted.extend_from_slice(&data[..kept]);
        outcome
    }
}
