//! Scripted model double for deterministic tests.
//!
//! Hosted completions are non-deterministic (temperature above zero) and
//! unbounded in latency, so tests drive the pipeline with this double
//! instead: replies come from a fixed script, instantly.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::InsightError;
use crate::LanguageModel;

/// [`LanguageModel`] implementation that replays a fixed script.
///
/// Replies are consumed in order; once the script runs out, the final reply
/// repeats (so one canned explanation can serve several calls). A failing
/// double errors on every call.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<String>>,
    last: Mutex<Option<String>>,
    fail: bool,
    calls: AtomicUsize,
}

impl ScriptedModel {
    /// Double that replays `replies` in order, then repeats the final one.
    pub fn with_replies(replies: Vec<String>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            last: Mutex::new(None),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Double that fails every call, for outage scenarios.
    pub fn failing() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            last: Mutex::new(None),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `complete` calls observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn complete(
        &self,
        _system: &str,
        _user: &str,
        _temperature: f32,
        _max_tokens: u32,
    ) -> Result<String, InsightError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(InsightError::Status {
                status: 503,
                body: "scripted outage".into(),
            });
        }

        let mut replies = self.replies.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(reply) = replies.pop_front() {
            let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
            *last = Some(reply.clone());
            return Ok(reply);
        }

        let last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        match last.as_ref() {
            Some(reply) => Ok(reply.clone()),
            None => Err(InsightError::Malformed("script is empty".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_in_order_then_repeat_final() {
        let model = ScriptedModel::with_replies(vec!["one".into(), "two".into()]);
        assert_eq!(model.complete("s", "u", 0.0, 10).await.unwrap(), "one");
        assert_eq!(model.complete("s", "u", 0.0, 10).await.unwrap(), "two");
        assert_eq!(model.complete("s", "u", 0.0, 10).await.unwrap(), "two");
        assert_eq!(model.calls(), 3);
    }

    #[tokio::test]
    async fn failing_double_always_errors() {
        let model = ScriptedModel::failing();
        assert!(model.complete("s", "u", 0.0, 10).await.is_err());
        assert!(model.complete("s", "u", 0.0, 10).await.is_err());
    }

    #[tokio::test]
    async fn empty_script_errors() {
        let model = ScriptedModel::with_replies(Vec::new());
        assert!(model.complete("s", "u", 0.0, 10).await.is_err());
    }
}
