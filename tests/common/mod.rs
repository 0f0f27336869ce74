// Shared test helpers: an in-memory session that replays scripted replies.
#![allow(dead_code)]

use async_trait::async_trait;
use certpush::push_core::models::{Invocation, Outcome};
use certpush::{Session, SessionError};
use std::collections::VecDeque;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct ScriptedSession {
    replies: Mutex<VecDeque<Result<Outcome, SessionError>>>,
    calls: Mutex<Vec<Invocation>>,
}

impl ScriptedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying(replies: Vec<Result<Outcome, SessionError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_outcomes(outcomes: Vec<Outcome>) -> Self {
        Self::replying(outcomes.into_iter().map(Ok).collect())
    }

    pub async fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl Session for ScriptedSession {
    async fn invoke(&self, invocation: Invocation) -> Result<Outcome, SessionError> {
        self.calls.lock().await.push(invocation);
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(SessionError::Connection("no scripted reply left".into())))
    }
}
