// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Deadline decorator for sessions.
//!
//! The dispatcher never times out on its own; callers who want a bound wrap
//! their session in `TimeoutSession`. The inner call future is dropped on expiry.

use crate::push_core::errors::SessionError;
use crate::push_core::models::{Invocation, Outcome};
use crate::push_core::traits::Session;
use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

pub struct TimeoutSession<S> {
    inner: S,
    timeout: Duration,
}

impl<S: Session> TimeoutSession<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[async_trait]
impl<S: Session> Session for TimeoutSession<S> {
    async fn invoke(&self, invocation: Invocation) -> Result<Outcome, SessionError> {
        let method = invocation.method();
        match tokio::time::timeout(self.timeout, self.inner.invoke(invocation)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(method = %method, timeout_ms = self.timeout.as_millis() as u64, "Call timed out");
                Err(SessionError::Timeout(self.timeout.as_millis() as u64))
            }
        }
    }
}
