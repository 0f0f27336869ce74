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

//! Session and method-call traits.
//!
//! `Session` is the only capability consumed from the outside world.
//! `MethodCall` ties one typed request record to its method, its positional
//! argument schema and its result interpretation.

use crate::push_core::errors::{PushError, SessionError};
use crate::push_core::models::{Invocation, Method, Outcome, Variant};
use async_trait::async_trait;
use std::sync::Arc;

/// Secured session able to call a method on the remote server.
///
/// Implementations own encryption, encoding, node resolution, cancellation and
/// timeouts. Whether concurrent calls may interleave is their contract too.
#[async_trait]
pub trait Session: Send + Sync {
    /// Perform one round trip and return the server's outcome.
    async fn invoke(&self, invocation: Invocation) -> Result<Outcome, SessionError>;
}

#[async_trait]
impl<S: Session + ?Sized> Session for Arc<S> {
    async fn invoke(&self, invocation: Invocation) -> Result<Outcome, SessionError> {
        (**self).invoke(invocation).await
    }
}

#[async_trait]
impl<S: Session + ?Sized> Session for &S {
    async fn invoke(&self, invocation: Invocation) -> Result<Outcome, SessionError> {
        (**self).invoke(invocation).await
    }
}

/// A typed request for one `ServerConfiguration` method.
pub trait MethodCall {
    /// Typed, caller-facing result record
    type Output;

    const METHOD: Method;

    /// Positional input arguments. Order is part of the remote contract.
    fn into_arguments(self) -> Vec<Variant>;

    /// Turn the server's outcome into the typed result.
    fn interpret(outcome: Outcome) -> Result<Self::Output, PushError>;
}
