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

//! Method dispatcher.
//!
//! Hands a built invocation to the session and awaits the outcome. No retries,
//! no timers and no inspection of the arguments happen here.

use crate::push::builder;
use crate::push_core::errors::PushError;
use crate::push_core::models::{Invocation, Outcome};
use crate::push_core::traits::{MethodCall, Session};
use tracing::{debug, error};

/// Submit one invocation. Session failures propagate as `PushError::Session`.
pub async fn submit<S>(session: &S, invocation: Invocation) -> Result<Outcome, PushError>
where
    S: Session + ?Sized,
{
    let method = invocation.method();
    debug!(
        method = %method,
        object = %invocation.object_id(),
        arguments = invocation.input_arguments().len(),
        "Submitting method call"
    );

    let outcome = session.invoke(invocation).await.map_err(|e| {
        error!(method = %method, "Session call failed: {}", e);
        e
    })?;

    debug!(
        method = %method,
        status = %outcome.status,
        outputs = outcome.output_arguments.len(),
        "Method call completed"
    );
    Ok(outcome)
}

/// Build, submit and interpret a typed request.
pub async fn call<S, C>(session: &S, request: C) -> Result<C::Output, PushError>
where
    S: Session + ?Sized,
    C: MethodCall,
{
    let outcome = submit(session, builder::build(request)).await?;
    C::interpret(outcome)
}
