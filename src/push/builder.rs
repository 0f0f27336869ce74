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

//! Invocation builder.
//!
//! Maps each typed request onto the positional argument schema of its method.
//! Pure and deterministic: no remote state is consulted.

use crate::push::interpreter;
use crate::push_core::errors::PushError;
use crate::push_core::models::{Invocation, Method, Outcome, StatusCode, Variant};
use crate::push_core::records::{
    ApplyChanges, CreateSigningRequest, GetRejectedList, RejectedListResult, SigningRequestResult,
    UpdateCertificate, UpdateCertificateResult,
};
use crate::push_core::traits::MethodCall;

/// Build the invocation for a typed request.
pub fn build<C: MethodCall>(call: C) -> Invocation {
    Invocation::new(C::METHOD, call.into_arguments())
}

impl MethodCall for CreateSigningRequest {
    type Output = SigningRequestResult;
    const METHOD: Method = Method::CreateSigningRequest;

    // [certificateGroupId, certificateTypeId, subjectName, regeneratePrivateKey, nonce]
    fn into_arguments(self) -> Vec<Variant> {
        vec![
            Variant::NodeId(self.certificate_group_id),
            Variant::NodeId(self.certificate_type_id),
            Variant::String(self.subject_name),
            Variant::Boolean(self.regenerate_private_key),
            Variant::from(self.nonce),
        ]
    }

    fn interpret(outcome: Outcome) -> Result<Self::Output, PushError> {
        Ok(interpreter::signing_request(outcome))
    }
}

impl MethodCall for GetRejectedList {
    type Output = RejectedListResult;
    const METHOD: Method = Method::GetRejectedList;

    fn into_arguments(self) -> Vec<Variant> {
        Vec::new()
    }

    fn interpret(outcome: Outcome) -> Result<Self::Output, PushError> {
        Ok(interpreter::rejected_list(outcome))
    }
}

impl MethodCall for UpdateCertificate {
    type Output = UpdateCertificateResult;
    const METHOD: Method = Method::UpdateCertificate;

    // [certificateGroupId, certificateTypeId, certificate, issuerCertificates,
    //  privateKeyFormat, privateKey]
    fn into_arguments(self) -> Vec<Variant> {
        let (key_format, key) = match self.private_key {
            Some(pk) => (
                Variant::String(pk.format.as_str().to_string()),
                Variant::ByteString(pk.data),
            ),
            None => (Variant::Null, Variant::Null),
        };

        vec![
            Variant::NodeId(self.certificate_group_id),
            Variant::NodeId(self.certificate_type_id),
            Variant::ByteString(self.certificate),
            Variant::ByteStringArray(self.issuer_certificates),
            key_format,
            key,
        ]
    }

    fn interpret(outcome: Outcome) -> Result<Self::Output, PushError> {
        Ok(interpreter::update_certificate(outcome))
    }
}

impl MethodCall for ApplyChanges {
    type Output = StatusCode;
    const METHOD: Method = Method::ApplyChanges;

    fn into_arguments(self) -> Vec<Variant> {
        Vec::new()
    }

    fn interpret(outcome: Outcome) -> Result<Self::Output, PushError> {
        interpreter::apply_changes(outcome)
    }
}
