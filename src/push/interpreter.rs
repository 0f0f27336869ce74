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

//! Result interpreter.
//!
//! Turns a raw [`Outcome`] into the typed result of its method. A Good status
//! with the wrong output shape is downgraded to a local Bad status so that
//! malformed data never reaches the caller:
//!
//! - wrong number of outputs: `BadInternalError`
//! - one output of the wrong kind: `BadInvalidArgument`
//!
//! ApplyChanges defines no outputs at all, so any output is a hard error.

use crate::push_core::errors::PushError;
use crate::push_core::models::{Method, Outcome, StatusCode, Variant, VariantKind};
use crate::push_core::records::{RejectedListResult, SigningRequestResult, UpdateCertificateResult};
use tracing::warn;

/// Take the single output of a Good outcome, or the status that replaces it.
fn single_output(method: Method, outcome: Outcome) -> Result<(StatusCode, Variant), StatusCode> {
    if !outcome.status.is_good() {
        return Err(outcome.status);
    }

    let count = outcome.output_arguments.len();
    let mut outputs = outcome.output_arguments.into_iter();
    match (outputs.next(), count) {
        (Some(value), 1) => Ok((outcome.status, value)),
        _ => {
            warn!(
                method = %method,
                count,
                "Good outcome with {} output argument(s), expected 1; reporting BadInternalError",
                count
            );
            Err(StatusCode::BAD_INTERNAL_ERROR)
        }
    }
}

fn wrong_kind(method: Method, expected: VariantKind, actual: &Variant) -> StatusCode {
    warn!(
        method = %method,
        expected = ?expected,
        actual = ?actual.kind(),
        "Good outcome with mistyped output; reporting BadInvalidArgument"
    );
    StatusCode::BAD_INVALID_ARGUMENT
}

pub fn signing_request(outcome: Outcome) -> SigningRequestResult {
    let method = Method::CreateSigningRequest;
    match single_output(method, outcome) {
        Ok((status, Variant::ByteString(csr))) => SigningRequestResult::success(status, csr),
        Ok((_, other)) => {
            SigningRequestResult::failure(wrong_kind(method, VariantKind::ByteString, &other))
        }
        Err(status) => SigningRequestResult::failure(status),
    }
}

pub fn rejected_list(outcome: Outcome) -> RejectedListResult {
    let method = Method::GetRejectedList;
    match single_output(method, outcome) {
        Ok((status, Variant::ByteStringArray(certificates))) => {
            RejectedListResult::success(status, certificates)
        }
        Ok((_, other)) => {
            RejectedListResult::failure(wrong_kind(method, VariantKind::ByteStringArray, &other))
        }
        Err(status) => RejectedListResult::failure(status),
    }
}

pub fn update_certificate(outcome: Outcome) -> UpdateCertificateResult {
    let method = Method::UpdateCertificate;
    match single_output(method, outcome) {
        Ok((status, Variant::Boolean(apply_change_required))) => {
            UpdateCertificateResult::success(status, apply_change_required)
        }
        Ok((_, other)) => {
            UpdateCertificateResult::failure(wrong_kind(method, VariantKind::Boolean, &other))
        }
        Err(status) => UpdateCertificateResult::failure(status),
    }
}

/// Raw status of ApplyChanges. Outputs of any kind, on any status, are a protocol violation.
pub fn apply_changes(outcome: Outcome) -> Result<StatusCode, PushError> {
    let count = outcome.output_arguments.len();
    if count != 0 {
        warn!(
            status = %outcome.status,
            count,
            "ApplyChanges returned output arguments"
        );
        return Err(PushError::UnexpectedOutputs {
            method: Method::ApplyChanges,
            count,
        });
    }
    Ok(outcome.status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_request_success() {
        let res = signing_request(Outcome::good(vec![Variant::ByteString(vec![0xAA, 0xBB])]));
        assert_eq!(res.status(), StatusCode::GOOD);
        assert_eq!(res.signing_request(), Some(&[0xAA, 0xBB][..]));
    }

    #[test]
    fn test_signing_request_failure_keeps_remote_status() {
        let res = signing_request(Outcome::bad(StatusCode::BAD_SECURITY_CHECKS_FAILED));
        assert_eq!(res.status(), StatusCode::BAD_SECURITY_CHECKS_FAILED);
        assert!(res.signing_request().is_none());
    }

    #[test]
    fn test_signing_request_shape_violations() {
        let res = signing_request(Outcome::good(vec![]));
        assert_eq!(res.status(), StatusCode::BAD_INTERNAL_ERROR);
        assert!(res.signing_request().is_none());

        let res = signing_request(Outcome::good(vec![Variant::String("csr".into())]));
        assert_eq!(res.status(), StatusCode::BAD_INVALID_ARGUMENT);
        assert!(res.signing_request().is_none());
    }

    #[test]
    fn test_rejected_list_success_including_empty() {
        let res = rejected_list(Outcome::good(vec![Variant::ByteStringArray(vec![
            vec![1],
            vec![2, 3],
        ])]));
        assert_eq!(res.status(), StatusCode::GOOD);
        assert_eq!(res.certificates().map(|c| c.len()), Some(2));

        let res = rejected_list(Outcome::good(vec![Variant::ByteStringArray(vec![])]));
        assert_eq!(res.status(), StatusCode::GOOD);
        assert_eq!(res.certificates(), Some(&[][..]));
    }

    #[test]
    fn test_rejected_list_wrong_kind_is_invalid_argument() {
        for value in [
            Variant::ByteString(vec![1]),
            Variant::Boolean(true),
            Variant::Null,
        ] {
            let res = rejected_list(Outcome::good(vec![value]));
            assert_eq!(res.status(), StatusCode::BAD_INVALID_ARGUMENT);
            assert!(res.certificates().is_none());
        }
    }

    #[test]
    fn test_update_certificate_arity() {
        let res = update_certificate(Outcome::good(vec![Variant::Boolean(true)]));
        assert_eq!(res.status(), StatusCode::GOOD);
        assert_eq!(res.apply_change_required(), Some(true));

        for outputs in [
            vec![],
            vec![Variant::Boolean(true), Variant::Boolean(false)],
        ] {
            let res = update_certificate(Outcome::good(outputs));
            assert_eq!(res.status(), StatusCode::BAD_INTERNAL_ERROR);
            assert!(res.apply_change_required().is_none());
        }
    }

    #[test]
    fn test_update_certificate_bad_status_ignores_outputs() {
        let res = update_certificate(Outcome::new(
            StatusCode::BAD_CERTIFICATE_INVALID,
            vec![Variant::Boolean(true)],
        ));
        assert_eq!(res.status(), StatusCode::BAD_CERTIFICATE_INVALID);
        assert!(res.apply_change_required().is_none());
    }

    #[test]
    fn test_apply_changes() {
        assert_eq!(apply_changes(Outcome::good(vec![])).unwrap(), StatusCode::GOOD);
        assert_eq!(
            apply_changes(Outcome::bad(StatusCode::BAD_NOTHING_TO_DO)).unwrap(),
            StatusCode::BAD_NOTHING_TO_DO
        );

        let err = apply_changes(Outcome::new(
            StatusCode::BAD_INVALID_STATE,
            vec![Variant::Boolean(false)],
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            PushError::UnexpectedOutputs {
                method: Method::ApplyChanges,
                count: 1
            }
        ));
    }
}
