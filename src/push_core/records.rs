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

//! Typed request and result records, one pair per method.
//!
//! Requests replace the positional argument arrays of the wire contract with
//! named fields. Results only carry typed fields when the server reported Good.

use crate::push_core::constants::{nodes, private_key_format};
use crate::push_core::errors::PushError;
use crate::push_core::models::{NodeId, StatusCode};
use crate::utils::thumbprint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Application certificate types with registered NodeIds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateType {
    RsaMin,
    RsaSha256,
}

impl CertificateType {
    pub fn node_id(self) -> NodeId {
        match self {
            CertificateType::RsaMin => nodes::RSA_MIN_APPLICATION_CERTIFICATE_TYPE,
            CertificateType::RsaSha256 => nodes::RSA_SHA256_APPLICATION_CERTIFICATE_TYPE,
        }
    }
}

impl FromStr for CertificateType {
    type Err = PushError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rsa_min" | "rsaminapplicationcertificatetype" => Ok(CertificateType::RsaMin),
            "rsa_sha256" | "rsasha256applicationcertificatetype" => {
                Ok(CertificateType::RsaSha256)
            }
            other => Err(PushError::Configuration(format!(
                "unknown certificate type '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrivateKeyFormat {
    Pem,
    Pfx,
}

impl PrivateKeyFormat {
    /// Wire string for the `privateKeyFormat` argument
    pub fn as_str(self) -> &'static str {
        match self {
            PrivateKeyFormat::Pem => private_key_format::PEM,
            PrivateKeyFormat::Pfx => private_key_format::PFX,
        }
    }
}

/// Private key and its encoding. Both travel together or not at all.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub format: PrivateKeyFormat,
    pub data: Vec<u8>,
}

impl PrivateKey {
    pub fn pem(data: Vec<u8>) -> Self {
        Self {
            format: PrivateKeyFormat::Pem,
            data,
        }
    }

    pub fn pfx(data: Vec<u8>) -> Self {
        Self {
            format: PrivateKeyFormat::Pfx,
            data,
        }
    }
}

// Key material never ends up in logs.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("format", &self.format)
            .field("data", &format_args!("<{} bytes>", self.data.len()))
            .finish()
    }
}

/// Input of `CreateSigningRequest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSigningRequest {
    pub certificate_group_id: NodeId,
    pub certificate_type_id: NodeId,
    pub subject_name: String,
    pub regenerate_private_key: bool,
    /// Additional entropy for key generation
    pub nonce: Option<Vec<u8>>,
}

impl CreateSigningRequest {
    pub fn new(
        certificate_group_id: NodeId,
        certificate_type_id: NodeId,
        subject_name: impl Into<String>,
    ) -> Self {
        Self {
            certificate_group_id,
            certificate_type_id,
            subject_name: subject_name.into(),
            regenerate_private_key: false,
            nonce: None,
        }
    }

    pub fn regenerate_private_key(mut self, regenerate: bool) -> Self {
        self.regenerate_private_key = regenerate;
        self
    }

    pub fn with_nonce(mut self, nonce: Vec<u8>) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

/// Input of `GetRejectedList` (no arguments)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetRejectedList;

/// Input of `UpdateCertificate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCertificate {
    pub certificate_group_id: NodeId,
    pub certificate_type_id: NodeId,
    pub certificate: Vec<u8>,
    pub issuer_certificates: Vec<Vec<u8>>,
    pub private_key: Option<PrivateKey>,
}

impl UpdateCertificate {
    pub fn new(
        certificate_group_id: NodeId,
        certificate_type_id: NodeId,
        certificate: Vec<u8>,
    ) -> Self {
        Self {
            certificate_group_id,
            certificate_type_id,
            certificate,
            issuer_certificates: Vec::new(),
            private_key: None,
        }
    }

    pub fn with_issuers(mut self, issuer_certificates: Vec<Vec<u8>>) -> Self {
        self.issuer_certificates = issuer_certificates;
        self
    }

    pub fn with_private_key(mut self, private_key: PrivateKey) -> Self {
        self.private_key = Some(private_key);
        self
    }
}

/// Input of `ApplyChanges` (no arguments)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyChanges;

/// Result of `CreateSigningRequest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequestResult {
    status: StatusCode,
    signing_request: Option<Vec<u8>>,
}

impl SigningRequestResult {
    pub(crate) fn success(status: StatusCode, signing_request: Vec<u8>) -> Self {
        Self {
            status,
            signing_request: Some(signing_request),
        }
    }

    pub(crate) fn failure(status: StatusCode) -> Self {
        Self {
            status,
            signing_request: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// DER encoded PKCS#10 request, present only on Good
    pub fn signing_request(&self) -> Option<&[u8]> {
        self.signing_request.as_deref()
    }

    pub fn into_signing_request(self) -> Option<Vec<u8>> {
        self.signing_request
    }
}

/// Result of `GetRejectedList`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedListResult {
    status: StatusCode,
    certificates: Option<Vec<Vec<u8>>>,
}

impl RejectedListResult {
    pub(crate) fn success(status: StatusCode, certificates: Vec<Vec<u8>>) -> Self {
        Self {
            status,
            certificates: Some(certificates),
        }
    }

    pub(crate) fn failure(status: StatusCode) -> Self {
        Self {
            status,
            certificates: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn certificates(&self) -> Option<&[Vec<u8>]> {
        self.certificates.as_deref()
    }

    pub fn into_certificates(self) -> Option<Vec<Vec<u8>>> {
        self.certificates
    }

    /// SHA-256 thumbprints (lowercase hex) of the rejected certificates
    pub fn thumbprints(&self) -> Option<Vec<String>> {
        self.certificates
            .as_ref()
            .map(|certs| certs.iter().map(|c| thumbprint::sha256_hex(c)).collect())
    }
}

/// Result of `UpdateCertificate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateCertificateResult {
    status: StatusCode,
    apply_change_required: Option<bool>,
}

impl UpdateCertificateResult {
    pub(crate) fn success(status: StatusCode, apply_change_required: bool) -> Self {
        Self {
            status,
            apply_change_required: Some(apply_change_required),
        }
    }

    pub(crate) fn failure(status: StatusCode) -> Self {
        Self {
            status,
            apply_change_required: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn apply_change_required(&self) -> Option<bool> {
        self.apply_change_required
    }
}
