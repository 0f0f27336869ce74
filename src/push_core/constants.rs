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

//! certpush Constants - Single source of truth for protocol identifiers and configuration keys.
//!
//! Node identifiers are the registered OPC UA namespace 0 values for the
//! `ServerConfiguration` object and its methods. They are part of the remote
//! contract and must match the standard bit-exactly.

/// Well-known node identifiers (namespace 0)
pub mod nodes {
    use crate::push_core::models::NodeId;

    /// `Server_ServerConfiguration`
    pub const SERVER_CONFIGURATION: NodeId = NodeId::numeric(0, 12637);
    /// `Server_ServerConfiguration_CreateSigningRequest`
    pub const CREATE_SIGNING_REQUEST: NodeId = NodeId::numeric(0, 12737);
    /// `Server_ServerConfiguration_ApplyChanges`
    pub const APPLY_CHANGES: NodeId = NodeId::numeric(0, 12740);
    /// `Server_ServerConfiguration_GetRejectedList`
    pub const GET_REJECTED_LIST: NodeId = NodeId::numeric(0, 12777);
    /// `Server_ServerConfiguration_UpdateCertificate`
    pub const UPDATE_CERTIFICATE: NodeId = NodeId::numeric(0, 13737);
    /// `Server_ServerConfiguration_CertificateGroups`
    pub const CERTIFICATE_GROUPS: NodeId = NodeId::numeric(0, 14053);
    /// `Server_ServerConfiguration_CertificateGroups_DefaultApplicationGroup`
    pub const DEFAULT_APPLICATION_GROUP: NodeId = NodeId::numeric(0, 14156);

    /// `RsaMinApplicationCertificateType`
    pub const RSA_MIN_APPLICATION_CERTIFICATE_TYPE: NodeId = NodeId::numeric(0, 12559);
    /// `RsaSha256ApplicationCertificateType`
    pub const RSA_SHA256_APPLICATION_CERTIFICATE_TYPE: NodeId = NodeId::numeric(0, 12560);
}

/// Certificate group browse names
pub mod groups {
    pub const DEFAULT_APPLICATION_GROUP: &str = "DefaultApplicationGroup";
}

/// Private key format strings accepted by UpdateCertificate
pub mod private_key_format {
    pub const PEM: &str = "PEM";
    pub const PFX: &str = "PFX";
}

/// Configuration Environment Variables
pub mod config {
    pub const ENV_LOG_LEVEL: &str = "CERTPUSH_LOG_LEVEL";
    pub const ENV_LOG_FORMAT: &str = "CERTPUSH_LOG_FORMAT";
    pub const ENV_CERTIFICATE_GROUP: &str = "CERTPUSH_CERTIFICATE_GROUP";
    pub const ENV_CERTIFICATE_TYPE: &str = "CERTPUSH_CERTIFICATE_TYPE";
    pub const ENV_AUTO_APPLY: &str = "CERTPUSH_AUTO_APPLY";
    pub const ENV_CALL_TIMEOUT_MS: &str = "CERTPUSH_CALL_TIMEOUT_MS";
}

/// Logging defaults
pub mod logging {
    /// Filter used when neither `RUST_LOG` nor the configured level parse
    pub const FALLBACK_FILTER: &str = "certpush=debug,info";
}
