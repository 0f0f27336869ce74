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

//! `ServerConfiguration` client.
//!
//! Public surface of the crate: one async method per server method plus the
//! group resolver and the install workflow. The client holds nothing but the
//! session and the configuration; every call is independent.

use crate::config::Config;
use crate::push::{dispatcher, groups};
use crate::push_core::errors::PushError;
use crate::push_core::models::{NodeId, StatusCode};
use crate::push_core::records::{
    ApplyChanges, CreateSigningRequest, GetRejectedList, RejectedListResult, SigningRequestResult,
    UpdateCertificate, UpdateCertificateResult,
};
use crate::push_core::traits::Session;
use crate::utils::thumbprint;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of [`ServerConfigurationClient::install_certificate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallReport {
    pub update: UpdateCertificateResult,
    /// Status of the follow-up ApplyChanges, `None` when it was not issued
    pub applied: Option<StatusCode>,
}

impl InstallReport {
    /// True when the new certificate is active on the server.
    pub fn is_active(&self) -> bool {
        match (self.update.apply_change_required(), self.applied) {
            (Some(false), _) => true,
            (Some(true), Some(status)) => status.is_good(),
            _ => false,
        }
    }
}

pub struct ServerConfigurationClient<S> {
    session: S,
    config: Arc<Config>,
}

impl<S: Session> ServerConfigurationClient<S> {
    pub fn new(session: S) -> Self {
        Self::with_config(session, Arc::new(Config::default()))
    }

    pub fn with_config(session: S, config: Arc<Config>) -> Self {
        Self { session, config }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Ask the server for a PKCS#10 signing request.
    pub async fn create_signing_request(
        &self,
        request: CreateSigningRequest,
    ) -> Result<SigningRequestResult, PushError> {
        let subject = request.subject_name.clone();
        let result = dispatcher::call(&self.session, request).await?;
        match result.signing_request() {
            Some(csr) => info!(subject = %subject, bytes = csr.len(), "Signing request created"),
            None => warn!(subject = %subject, status = %result.status(), "CreateSigningRequest failed"),
        }
        Ok(result)
    }

    /// Fetch the certificates the server has rejected.
    pub async fn get_rejected_list(&self) -> Result<RejectedListResult, PushError> {
        let result = dispatcher::call(&self.session, GetRejectedList).await?;
        match result.thumbprints() {
            Some(thumbprints) => {
                info!(count = thumbprints.len(), "Rejected list retrieved");
                for tp in thumbprints {
                    debug!(thumbprint = %tp, "Rejected certificate");
                }
            }
            None => warn!(status = %result.status(), "GetRejectedList failed"),
        }
        Ok(result)
    }

    /// Install a new certificate, optionally with a new private key.
    pub async fn update_certificate(
        &self,
        request: UpdateCertificate,
    ) -> Result<UpdateCertificateResult, PushError> {
        let tp = thumbprint::sha256_hex(&request.certificate);
        let result = dispatcher::call(&self.session, request).await?;
        match result.apply_change_required() {
            Some(apply) => info!(
                thumbprint = %tp,
                apply_change_required = apply,
                "Certificate updated"
            ),
            None => warn!(thumbprint = %tp, status = %result.status(), "UpdateCertificate failed"),
        }
        Ok(result)
    }

    /// Commit pending security changes.
    ///
    /// Returns the server's status as is. Output arguments in the reply are a
    /// protocol violation and surface as `PushError::UnexpectedOutputs`.
    pub async fn apply_changes(&self) -> Result<StatusCode, PushError> {
        let status = dispatcher::call(&self.session, ApplyChanges).await?;
        if status.is_good() {
            info!("Changes applied");
        } else {
            warn!(status = %status, "ApplyChanges failed");
        }
        Ok(status)
    }

    pub fn resolve_group_id(&self, name: &str) -> Result<NodeId, PushError> {
        groups::resolve_group_id(name)
    }

    /// UpdateCertificate followed, when the server asks for it and
    /// `auto_apply` is configured, by ApplyChanges.
    ///
    /// ApplyChanges is never issued after a failed update.
    pub async fn install_certificate(
        &self,
        request: UpdateCertificate,
    ) -> Result<InstallReport, PushError> {
        let update = self.update_certificate(request).await?;

        let applied = match update.apply_change_required() {
            Some(true) if self.config.auto_apply => Some(self.apply_changes().await?),
            Some(true) => {
                info!("Server requires ApplyChanges; auto_apply disabled, leaving change pending");
                None
            }
            _ => None,
        };

        Ok(InstallReport { update, applied })
    }
}
