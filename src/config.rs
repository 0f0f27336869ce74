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

use crate::push::groups;
use crate::push_core::constants::{config as keys, groups as group_names};
use crate::push_core::errors::PushError;
use crate::push_core::models::NodeId;
use crate::push_core::records::CertificateType;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn parse_safe(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Group and type NodeIds a certificate operation is aimed at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateTarget {
    pub group_id: NodeId,
    pub type_id: NodeId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    /// Certificate group browse name, resolved through the group table
    pub certificate_group: String,
    pub certificate_type: CertificateType,
    /// Issue ApplyChanges automatically after an update that requires it
    pub auto_apply: bool,
    /// Deadline for `TimeoutSession`; the dispatcher itself never times out
    pub call_timeout_ms: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, PushError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, file, test map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PushError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let certificate_type = match lookup(keys::ENV_CERTIFICATE_TYPE) {
            Some(s) => s.parse()?,
            None => defaults.certificate_type,
        };

        let call_timeout_ms = match lookup(keys::ENV_CALL_TIMEOUT_MS) {
            Some(s) => Some(s.trim().parse::<u64>().map_err(|_| {
                PushError::Configuration(format!(
                    "{} must be a number of milliseconds, got '{}'",
                    keys::ENV_CALL_TIMEOUT_MS,
                    s
                ))
            })?),
            None => None,
        };

        Ok(Self {
            log_level: lookup(keys::ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_format: lookup(keys::ENV_LOG_FORMAT)
                .map(|s| LogFormat::parse_safe(&s))
                .unwrap_or(defaults.log_format),
            certificate_group: lookup(keys::ENV_CERTIFICATE_GROUP)
                .unwrap_or(defaults.certificate_group),
            certificate_type,
            auto_apply: lookup(keys::ENV_AUTO_APPLY)
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.auto_apply),
            call_timeout_ms,
        })
    }

    /// Resolve the configured group name and certificate type to NodeIds.
    pub fn target(&self) -> Result<CertificateTarget, PushError> {
        Ok(CertificateTarget {
            group_id: groups::resolve_group_id(&self.certificate_group)?,
            type_id: self.certificate_type.node_id(),
        })
    }

    pub fn call_timeout(&self) -> Option<Duration> {
        self.call_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            certificate_group: group_names::DEFAULT_APPLICATION_GROUP.to_string(),
            certificate_type: CertificateType::RsaSha256,
            auto_apply: false,
            call_timeout_ms: None,
        }
    }
}
