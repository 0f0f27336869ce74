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

//! Tracing setup.
//!
//! `RUST_LOG` wins over the configured level; text or JSON to stderr.

use crate::config::{Config, LogFormat};
use crate::push_core::constants::logging::FALLBACK_FILTER;
use crate::push_core::errors::PushError;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

pub fn init_tracing(config: &Config) -> Result<(), PushError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let installed = match config.log_format {
        LogFormat::Json => subscriber.json().try_init(),
        LogFormat::Text => subscriber.try_init(),
    };
    installed.map_err(|e| PushError::Configuration(format!("tracing init failed: {}", e)))
}
