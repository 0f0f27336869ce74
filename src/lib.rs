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

//! certpush: OPC UA push certificate management client.
//!
//! This library drives the certificate-lifecycle methods of a server's
//! `ServerConfiguration` object (CreateSigningRequest, GetRejectedList,
//! UpdateCertificate and ApplyChanges) through a caller-supplied [`Session`].
//! Transport, channel security and wire encoding stay with the session.
//!
//! [`Session`]: crate::push_core::traits::Session

pub mod config;
pub mod push;
pub mod push_core;
pub mod utils;

pub use push::client::{InstallReport, ServerConfigurationClient};
pub use push_core::errors::{PushError, SessionError};
pub use push_core::traits::Session;
