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

//! Protocol data model.
//!
//! Identifiers, status codes, typed values and the invocation/outcome pair
//! exchanged with the session. Pure data, no I/O.

use crate::push_core::constants::nodes;
use crate::push_core::errors::PushError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier part of a [`NodeId`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Identifier {
    Numeric(u32),
    String(String),
}

/// Opaque, stable reference to a remote node (object, method or certificate group).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId {
    namespace: u16,
    identifier: Identifier,
}

impl NodeId {
    pub const fn numeric(namespace: u16, value: u32) -> Self {
        Self {
            namespace,
            identifier: Identifier::Numeric(value),
        }
    }

    pub fn string(namespace: u16, value: impl Into<String>) -> Self {
        Self {
            namespace,
            identifier: Identifier::String(value.into()),
        }
    }

    pub fn namespace(&self) -> u16 {
        self.namespace
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace != 0 {
            write!(f, "ns={};", self.namespace)?;
        }
        match &self.identifier {
            Identifier::Numeric(v) => write!(f, "i={}", v),
            Identifier::String(s) => write!(f, "s={}", s),
        }
    }
}

impl FromStr for NodeId {
    type Err = PushError;

    /// Parses the standard text form: `i=12637`, `ns=2;i=5`, `ns=1;s=Name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PushError::InvalidNodeId(s.to_string());

        let (namespace, rest) = match s.strip_prefix("ns=") {
            Some(tail) => {
                let (ns, rest) = tail.split_once(';').ok_or_else(invalid)?;
                (ns.parse::<u16>().map_err(|_| invalid())?, rest)
            }
            None => (0, s),
        };

        if let Some(v) = rest.strip_prefix("i=") {
            let value = v.parse::<u32>().map_err(|_| invalid())?;
            return Ok(NodeId::numeric(namespace, value));
        }
        if let Some(v) = rest.strip_prefix("s=") {
            if v.is_empty() {
                return Err(invalid());
            }
            return Ok(NodeId::string(namespace, v));
        }
        Err(invalid())
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for NodeId {
    type Error = PushError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// OPC UA status code. The top two bits carry the severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(u32);

impl StatusCode {
    pub const GOOD: StatusCode = StatusCode(0x0000_0000);
    pub const BAD_UNEXPECTED_ERROR: StatusCode = StatusCode(0x8001_0000);
    pub const BAD_INTERNAL_ERROR: StatusCode = StatusCode(0x8002_0000);
    pub const BAD_COMMUNICATION_ERROR: StatusCode = StatusCode(0x8005_0000);
    pub const BAD_ENCODING_ERROR: StatusCode = StatusCode(0x8006_0000);
    pub const BAD_TIMEOUT: StatusCode = StatusCode(0x800A_0000);
    pub const BAD_NOTHING_TO_DO: StatusCode = StatusCode(0x800F_0000);
    pub const BAD_CERTIFICATE_INVALID: StatusCode = StatusCode(0x8012_0000);
    pub const BAD_SECURITY_CHECKS_FAILED: StatusCode = StatusCode(0x8013_0000);
    pub const BAD_USER_ACCESS_DENIED: StatusCode = StatusCode(0x801F_0000);
    pub const BAD_REQUEST_CANCELLED_BY_CLIENT: StatusCode = StatusCode(0x802C_0000);
    pub const BAD_NOT_SUPPORTED: StatusCode = StatusCode(0x803D_0000);
    pub const BAD_NOT_IMPLEMENTED: StatusCode = StatusCode(0x8040_0000);
    pub const BAD_INVALID_ARGUMENT: StatusCode = StatusCode(0x80AB_0000);
    pub const BAD_INVALID_STATE: StatusCode = StatusCode(0x80AF_0000);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn is_good(self) -> bool {
        self.0 & 0xC000_0000 == 0
    }

    pub fn is_bad(self) -> bool {
        self.0 & 0x8000_0000 != 0
    }

    /// Symbolic name for the codes this crate knows about.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::GOOD => "Good",
            Self::BAD_UNEXPECTED_ERROR => "BadUnexpectedError",
            Self::BAD_INTERNAL_ERROR => "BadInternalError",
            Self::BAD_COMMUNICATION_ERROR => "BadCommunicationError",
            Self::BAD_ENCODING_ERROR => "BadEncodingError",
            Self::BAD_TIMEOUT => "BadTimeout",
            Self::BAD_NOTHING_TO_DO => "BadNothingToDo",
            Self::BAD_CERTIFICATE_INVALID => "BadCertificateInvalid",
            Self::BAD_SECURITY_CHECKS_FAILED => "BadSecurityChecksFailed",
            Self::BAD_USER_ACCESS_DENIED => "BadUserAccessDenied",
            Self::BAD_REQUEST_CANCELLED_BY_CLIENT => "BadRequestCancelledByClient",
            Self::BAD_NOT_SUPPORTED => "BadNotSupported",
            Self::BAD_NOT_IMPLEMENTED => "BadNotImplemented",
            Self::BAD_INVALID_ARGUMENT => "BadInvalidArgument",
            Self::BAD_INVALID_STATE => "BadInvalidState",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} (0x{:08X})", name, self.0),
            None => write!(f, "0x{:08X}", self.0),
        }
    }
}

/// Discriminant of a [`Variant`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantKind {
    NodeId,
    String,
    Boolean,
    ByteString,
    ByteStringArray,
    Null,
}

/// Typed value used for method arguments and results.
///
/// Only the kinds the certificate methods exchange are representable, so kind
/// and content cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    NodeId(NodeId),
    String(String),
    Boolean(bool),
    ByteString(Vec<u8>),
    ByteStringArray(Vec<Vec<u8>>),
    /// Absent optional argument
    Null,
}

impl Variant {
    pub fn kind(&self) -> VariantKind {
        match self {
            Variant::NodeId(_) => VariantKind::NodeId,
            Variant::String(_) => VariantKind::String,
            Variant::Boolean(_) => VariantKind::Boolean,
            Variant::ByteString(_) => VariantKind::ByteString,
            Variant::ByteStringArray(_) => VariantKind::ByteStringArray,
            Variant::Null => VariantKind::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Variant::Null)
    }
}

impl From<Option<Vec<u8>>> for Variant {
    fn from(value: Option<Vec<u8>>) -> Self {
        value.map_or(Variant::Null, Variant::ByteString)
    }
}

/// The four certificate management methods of `ServerConfiguration`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    CreateSigningRequest,
    GetRejectedList,
    UpdateCertificate,
    ApplyChanges,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::CreateSigningRequest,
        Method::GetRejectedList,
        Method::UpdateCertificate,
        Method::ApplyChanges,
    ];

    pub fn node_id(self) -> NodeId {
        match self {
            Method::CreateSigningRequest => nodes::CREATE_SIGNING_REQUEST,
            Method::GetRejectedList => nodes::GET_REJECTED_LIST,
            Method::UpdateCertificate => nodes::UPDATE_CERTIFICATE,
            Method::ApplyChanges => nodes::APPLY_CHANGES,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::CreateSigningRequest => "CreateSigningRequest",
            Method::GetRejectedList => "GetRejectedList",
            Method::UpdateCertificate => "UpdateCertificate",
            Method::ApplyChanges => "ApplyChanges",
        }
    }

    pub fn from_node_id(id: &NodeId) -> Option<Self> {
        Self::ALL.into_iter().find(|m| &m.node_id() == id)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One fully built method call on the `ServerConfiguration` object.
///
/// Only the builder constructs these; the fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    object_id: NodeId,
    method: Method,
    input_arguments: Vec<Variant>,
}

impl Invocation {
    pub(crate) fn new(method: Method, input_arguments: Vec<Variant>) -> Self {
        Self {
            object_id: nodes::SERVER_CONFIGURATION,
            method,
            input_arguments,
        }
    }

    pub fn object_id(&self) -> &NodeId {
        &self.object_id
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn method_id(&self) -> NodeId {
        self.method.node_id()
    }

    pub fn input_arguments(&self) -> &[Variant] {
        &self.input_arguments
    }
}

/// Raw result of one invocation as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: StatusCode,
    #[serde(default)]
    pub output_arguments: Vec<Variant>,
}

impl Outcome {
    pub fn new(status: StatusCode, output_arguments: Vec<Variant>) -> Self {
        Self {
            status,
            output_arguments,
        }
    }

    pub fn good(output_arguments: Vec<Variant>) -> Self {
        Self::new(StatusCode::GOOD, output_arguments)
    }

    pub fn bad(status: StatusCode) -> Self {
        Self::new(status, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_text_form() {
        assert_eq!(nodes::SERVER_CONFIGURATION.to_string(), "i=12637");
        assert_eq!(NodeId::numeric(2, 5).to_string(), "ns=2;i=5");
        assert_eq!(NodeId::string(1, "Group").to_string(), "ns=1;s=Group");

        let parsed: NodeId = "i=14156".parse().unwrap();
        assert_eq!(parsed, nodes::DEFAULT_APPLICATION_GROUP);
        let parsed: NodeId = "ns=3;s=MyGroup".parse().unwrap();
        assert_eq!(parsed, NodeId::string(3, "MyGroup"));
    }

    #[test]
    fn test_node_id_rejects_garbage() {
        for bad in ["", "x=1", "i=abc", "ns=1", "ns=70000;i=1", "s=", "ns=1;g=abc"] {
            assert!(bad.parse::<NodeId>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_node_id_serde_as_string() {
        let json = serde_json::to_string(&nodes::UPDATE_CERTIFICATE).unwrap();
        assert_eq!(json, "\"i=13737\"");
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, nodes::UPDATE_CERTIFICATE);
    }

    #[test]
    fn test_status_code_severity_and_display() {
        assert!(StatusCode::GOOD.is_good());
        assert!(!StatusCode::GOOD.is_bad());
        assert!(StatusCode::BAD_INVALID_ARGUMENT.is_bad());
        assert!(!StatusCode::BAD_INVALID_ARGUMENT.is_good());
        // Uncertain severity is neither good nor bad
        let uncertain = StatusCode::from_bits(0x4000_0000);
        assert!(!uncertain.is_good());
        assert!(!uncertain.is_bad());

        assert_eq!(
            StatusCode::BAD_INVALID_ARGUMENT.to_string(),
            "BadInvalidArgument (0x80AB0000)"
        );
        assert_eq!(StatusCode::from_bits(0x8123_0000).to_string(), "0x81230000");
    }

    #[test]
    fn test_method_ids_are_distinct() {
        for m in Method::ALL {
            assert_eq!(Method::from_node_id(&m.node_id()), Some(m));
        }
        assert_eq!(Method::from_node_id(&nodes::SERVER_CONFIGURATION), None);
    }

    #[test]
    fn test_invocation_targets_server_configuration() {
        let inv = Invocation::new(Method::ApplyChanges, vec![]);
        assert_eq!(inv.object_id(), &nodes::SERVER_CONFIGURATION);
        assert_eq!(inv.method_id(), nodes::APPLY_CHANGES);
        assert!(inv.input_arguments().is_empty());
    }
}
