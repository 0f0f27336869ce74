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

//! Certificate group resolver.
//!
//! Only the default application group is known. This is a fixed table, not a
//! directory lookup, and other names are not validated against the server.

use crate::push_core::constants::{groups, nodes};
use crate::push_core::errors::PushError;
use crate::push_core::models::NodeId;

pub fn resolve_group_id(name: &str) -> Result<NodeId, PushError> {
    match name {
        groups::DEFAULT_APPLICATION_GROUP => Ok(nodes::DEFAULT_APPLICATION_GROUP),
        other => Err(PushError::GroupNotImplemented(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::push_core::models::StatusCode;

    #[test]
    fn test_default_application_group() {
        let id = resolve_group_id("DefaultApplicationGroup").unwrap();
        assert_eq!(id, NodeId::numeric(0, 14156));
    }

    #[test]
    fn test_other_groups_not_implemented() {
        for name in ["DefaultHttpsGroup", "DefaultUserTokenGroup", "defaultapplicationgroup", ""] {
            let err = resolve_group_id(name).unwrap_err();
            assert!(matches!(err, PushError::GroupNotImplemented(ref n) if n == name));
            assert_eq!(err.status_code(), Some(StatusCode::BAD_NOT_IMPLEMENTED));
        }
    }
}
