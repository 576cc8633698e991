// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use sigv4_core::utils::Redact;
use sigv4_core::{Error, Result};
use std::fmt::{Debug, Formatter};

/// Credential that holds the access_key and secret_key.
///
/// The secret is only ever read by the signing key derivation.
#[derive(Clone)]
pub struct Credential {
    /// Access key id for aws services.
    pub access_key_id: String,
    secret_access_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
        }
    }

    pub(crate) fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// Check that both halves of the credential are present.
    pub fn validate(&self) -> Result<()> {
        if self.access_key_id.is_empty() {
            return Err(Error::input("access key id is required"));
        }
        if self.secret_access_key.is_empty() {
            return Err(Error::input("secret access key is required"));
        }
        Ok(())
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field(
                "secret_access_key",
                &Redact::secret(self.secret_access_key.as_bytes()),
            )
            .finish()
    }
}
