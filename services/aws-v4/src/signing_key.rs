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

use std::fmt::{Debug, Display, Formatter};

use sigv4_core::hash::{hex_hmac_sha256, hmac_sha256};
use sigv4_core::time::{format_date, DateTime};
use sigv4_core::utils::Redact;
use sigv4_core::{Error, Result};

use crate::SigningConfig;

/// Scope a signing key is valid for.
///
/// Displayed as `20130524/us-east-1/s3/aws4_request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningScope {
    /// Date in `YYYYMMDD`.
    pub date_stamp: String,
    /// Region like `us-east-1`.
    pub region: String,
    /// Service like `s3`.
    pub service: String,
    /// Terminator, `aws4_request` for AWS.
    pub terminator: String,
}

impl SigningScope {
    /// Build the scope for the given signing time.
    pub fn new(config: &SigningConfig, time: DateTime, region: &str, service: &str) -> Result<Self> {
        for (name, value) in [("region", region), ("service", service)] {
            if value.is_empty() {
                return Err(Error::input(format!("{name} is required")));
            }
            if value.contains('/') {
                return Err(Error::input(format!("{name} must not contain '/': {value}")));
            }
        }

        Ok(SigningScope {
            date_stamp: format_date(time),
            region: region.to_string(),
            service: service.to_string(),
            terminator: config.terminator.clone(),
        })
    }
}

impl Display for SigningScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.date_stamp, self.region, self.service, self.terminator
        )
    }
}

/// Key derived from the secret for exactly one scope.
///
/// The bytes never leave this type: it can only sign strings.
pub struct SigningKey([u8; 32]);

impl SigningKey {
    /// Run the HMAC chain `secret -> date -> region -> service -> terminator`.
    pub fn derive(config: &SigningConfig, scope: &SigningScope, secret: &str) -> Result<Self> {
        // Sign secret
        let secret = format!("{}{}", config.scheme, secret);
        // Sign date
        let sign_date = hmac_sha256(secret.as_bytes(), scope.date_stamp.as_bytes())?;
        // Sign region
        let sign_region = hmac_sha256(&sign_date, scope.region.as_bytes())?;
        // Sign service
        let sign_service = hmac_sha256(&sign_region, scope.service.as_bytes())?;
        // Sign request
        let sign_request = hmac_sha256(&sign_service, scope.terminator.as_bytes())?;

        Ok(SigningKey(sign_request))
    }

    /// Hex encoded HMAC-SHA256 of `content` under this key.
    pub fn sign(&self, content: &str) -> Result<String> {
        hex_hmac_sha256(&self.0, content.as_bytes())
    }

    #[cfg(test)]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SigningKey")
            .field(&Redact::secret(&self.0))
            .finish()
    }
}
