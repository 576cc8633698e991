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

use http::HeaderMap;
use http::HeaderValue;
use sigv4_core::time::{format_iso8601, DateTime};
use sigv4_core::Result;

use crate::constants::X_AMZ_SIGNATURE;
use crate::{CanonicalRequest, SigningConfig, SigningKey, SigningScope};

/// Everything a signing call produces.
///
/// All fields are safe to log, no secret material is kept here.
#[derive(Debug, Clone)]
pub struct SigningArtifacts {
    /// Value of the `Authorization` header.
    pub authorization: String,
    /// Hex encoded signature.
    pub signature: String,
    /// Combined canonical query string.
    pub canonical_query: String,
    /// Signed header names joined by `;`.
    pub signed_headers: String,
    /// Headers to send, including `host`.
    pub headers: HeaderMap,
    /// Canonical request, for diagnostics.
    pub canonical_request: String,
    /// String to sign, for diagnostics.
    pub string_to_sign: String,
}

impl SigningArtifacts {
    /// Query string of a presigned url: the canonical query plus the signature.
    pub fn presigned_query(&self) -> String {
        let mut s = String::with_capacity(self.canonical_query.len() + 80);
        s.push_str(&self.canonical_query);
        if !s.is_empty() && !s.ends_with('&') {
            s.push('&');
        }
        s.push_str(X_AMZ_SIGNATURE);
        s.push('=');
        s.push_str(&self.signature);
        s
    }

    /// The authorization value as a sensitive header value.
    pub fn authorization_header(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&self.authorization)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

/// StringToSign:
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(
    config: &SigningConfig,
    time: DateTime,
    scope: &SigningScope,
    creq: &CanonicalRequest,
) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        config.algorithm_id(),
        format_iso8601(time),
        scope,
        creq.hash()
    )
}

/// Hex encoded signature of the string to sign.
pub fn compute_signature(key: &SigningKey, string_to_sign: &str) -> Result<String> {
    key.sign(string_to_sign)
}

/// Authorization:
///
/// ```text
/// AWS4-HMAC-SHA256 Credential=<access_key>/<scope>, SignedHeaders=<names>, Signature=<hex>
/// ```
pub fn authorization(
    config: &SigningConfig,
    access_key_id: &str,
    scope: &SigningScope,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        config.algorithm_id(),
        access_key_id,
        scope,
        signed_headers,
        signature
    )
}
