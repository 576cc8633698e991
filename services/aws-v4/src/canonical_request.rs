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

use std::fmt::{Display, Formatter};

use http::Method;
use percent_encoding::{percent_decode_str, utf8_percent_encode};
use sigv4_core::hash::hex_sha256;
use sigv4_core::Result;

use crate::constants::AWS_URI_ENCODE_SET;
use crate::header::CanonicalHeaders;
use crate::{Endpoint, PayloadHash};

/// Canonical form of a request:
///
/// ```text
/// GET
/// /test.txt
/// <canonical query>
/// host:examplebucket.s3.amazonaws.com
/// x-amz-date:20130524T000000Z
///
/// host;x-amz-date
/// <payload hash>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    method: Method,
    path: String,
    query: String,
    headers: String,
    signed_headers: String,
    payload_hash: String,
}

impl CanonicalRequest {
    /// Assemble the canonical request.
    pub fn new(
        endpoint: &Endpoint,
        method: &Method,
        canonical_query: &str,
        headers: &CanonicalHeaders,
        payload_hash: &PayloadHash,
    ) -> Result<Self> {
        Ok(CanonicalRequest {
            method: method.clone(),
            path: canonical_path(&endpoint.path)?,
            query: canonical_query.to_string(),
            headers: headers.canonical_headers.clone(),
            signed_headers: headers.signed_headers.clone(),
            payload_hash: payload_hash.to_string(),
        })
    }

    /// Hex encoded SHA-256 of the canonical request.
    pub fn hash(&self) -> String {
        hex_sha256(self.to_string().as_bytes())
    }
}

impl Display for CanonicalRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.query)?;
        // Every header line ends with '\n' already.
        writeln!(f, "{}", self.headers)?;
        writeln!(f, "{}", self.signed_headers)?;
        write!(f, "{}", self.payload_hash)
    }
}

/// Encode every path segment, keeping `/`.
///
/// The path is decoded first so that already encoded paths are not
/// encoded twice. An empty path becomes `/`.
pub fn canonical_path(path: &str) -> Result<String> {
    if path.is_empty() {
        return Ok("/".to_string());
    }

    let decoded = percent_decode_str(path).decode_utf8()?;
    Ok(utf8_percent_encode(&decoded, &AWS_URI_ENCODE_SET).to_string())
}
