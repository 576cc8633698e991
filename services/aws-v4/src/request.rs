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
use std::str::FromStr;

use http::header::HeaderName;
use http::HeaderMap;
use http::HeaderValue;
use http::Uri;
use sigv4_core::hash::hex_sha256;
use sigv4_core::{Error, Result};

use crate::constants::{EMPTY_STRING_SHA256, UNSIGNED_PAYLOAD};
use crate::query::QueryParams;

/// Endpoint the request is sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// URL scheme like `https`.
    pub scheme: String,
    /// Host without port.
    pub host: String,
    /// Port, only set when the url carries one explicitly.
    pub port: Option<u16>,
    /// Raw url path.
    pub path: String,
}

impl Endpoint {
    /// Parse an endpoint from an absolute url.
    pub fn parse(url: &str) -> Result<Self> {
        let uri: Uri = url.parse()?;

        let scheme = uri
            .scheme_str()
            .ok_or_else(|| Error::input(format!("endpoint without scheme: {url}")))?;
        let authority = uri
            .authority()
            .ok_or_else(|| Error::input(format!("endpoint without host: {url}")))?;
        if authority.host().is_empty() {
            return Err(Error::input(format!("endpoint without host: {url}")));
        }

        Ok(Endpoint {
            scheme: scheme.to_string(),
            host: authority.host().to_string(),
            port: authority.port_u16(),
            path: uri.path().to_string(),
        })
    }

    /// Value of the `host` header: `host` or `host:port`.
    ///
    /// The default port of the scheme is left out, the same way http
    /// clients send it.
    pub fn host_header(&self) -> String {
        match self.port {
            Some(port) if !self.is_default_port(port) => format!("{}:{}", self.host, port),
            _ => self.host.clone(),
        }
    }

    fn is_default_port(&self, port: u16) -> bool {
        matches!(
            (self.scheme.as_str(), port),
            ("http", 80) | ("https", 443)
        )
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Endpoint::parse(s)
    }
}

/// Hex encoded SHA-256 of the request body, or the unsigned payload sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadHash(String);

impl PayloadHash {
    /// Accept a precomputed body hash.
    pub fn parse(s: &str) -> Result<Self> {
        let is_hex_sha256 = s.len() == 64
            && s
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

        if s == UNSIGNED_PAYLOAD || is_hex_sha256 {
            Ok(PayloadHash(s.to_string()))
        } else {
            Err(Error::input(format!("invalid payload hash: {s:?}")))
        }
    }

    /// Hash the given body.
    pub fn of(body: &[u8]) -> Self {
        PayloadHash(hex_sha256(body))
    }

    /// Hash of an empty body.
    pub fn empty() -> Self {
        PayloadHash(EMPTY_STRING_SHA256.to_string())
    }

    /// The `UNSIGNED-PAYLOAD` sentinel.
    pub fn unsigned() -> Self {
        PayloadHash(UNSIGNED_PAYLOAD.to_string())
    }

    /// Get the hash as str.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PayloadHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PayloadHash::parse(s)
    }
}

impl Display for PayloadHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per call inputs of a signing operation.
///
/// Query values must be percent-encoded already, see
/// [`encode_query_component`](crate::encode_query_component).
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// Headers to sign, `host` is added from the endpoint.
    pub headers: HeaderMap,
    /// Operation query parameters.
    pub query: QueryParams,
    /// Auxiliary (auth) query parameters, set for presigned urls.
    pub auth_query: Option<QueryParams>,
    /// Hash of the body.
    pub payload_hash: PayloadHash,
}

impl SigningRequest {
    /// Create a new request with no headers or query.
    pub fn new(payload_hash: PayloadHash) -> Self {
        Self {
            headers: HeaderMap::new(),
            query: Vec::new(),
            auth_query: None,
            payload_hash,
        }
    }

    /// Append a header, names are compared case-insensitively.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.append(name, value);
        Ok(self)
    }

    /// Push an operation query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the auxiliary query group.
    pub fn with_auth_query(mut self, params: QueryParams) -> Self {
        self.auth_query = Some(params);
        self
    }
}
