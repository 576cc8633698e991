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

use std::str::FromStr;
use std::time::Duration;

use http::Method;
use log::debug;
use sigv4_core::time::DateTime;
use sigv4_core::{Error, Result};

use crate::constants::MAX_PRESIGN_EXPIRES;
use crate::header::canonicalize_headers;
use crate::query::{combine_query, presign_auth_params};
use crate::signature::{authorization, compute_signature, string_to_sign};
use crate::{
    CanonicalRequest, Credential, Endpoint, SigningArtifacts, SigningConfig, SigningKey,
    SigningRequest, SigningScope,
};

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The signer holds no per-request state. Every call derives its own
/// canonical request and signing key, so one signer can be shared by
/// any number of threads.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    endpoint: Endpoint,
    method: Method,
    service: String,
    region: String,

    config: SigningConfig,
}

impl RequestSigner {
    /// Create a new signer for AWS V4.
    ///
    /// All inputs are validated here, before any hashing happens.
    pub fn new(endpoint: &str, method: &str, service: &str, region: &str) -> Result<Self> {
        let endpoint = Endpoint::parse(endpoint)?;
        let method = Method::from_str(method)?;
        if method.as_str().bytes().any(|b| b.is_ascii_lowercase()) {
            return Err(Error::input(format!("method must be upper case: {method}")));
        }
        for (name, value) in [("service", service), ("region", region)] {
            if value.is_empty() {
                return Err(Error::input(format!("{name} is required")));
            }
        }

        Ok(Self {
            endpoint,
            method,
            service: service.to_string(),
            region: region.to_string(),

            config: SigningConfig::default(),
        })
    }

    /// Replace the default AWS signing config.
    pub fn with_config(mut self, config: SigningConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the endpoint of this signer.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Get the config of this signer.
    pub fn config(&self) -> &SigningConfig {
        &self.config
    }

    /// Build the scope for the given signing time.
    pub fn scope(&self, time: DateTime) -> Result<SigningScope> {
        SigningScope::new(&self.config, time, &self.region, &self.service)
    }

    /// Sign the request at the given time.
    ///
    /// Time is taken from the caller, use [`sigv4_core::time::now`] to sign
    /// with the current time.
    pub fn sign(
        &self,
        req: &SigningRequest,
        cred: &Credential,
        time: DateTime,
    ) -> Result<SigningArtifacts> {
        cred.validate()?;
        let scope = self.scope(time)?;

        let headers = canonicalize_headers(&req.headers, &self.endpoint.host_header())?;
        let canonical_query = combine_query(
            &req.query,
            req.auth_query.as_deref(),
            self.config.query_join,
        );

        let creq = CanonicalRequest::new(
            &self.endpoint,
            &self.method,
            &canonical_query,
            &headers,
            &req.payload_hash,
        )?;
        let canonical_request = creq.to_string();
        debug!("calculated canonical request: {canonical_request}");
        debug!("calculated scope: {scope}");

        let string_to_sign = string_to_sign(&self.config, time, &scope, &creq);
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = SigningKey::derive(&self.config, &scope, cred.secret_access_key())?;
        let signature = compute_signature(&signing_key, &string_to_sign)?;
        debug!("calculated signature: {signature}");

        let authorization = authorization(
            &self.config,
            &cred.access_key_id,
            &scope,
            &headers.signed_headers,
            &signature,
        );

        Ok(SigningArtifacts {
            authorization,
            signature,
            canonical_query,
            signed_headers: headers.signed_headers,
            headers: headers.headers,
            canonical_request,
            string_to_sign,
        })
    }

    /// Sign the request for a presigned url that expires after `expires_in`.
    ///
    /// The `X-Amz-*` auth parameters replace any auth group the request
    /// carries. Use [`SigningArtifacts::presigned_query`] to build the url.
    ///
    /// `expires_in` must be between one second and seven days.
    pub fn presign(
        &self,
        req: &SigningRequest,
        cred: &Credential,
        time: DateTime,
        expires_in: Duration,
    ) -> Result<SigningArtifacts> {
        let expires = expires_in.as_secs();
        if !(1..=MAX_PRESIGN_EXPIRES).contains(&expires) {
            return Err(Error::input(format!(
                "presign expires must be within 1..={MAX_PRESIGN_EXPIRES} seconds, got {expires}"
            )));
        }

        cred.validate()?;
        let scope = self.scope(time)?;
        let headers = canonicalize_headers(&req.headers, &self.endpoint.host_header())?;

        let auth = presign_auth_params(
            &self.config,
            cred,
            &scope,
            time,
            expires_in,
            &headers.signed_headers,
        );

        let mut req = req.clone();
        req.auth_query = Some(auth);
        self.sign(&req, cred, time)
    }
}
