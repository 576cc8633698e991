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

//! AWS SigV4 signer.
//!
//! This crate computes the `Authorization` value (or the presigned query)
//! of a single HTTP request. It never sends the request and never reads
//! the clock on its own.
//!
//! ## Example
//!
//! ```
//! use sigv4::{Credential, PayloadHash, RequestSigner, SigningRequest};
//!
//! # fn main() -> sigv4_core::Result<()> {
//! let signer = RequestSigner::new(
//!     "https://examplebucket.s3.amazonaws.com/test.txt",
//!     "GET",
//!     "s3",
//!     "us-east-1",
//! )?;
//! let req = SigningRequest::new(PayloadHash::empty())
//!     .with_header("x-amz-content-sha256", PayloadHash::empty().as_str())?;
//! let cred = Credential::new("access_key_id", "secret_access_key");
//!
//! let artifacts = signer.sign(&req, &cred, sigv4_core::time::now())?;
//! assert!(artifacts.authorization.starts_with("AWS4-HMAC-SHA256 Credential=access_key_id/"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! - [`canonicalize_headers`] and [`combine_query`] normalize the inputs.
//! - [`CanonicalRequest`] assembles them with the path and payload hash.
//! - [`SigningKey::derive`] runs the HMAC chain for one [`SigningScope`].
//! - [`string_to_sign`], [`compute_signature`] and [`authorization`] produce
//!   the final values, collected in [`SigningArtifacts`].

mod constants;
pub use constants::{EMPTY_STRING_SHA256, UNSIGNED_PAYLOAD};

mod config;
pub use config::{QueryJoin, SigningConfig};

mod credential;
pub use credential::Credential;

mod request;
pub use request::{Endpoint, PayloadHash, SigningRequest};

mod header;
pub use header::{canonicalize_headers, CanonicalHeaders};

mod query;
pub use query::{
    canonicalize_query, combine_query, encode_query_component, presign_auth_params, QueryParams,
};

mod canonical_request;
pub use canonical_request::{canonical_path, CanonicalRequest};

mod signing_key;
pub use signing_key::{SigningKey, SigningScope};

mod signature;
pub use signature::{authorization, compute_signature, string_to_sign, SigningArtifacts};

mod signer;
pub use signer::RequestSigner;

pub use sigv4_core::time::DateTime;
