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

use std::time::Duration;

use percent_encoding::utf8_percent_encode;
use sigv4_core::time::{format_iso8601, DateTime};

use crate::constants::{
    AWS_QUERY_ENCODE_SET, X_AMZ_ALGORITHM, X_AMZ_CREDENTIAL, X_AMZ_DATE, X_AMZ_EXPIRES,
    X_AMZ_SIGNED_HEADERS,
};
use crate::{Credential, QueryJoin, SigningConfig, SigningScope};

/// Query parameters as `(name, value)` pairs, both already percent-encoded.
pub type QueryParams = Vec<(String, String)>;

/// Percent-encode a query name or value with the AWS UriEncode rules.
pub fn encode_query_component(s: &str) -> String {
    utf8_percent_encode(s, &AWS_QUERY_ENCODE_SET).to_string()
}

/// Canonicalize one parameter group into `k1=v1&k2=v2`.
///
/// Pairs are sorted by their encoded bytes, an empty group yields `""`.
pub fn canonicalize_query(params: &[(String, String)]) -> String {
    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    sorted.sort_unstable();

    let mut s = String::with_capacity(params.iter().map(|(k, v)| k.len() + v.len() + 2).sum());
    for (idx, (k, v)) in sorted.into_iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }
        s.push_str(k);
        s.push('=');
        s.push_str(v);
    }
    s
}

/// Build the combined canonical query of the operation and auth groups.
///
/// Without an auth group only the operation group is canonicalized. With
/// one, [`QueryJoin::TwoStage`] joins the independently sorted groups with
/// `&` while [`QueryJoin::Merged`] sorts all pairs together.
pub fn combine_query(
    op: &[(String, String)],
    auth: Option<&[(String, String)]>,
    join: QueryJoin,
) -> String {
    let Some(auth) = auth else {
        return canonicalize_query(op);
    };

    match join {
        QueryJoin::TwoStage => {
            let mut s = canonicalize_query(op);
            s.push('&');
            s.push_str(&canonicalize_query(auth));
            s
        }
        QueryJoin::Merged => {
            let all: QueryParams = op.iter().chain(auth.iter()).cloned().collect();
            canonicalize_query(&all)
        }
    }
}

/// Build the auth parameter group of a presigned url.
///
/// Values are returned encoded and ready for [`combine_query`].
pub fn presign_auth_params(
    config: &SigningConfig,
    cred: &Credential,
    scope: &SigningScope,
    time: DateTime,
    expires_in: Duration,
    signed_headers: &str,
) -> QueryParams {
    vec![
        (X_AMZ_ALGORITHM.to_string(), config.algorithm_id()),
        (
            X_AMZ_CREDENTIAL.to_string(),
            encode_query_component(&format!("{}/{}", cred.access_key_id, scope)),
        ),
        (X_AMZ_DATE.to_string(), format_iso8601(time)),
        (X_AMZ_EXPIRES.to_string(), expires_in.as_secs().to_string()),
        (
            X_AMZ_SIGNED_HEADERS.to_string(),
            encode_query_component(signed_headers),
        ),
    ]
}
