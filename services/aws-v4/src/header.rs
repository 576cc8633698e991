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

use http::header;
use http::HeaderMap;
use http::HeaderValue;
use sigv4_core::Result;

/// Headers after canonicalization.
#[derive(Debug, Clone)]
pub struct CanonicalHeaders {
    /// Input headers plus `host`, the caller's map is left untouched.
    pub headers: HeaderMap,
    /// Sorted lower-cased names joined by `;`.
    pub signed_headers: String,
    /// One `name:value\n` line per signed header.
    pub canonical_headers: String,
}

/// Canonicalize headers with the given `host` merged in.
///
/// `HeaderMap` names are lower-cased already, so duplicate names (in any
/// case) end up under one key and their values are joined by `,`.
pub fn canonicalize_headers(headers: &HeaderMap, host: &str) -> Result<CanonicalHeaders> {
    let mut merged = headers.clone();
    // Insert replaces every value the caller may have set.
    merged.insert(header::HOST, HeaderValue::from_str(host)?);

    let mut names = merged.keys().map(|k| k.as_str()).collect::<Vec<&str>>();
    names.sort_unstable();

    // 256 is specially chosen to avoid reallocation for most requests.
    let mut block = String::with_capacity(256);
    for name in names.iter() {
        block.push_str(name);
        block.push(':');
        for (idx, value) in merged.get_all(*name).iter().enumerate() {
            if idx != 0 {
                block.push(',');
            }
            block.push_str(normalize_header_value(value)?);
        }
        block.push('\n');
    }
    let signed_headers = names.join(";");

    Ok(CanonicalHeaders {
        headers: merged,
        signed_headers,
        canonical_headers: block,
    })
}

/// Trim surrounding whitespace, inner whitespace is kept as is.
fn normalize_header_value(value: &HeaderValue) -> Result<&str> {
    Ok(value.to_str()?.trim_matches(|c: char| c == ' ' || c == '\t'))
}
