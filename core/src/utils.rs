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

//! Utility functions and types.

use std::fmt::Debug;

/// Redacts secret values in `Debug` output.
///
/// - Public identifiers (like access key ids) keep their first and last
///   three characters once they are at least 12 characters long.
/// - Secrets never show any character, only whether they are empty.
pub enum Redact<'a> {
    /// A public identifier that may be partially shown.
    Partial(&'a str),
    /// Secret material that must stay opaque.
    Secret(&'a [u8]),
}

impl<'a> Redact<'a> {
    /// Redact secret material completely.
    pub fn secret(value: &'a [u8]) -> Self {
        Redact::Secret(value)
    }
}

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact::Partial(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact::Partial(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Redact::Secret(v) if v.is_empty() => f.write_str("EMPTY"),
            Redact::Secret(_) => f.write_str("***"),
            Redact::Partial(v) => {
                let length = v.len();
                if length == 0 {
                    f.write_str("EMPTY")
                } else if length < 12 || !v.is_char_boundary(3) || !v.is_char_boundary(length - 3)
                {
                    f.write_str("***")
                } else {
                    f.write_str(&v[..3])?;
                    f.write_str("***")?;
                    f.write_str(&v[length - 3..])
                }
            }
        }
    }
}
