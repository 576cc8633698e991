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

use crate::constants::{ALGORITHM, SCHEME, TERMINATOR};

/// How the operation and auth query groups are combined.
///
/// Presigned urls sent to AWS must use [`QueryJoin::Merged`], AWS does
/// not verify signatures made over a two-stage query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryJoin {
    /// Canonicalize each group on its own and join them with `&`.
    ///
    /// An empty group leaves a stray leading or trailing `&`.
    #[default]
    TwoStage,
    /// Merge both groups and sort them once, as AWS itself does.
    Merged,
}

/// Config carries the literals of the signing scheme.
///
/// It is threaded into every step of the pipeline instead of being
/// read from globals. [`SigningConfig::default`] is the AWS profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningConfig {
    /// Scheme literal, also the prefix of the secret in the key chain.
    pub scheme: String,
    /// Algorithm literal.
    pub algorithm: String,
    /// Terminator of the scope.
    pub terminator: String,
    /// Combination of the query groups.
    pub query_join: QueryJoin,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            scheme: SCHEME.to_string(),
            algorithm: ALGORITHM.to_string(),
            terminator: TERMINATOR.to_string(),
            query_join: QueryJoin::default(),
        }
    }
}

impl SigningConfig {
    /// Set the scheme literal.
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    /// Set the algorithm literal.
    pub fn with_algorithm(mut self, algorithm: &str) -> Self {
        self.algorithm = algorithm.to_string();
        self
    }

    /// Set the scope terminator.
    pub fn with_terminator(mut self, terminator: &str) -> Self {
        self.terminator = terminator.to_string();
        self
    }

    /// Set how query groups are combined.
    pub fn with_query_join(mut self, join: QueryJoin) -> Self {
        self.query_join = join;
        self
    }

    /// Full algorithm id like `AWS4-HMAC-SHA256`.
    pub fn algorithm_id(&self) -> String {
        format!("{}-{}", self.scheme, self.algorithm)
    }
}
