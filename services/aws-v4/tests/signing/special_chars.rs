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

use super::{example_credential, init_signing_test, utc};
use anyhow::Result;
use pretty_assertions::assert_eq;
use sigv4::{encode_query_component, PayloadHash, RequestSigner, SigningRequest};

fn canonical_path_of(url: &str) -> Result<String> {
    let signer = RequestSigner::new(url, "HEAD", "s3", "test")?;
    let out = signer.sign(
        &SigningRequest::new(PayloadHash::unsigned()),
        &example_credential(),
        utc(2022, 3, 13, 7, 20, 4),
    )?;

    let path = out
        .canonical_request
        .lines()
        .nth(1)
        .expect("canonical request must have a path line")
        .to_string();
    Ok(path)
}

#[test]
fn test_path_with_special_characters() -> Result<()> {
    init_signing_test();

    let cases = vec![
        ("http://127.0.0.1/a%20b.txt", "/a%20b.txt"),
        (
            "http://127.0.0.1/!%40%23%24%25%5E%26*()_%2B-%3D%3B%3A'%3E%3C%2C/.txt",
            "/%21%40%23%24%25%5E%26%2A%28%29_%2B-%3D%3B%3A%27%3E%3C%2C/.txt",
        ),
        ("http://127.0.0.1/%E4%B8%AD%E6%96%87", "/%E4%B8%AD%E6%96%87"),
        ("http://127.0.0.1/dir/~file-1.2_3", "/dir/~file-1.2_3"),
    ];

    for (url, expected) in cases {
        assert_eq!(canonical_path_of(url)?, expected, "url: {url}");
    }

    Ok(())
}

#[test]
fn test_query_with_encoded_values() -> Result<()> {
    init_signing_test();

    let signer = RequestSigner::new("http://127.0.0.1/bucket", "GET", "s3", "test")?;
    let req = SigningRequest::new(PayloadHash::unsigned())
        .with_query("prefix", encode_query_component("dir/中 文"))
        .with_query("list-type", "2");

    let out = signer.sign(&req, &example_credential(), utc(2022, 3, 13, 7, 20, 4))?;
    assert_eq!(
        out.canonical_query,
        "list-type=2&prefix=dir%2F%E4%B8%AD%20%E6%96%87"
    );

    Ok(())
}
