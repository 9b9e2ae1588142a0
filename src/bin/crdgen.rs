// Copyright 2026, The website-operator authors
// SPDX-License-Identifier: Apache-2.0

//! Prints the WebSite CRD manifest.
//!
//! Usage: cargo run --bin crdgen > deploy/crd.yaml

use kube::CustomResourceExt;
use website_operator::types::WebSite;

fn main() -> anyhow::Result<()> {
    println!("---");
    print!("{}", serde_yaml::to_string(&WebSite::crd())?);
    Ok(())
}
