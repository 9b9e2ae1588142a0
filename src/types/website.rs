// Copyright 2026, The website-operator authors
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Desired state of a statically hosted website. The operator only ever reads
/// this object; it is created and mutated by API clients.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "web.example.com", version = "v1", kind = "WebSite")]
#[kube(namespaced, plural = "websites")]
#[serde(rename_all = "camelCase")]
pub struct WebSiteSpec {
    /// Page served as index.html
    pub html_content: String,
    /// Public hostname routed to the site
    pub hostname: String,
    /// nginx container image running the site
    pub image: String,
}
