// Copyright 2026, The website-operator authors
// SPDX-License-Identifier: Apache-2.0

//! Deterministic child object names derived from a WebSite name.
//!
//! No linkage between a WebSite and its children is persisted anywhere; every
//! reconcile and finalize pass recomputes the names from these functions, so
//! they must stay stable across releases.

const SITE_PREFIX: &str = "website-";

const DEPLOYMENT_SUFFIX: &str = "-deploy";
const CONFIG_MAP_SUFFIX: &str = "-cm";
const SERVICE_SUFFIX: &str = "-service";
const INGRESS_SUFFIX: &str = "-ingress";

/// Base name shared by all four children of a WebSite
pub fn site_name(website_name: &str) -> String {
    format!("{SITE_PREFIX}{website_name}")
}

pub fn deployment_name(site_name: &str) -> String {
    format!("{site_name}{DEPLOYMENT_SUFFIX}")
}

pub fn config_map_name(site_name: &str) -> String {
    format!("{site_name}{CONFIG_MAP_SUFFIX}")
}

pub fn service_name(site_name: &str) -> String {
    format!("{site_name}{SERVICE_SUFFIX}")
}

pub fn ingress_name(site_name: &str) -> String {
    format!("{site_name}{INGRESS_SUFFIX}")
}
