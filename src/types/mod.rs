// Copyright 2026, The website-operator authors
// SPDX-License-Identifier: Apache-2.0

//! Custom resource definitions owned by the operator.

pub mod website;

pub use website::{WebSite, WebSiteSpec};
