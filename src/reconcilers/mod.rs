// Copyright 2026, The website-operator authors
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes reconcilers that react to watch events.

pub mod website;

pub use website::WebsiteReconciler;
