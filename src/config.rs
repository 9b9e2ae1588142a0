// Copyright 2026, The website-operator authors
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{DEFAULT_ERROR_REQUEUE_SECS, DEFAULT_INGRESS_CLASS};
use anyhow::{Context, Result};
use std::env;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Ingress class assigned to generated Ingress objects
    pub ingress_class_name: String,
    /// Requeue delay after a failed reconcile pass
    pub error_requeue_secs: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let ingress_class_name = env::var("INGRESS_CLASS_NAME")
            .unwrap_or_else(|_| DEFAULT_INGRESS_CLASS.to_string());

        let error_requeue_secs = match env::var("ERROR_REQUEUE_SECS") {
            Ok(value) => value
                .parse()
                .context("ERROR_REQUEUE_SECS must be a number of seconds")?,
            Err(_) => DEFAULT_ERROR_REQUEUE_SECS,
        };

        Ok(Config {
            ingress_class_name,
            error_requeue_secs,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ingress_class_name: DEFAULT_INGRESS_CLASS.to_string(),
            error_requeue_secs: DEFAULT_ERROR_REQUEUE_SECS,
        }
    }
}
