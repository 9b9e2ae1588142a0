// Copyright 2026, The website-operator authors
// SPDX-License-Identifier: Apache-2.0

//! CRD availability checking utilities

use crate::constants::crd::{POLL_INTERVAL_SECS, POLL_MAX_INTERVAL_SECS};
use crate::error::Result;
use kube::{discovery::Discovery, Client};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

const WEBSITE_GROUP: &str = "web.example.com";
const WEBSITE_KIND: &str = "WebSite";
const WEBSITE_VERSION: &str = "v1";

/// Wait for the WebSite CRD to become available in the cluster.
/// This uses exponential backoff starting at POLL_INTERVAL_SECS seconds.
pub async fn wait_for_website_crd(client: &Client) -> Result<()> {
    let mut interval = POLL_INTERVAL_SECS;

    loop {
        match check_website_crd_exists(client).await {
            Ok(true) => {
                info!("WebSite CRD (web.example.com/v1) is available");
                return Ok(());
            }
            Ok(false) => {
                info!(
                    "WebSite CRD (web.example.com/v1) not yet available, waiting {} seconds...",
                    interval
                );
            }
            Err(e) => {
                warn!(
                    "Error checking for WebSite CRD: {}, retrying in {} seconds...",
                    e, interval
                );
            }
        }

        sleep(Duration::from_secs(interval)).await;

        // Exponential backoff with max cap
        interval = (interval * 2).min(POLL_MAX_INTERVAL_SECS);
    }
}

/// Check if the WebSite CRD exists by attempting to discover it.
async fn check_website_crd_exists(client: &Client) -> Result<bool> {
    let discovery = Discovery::new(client.clone())
        .filter(&[WEBSITE_GROUP])
        .run()
        .await?;

    for group in discovery.groups() {
        if group.name() == WEBSITE_GROUP {
            for (ar, _) in group.recommended_resources() {
                if ar.kind == WEBSITE_KIND && ar.version == WEBSITE_VERSION {
                    return Ok(true);
                }
            }
        }
    }

    Ok(false)
}
