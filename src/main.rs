// Copyright 2026, The website-operator authors
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::info;

use website_operator::config::Config;
use website_operator::kubernetes::wait_for_website_crd;
use website_operator::reconcilers::WebsiteReconciler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting website operator");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: ingress_class_name={}",
        config.ingress_class_name
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    // Wait for the WebSite CRD before starting the reconciler
    info!("Waiting for WebSite CRD to become available...");
    wait_for_website_crd(&client).await?;

    info!("Starting website reconciler...");
    WebsiteReconciler::new(client, config).run().await
}
