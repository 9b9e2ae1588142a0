// Copyright 2026, The website-operator authors
// SPDX-License-Identifier: Apache-2.0

//! WebSite reconciler - converges the four derived objects of each WebSite.
//!
//! The engine is stateless: every pass re-reads the WebSite and its children,
//! recomputes child names and compares only the spec-controlled fields, so a
//! pass aborted mid-way is safely resumed by the next delivery.

use crate::config::Config;
use crate::constants::CONTENT_KEY;
use crate::error::{is_already_exists, is_not_found, Error, Result};
use crate::types::website::{WebSite, WebSiteSpec};
use crate::{names, resources};
use futures::StreamExt;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{ConfigMap, Service};
use k8s_openapi::api::networking::v1::Ingress;
use kube::{
    api::{DeleteParams, PostParams},
    runtime::{controller::Action, Controller},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

pub struct WebsiteReconciler {
    client: Client,
    config: Config,
}

impl WebsiteReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let websites: Api<WebSite> = Api::all(self.client.clone());
        let context = Arc::new(self);

        Controller::new(websites, WatcherConfig::default())
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled website: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }

    /// One convergence pass for a single WebSite identity.
    ///
    /// A missing WebSite means it was deleted; all derived objects are torn
    /// down. Otherwise each child is created or patched toward the spec, in a
    /// fixed order, aborting on the first unexpected error.
    #[instrument(skip(self), fields(website = %format!("{namespace}/{name}")))]
    pub async fn reconcile_site(&self, namespace: &str, name: &str) -> Result<()> {
        let websites: Api<WebSite> = Api::namespaced(self.client.clone(), namespace);
        let website = match websites.get(name).await {
            Ok(website) => website,
            Err(err) if is_not_found(&err) => {
                return self.finalize_site(namespace, name).await;
            }
            Err(err) => return Err(err.into()),
        };

        let site = names::site_name(name);
        self.ensure_deployment(namespace, &site, &website.spec).await?;
        self.ensure_config_map(namespace, &site, &website.spec).await?;
        self.ensure_service(namespace, &site).await?;
        self.ensure_ingress(namespace, &site, &website.spec).await?;

        Ok(())
    }

    async fn ensure_deployment(&self, namespace: &str, site: &str, spec: &WebSiteSpec) -> Result<()> {
        let deployments: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        let name = names::deployment_name(site);

        let outcome = ensure(
            &deployments,
            &name,
            || resources::build_deployment(site, spec),
            |deployment| reconcile_deployment_image(deployment, spec),
        )
        .await?;

        match outcome {
            EnsureOutcome::Created => info!("new deployment created for website"),
            EnsureOutcome::Updated => info!("deployment image updated"),
            EnsureOutcome::Unchanged => debug!("deployment up to date"),
        }
        Ok(())
    }

    async fn ensure_config_map(&self, namespace: &str, site: &str, spec: &WebSiteSpec) -> Result<()> {
        let config_maps: Api<ConfigMap> = Api::namespaced(self.client.clone(), namespace);
        let name = names::config_map_name(site);

        let outcome = ensure(
            &config_maps,
            &name,
            || resources::build_config_map(site, spec),
            |config_map| reconcile_config_map_content(config_map, spec),
        )
        .await?;

        match outcome {
            EnsureOutcome::Created => info!("new configmap created for website"),
            EnsureOutcome::Updated => info!("website contents updated via configmap"),
            EnsureOutcome::Unchanged => debug!("configmap up to date"),
        }
        Ok(())
    }

    async fn ensure_service(&self, namespace: &str, site: &str) -> Result<()> {
        let services: Api<Service> = Api::namespaced(self.client.clone(), namespace);
        let name = names::service_name(site);

        // No service field derives from mutable spec data: create once, never update
        let outcome = ensure(
            &services,
            &name,
            || resources::build_service(site),
            |_service| false,
        )
        .await?;

        match outcome {
            EnsureOutcome::Created => info!("new service created for website"),
            EnsureOutcome::Updated | EnsureOutcome::Unchanged => debug!("service up to date"),
        }
        Ok(())
    }

    async fn ensure_ingress(&self, namespace: &str, site: &str, spec: &WebSiteSpec) -> Result<()> {
        let ingresses: Api<Ingress> = Api::namespaced(self.client.clone(), namespace);
        let name = names::ingress_name(site);
        let ingress_class = self.config.ingress_class_name.as_str();

        let outcome = ensure(
            &ingresses,
            &name,
            || resources::build_ingress(site, spec, ingress_class),
            |ingress| reconcile_ingress_host(ingress, spec),
        )
        .await?;

        match outcome {
            EnsureOutcome::Created => {
                info!(hostname = %spec.hostname, "new ingress created for website")
            }
            EnsureOutcome::Updated => info!(hostname = %spec.hostname, "ingress host updated"),
            EnsureOutcome::Unchanged => debug!("ingress up to date"),
        }
        Ok(())
    }

    /// Delete all four derived objects of a WebSite that no longer exists.
    ///
    /// Children that are already gone count as success, so a finalize that
    /// crashed half-way completes cleanly when re-delivered.
    #[instrument(skip(self), fields(website = %format!("{namespace}/{name}")))]
    pub async fn finalize_site(&self, namespace: &str, name: &str) -> Result<()> {
        let site = names::site_name(name);

        let deployments: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        if delete_ignore_missing(&deployments, &names::deployment_name(&site)).await? {
            info!("finalized deployment for website");
        }

        let config_maps: Api<ConfigMap> = Api::namespaced(self.client.clone(), namespace);
        if delete_ignore_missing(&config_maps, &names::config_map_name(&site)).await? {
            info!("finalized configmap for website");
        }

        let services: Api<Service> = Api::namespaced(self.client.clone(), namespace);
        if delete_ignore_missing(&services, &names::service_name(&site)).await? {
            info!("finalized service for website");
        }

        let ingresses: Api<Ingress> = Api::namespaced(self.client.clone(), namespace);
        if delete_ignore_missing(&ingresses, &names::ingress_name(&site)).await? {
            info!("finalized ingress for website");
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnsureOutcome {
    Created,
    Updated,
    Unchanged,
}

/// Converge one derived object: create it from `build` when absent, otherwise
/// let `converge` patch the spec-controlled fields in place and update only
/// when something drifted. The fetched object is mutated as-is, keeping its
/// resourceVersion so the update stays an optimistic-concurrency write.
async fn ensure<K, B, C>(api: &Api<K>, name: &str, build: B, converge: C) -> Result<EnsureOutcome>
where
    K: Clone + DeserializeOwned + Serialize + Debug,
    B: FnOnce() -> K,
    C: FnOnce(&mut K) -> bool,
{
    match api.get(name).await {
        Ok(mut found) => {
            if converge(&mut found) {
                api.replace(name, &PostParams::default(), &found).await?;
                Ok(EnsureOutcome::Updated)
            } else {
                Ok(EnsureOutcome::Unchanged)
            }
        }
        Err(err) if is_not_found(&err) => {
            let desired = build();
            match api.create(&PostParams::default(), &desired).await {
                Ok(_) => Ok(EnsureOutcome::Created),
                // Benign race: a concurrent pass created it first
                Err(err) if is_already_exists(&err) => Ok(EnsureOutcome::Unchanged),
                Err(err) => Err(err.into()),
            }
        }
        Err(err) => Err(err.into()),
    }
}

/// Delete an object, treating "already absent" as success. Returns whether
/// the object existed.
async fn delete_ignore_missing<K>(api: &Api<K>, name: &str) -> Result<bool>
where
    K: Clone + DeserializeOwned + Debug,
{
    match api.delete(name, &DeleteParams::default()).await {
        Ok(_) => Ok(true),
        Err(err) if is_not_found(&err) => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// Align the first container's image with the spec. Only the image field is
/// touched; externally managed fields on the deployment are left alone.
fn reconcile_deployment_image(deployment: &mut Deployment, spec: &WebSiteSpec) -> bool {
    let Some(container) = deployment
        .spec
        .as_mut()
        .and_then(|s| s.template.spec.as_mut())
        .and_then(|pod| pod.containers.first_mut())
    else {
        return false;
    };

    if container.image.as_deref() == Some(spec.image.as_str()) {
        return false;
    }
    container.image = Some(spec.image.clone());
    true
}

/// Align the index.html entry with the spec, leaving other keys alone.
fn reconcile_config_map_content(config_map: &mut ConfigMap, spec: &WebSiteSpec) -> bool {
    let data = config_map.data.get_or_insert_with(BTreeMap::new);
    if data.get(CONTENT_KEY).map(String::as_str) == Some(spec.html_content.as_str()) {
        return false;
    }
    data.insert(CONTENT_KEY.to_string(), spec.html_content.clone());
    true
}

/// Align the first rule's host with the spec hostname.
fn reconcile_ingress_host(ingress: &mut Ingress, spec: &WebSiteSpec) -> bool {
    let Some(rule) = ingress
        .spec
        .as_mut()
        .and_then(|s| s.rules.as_mut())
        .and_then(|rules| rules.first_mut())
    else {
        return false;
    };

    if rule.host.as_deref() == Some(spec.hostname.as_str()) {
        return false;
    }
    rule.host = Some(spec.hostname.clone());
    true
}

async fn reconcile(website: Arc<WebSite>, ctx: Arc<WebsiteReconciler>) -> Result<Action> {
    let namespace = website.namespace().unwrap_or_default();
    let name = website.name_any();

    ctx.reconcile_site(&namespace, &name).await?;

    // Wait for the next change - the watcher fires again on edits and deletion
    Ok(Action::await_change())
}

fn error_policy(_website: Arc<WebSite>, error: &Error, ctx: Arc<WebsiteReconciler>) -> Action {
    error!("Reconciliation error: {}", error);
    Action::requeue(Duration::from_secs(ctx.config.error_requeue_secs))
}
