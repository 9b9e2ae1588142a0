// Copyright 2026, The website-operator authors
// SPDX-License-Identifier: Apache-2.0

//! Pure builders for the four derived objects of a WebSite.
//!
//! The reconciler's field diffing relies on these being deterministic: the
//! same `(site, spec)` input always yields a structurally identical object.

use crate::constants::{
    labels, CONTAINER_NAME, CONTENT_KEY, CONTENT_MOUNT_PATH, CONTENT_VOLUME, HTTP_PORT,
    HTTP_PORT_NAME, INGRESS_PATH, WEBSITE_REPLICAS,
};
use crate::names;
use crate::types::website::WebSiteSpec;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    ConfigMap, ConfigMapVolumeSource, Container, ContainerPort, PodSpec, PodTemplateSpec, Service,
    ServicePort, ServiceSpec, Volume, VolumeMount,
};
use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, ServiceBackendPort,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

fn selector_labels() -> BTreeMap<String, String> {
    BTreeMap::from([(
        labels::APP_TYPE.to_string(),
        labels::APP_TYPE_WEBSITE.to_string(),
    )])
}

fn pod_labels(site: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            labels::APP_TYPE.to_string(),
            labels::APP_TYPE_WEBSITE.to_string(),
        ),
        (labels::EXPOSE.to_string(), names::deployment_name(site)),
    ])
}

/// One-replica nginx deployment serving the content ConfigMap.
///
/// The ConfigMap reference is by name only. It is fine for the ConfigMap to
/// not exist yet at creation time; the kubelet resolves it at pod start.
pub fn build_deployment(site: &str, spec: &WebSiteSpec) -> Deployment {
    Deployment {
        metadata: ObjectMeta {
            name: Some(names::deployment_name(site)),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(WEBSITE_REPLICAS),
            selector: LabelSelector {
                match_labels: Some(selector_labels()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(pod_labels(site)),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: CONTAINER_NAME.to_string(),
                        image: Some(spec.image.clone()),
                        ports: Some(vec![ContainerPort {
                            name: Some(HTTP_PORT_NAME.to_string()),
                            protocol: Some("TCP".to_string()),
                            container_port: HTTP_PORT,
                            ..Default::default()
                        }]),
                        volume_mounts: Some(vec![VolumeMount {
                            name: CONTENT_VOLUME.to_string(),
                            mount_path: CONTENT_MOUNT_PATH.to_string(),
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    volumes: Some(vec![Volume {
                        name: CONTENT_VOLUME.to_string(),
                        config_map: Some(ConfigMapVolumeSource {
                            name: names::config_map_name(site),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }]),
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// ConfigMap holding the served page under a single `index.html` key.
pub fn build_config_map(site: &str, spec: &WebSiteSpec) -> ConfigMap {
    ConfigMap {
        metadata: ObjectMeta {
            name: Some(names::config_map_name(site)),
            ..Default::default()
        },
        data: Some(BTreeMap::from([(
            CONTENT_KEY.to_string(),
            spec.html_content.clone(),
        )])),
        ..Default::default()
    }
}

/// Internal service fronting the site's pods, port 80 to 80. No field depends
/// on mutable WebSite spec data, so the reconciler never updates it.
pub fn build_service(site: &str) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(names::service_name(site)),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            selector: Some(pod_labels(site)),
            type_: Some("NodePort".to_string()),
            ports: Some(vec![ServicePort {
                name: Some("http".to_string()),
                protocol: Some("TCP".to_string()),
                port: HTTP_PORT,
                target_port: Some(IntOrString::Int(HTTP_PORT)),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Ingress routing the public hostname at `/` to the site's service.
pub fn build_ingress(site: &str, spec: &WebSiteSpec, ingress_class_name: &str) -> Ingress {
    Ingress {
        metadata: ObjectMeta {
            name: Some(names::ingress_name(site)),
            ..Default::default()
        },
        spec: Some(IngressSpec {
            ingress_class_name: Some(ingress_class_name.to_string()),
            rules: Some(vec![IngressRule {
                host: Some(spec.hostname.clone()),
                http: Some(HTTPIngressRuleValue {
                    paths: vec![HTTPIngressPath {
                        path: Some(INGRESS_PATH.to_string()),
                        path_type: "Prefix".to_string(),
                        backend: IngressBackend {
                            service: Some(IngressServiceBackend {
                                name: names::service_name(site),
                                port: Some(ServiceBackendPort {
                                    number: Some(HTTP_PORT),
                                    ..Default::default()
                                }),
                            }),
                            ..Default::default()
                        },
                    }],
                }),
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
