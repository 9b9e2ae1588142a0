// Copyright 2026, The website-operator authors
// SPDX-License-Identifier: Apache-2.0

/// Labels stamped onto website pods. The Service selector matches on these.
pub mod labels {
    pub const APP_TYPE: &str = "apptype";
    pub const APP_TYPE_WEBSITE: &str = "website";
    /// Names the deployment a Service exposes, scoping each Service to the
    /// pods of a single site.
    pub const EXPOSE: &str = "web.example.com/expose";
}

/// Port nginx listens on inside the website container
pub const HTTP_PORT: i32 = 80;
pub const HTTP_PORT_NAME: &str = "http-svc-port";
pub const CONTAINER_NAME: &str = "website";
pub const WEBSITE_REPLICAS: i32 = 1;

/// Key in the content ConfigMap holding the served page
pub const CONTENT_KEY: &str = "index.html";
/// Volume wiring between the content ConfigMap and the nginx html root
pub const CONTENT_VOLUME: &str = "contents";
pub const CONTENT_MOUNT_PATH: &str = "/usr/share/nginx/html";

pub const INGRESS_PATH: &str = "/";
pub const DEFAULT_INGRESS_CLASS: &str = "nginx";

/// Requeue delay after a failed reconcile, overridable via ERROR_REQUEUE_SECS
pub const DEFAULT_ERROR_REQUEUE_SECS: u64 = 60;

/// CRD polling configuration
pub mod crd {
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}
