// Mesh data model
//
// Resources, neighbor collections and unmeshed sources as supplied by the
// snapshot loader. Also hosts the naming and linking helpers used when a
// resource is shown on screen.

pub mod snapshot;

pub use snapshot::{load_snapshot, Snapshot};

use serde::Deserialize;

/// Latency percentiles for a resource, in milliseconds
///
/// Only the tail percentile is shown; other percentiles in the snapshot are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Latency {
    #[serde(rename = "P99", default)]
    pub p99: Option<f64>,
}

/// A meshed service or workload with its golden metrics
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub name: String,
    /// Absent for resources that cannot be linked to a detail view
    #[serde(default)]
    pub namespace: Option<String>,
    /// Workload kind, e.g. "deployment"
    #[serde(default, alias = "type")]
    pub kind: Option<String>,
    /// Fraction of successful requests in [0, 1]; absent when there was no traffic
    #[serde(default)]
    pub success_rate: Option<f64>,
    /// Requests per second
    #[serde(default)]
    pub request_rate: Option<f64>,
    #[serde(default)]
    pub latency: Option<Latency>,
}

impl Resource {
    /// Create a bare resource with only a name
    #[cfg(test)]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Stable identifier: `namespace/kind/name` with absent parts omitted
    pub fn id(&self) -> String {
        resource_id(self.namespace.as_deref(), self.kind.as_deref(), &self.name)
    }

    /// P99 latency if reported
    pub fn p99(&self) -> Option<f64> {
        self.latency.as_ref().and_then(|l| l.p99)
    }
}

/// A traffic source known to talk to a resource but without mesh telemetry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UnmeshedSource {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default, alias = "type")]
    pub kind: Option<String>,
}

impl UnmeshedSource {
    pub fn id(&self) -> String {
        resource_id(self.namespace.as_deref(), self.kind.as_deref(), &self.name)
    }

    pub fn display_name(&self) -> String {
        format_display_name(self.kind.as_deref(), &self.name)
    }
}

/// Upstream and downstream neighbors of a focal resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Neighbors {
    /// Resources sending traffic to the focal resource
    pub upstream: Vec<Resource>,
    /// Resources receiving traffic from the focal resource
    pub downstream: Vec<Resource>,
}

/// Navigable link to a resource's detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    /// Text shown for the link
    pub label: String,
    /// Dashboard path of the detail view
    pub href: String,
    /// Id of the linked resource, used to refocus the graph
    pub target: String,
}

fn resource_id(namespace: Option<&str>, kind: Option<&str>, name: &str) -> String {
    [namespace, kind, Some(name)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("/")
}

/// Short form of well-known workload kinds
pub fn short_kind(kind: &str) -> &str {
    match kind {
        "deployment" => "deploy",
        "pod" => "po",
        "namespace" => "ns",
        "replicationcontroller" => "rc",
        "statefulset" => "sts",
        "daemonset" => "ds",
        "service" => "svc",
        "cronjob" => "cj",
        "authority" => "au",
        other => other,
    }
}

fn format_display_name(kind: Option<&str>, name: &str) -> String {
    match kind {
        Some(kind) if !kind.is_empty() => format!("{}/{}", short_kind(kind), name),
        _ => name.to_string(),
    }
}

/// Human readable name for a resource, e.g. "deploy/web"
pub fn display_name(resource: &Resource) -> String {
    format_display_name(resource.kind.as_deref(), &resource.name)
}

/// Build a link to the resource's detail view
///
/// Returns `None` when the resource has no namespace, in which case callers
/// render the label as plain text.
pub fn resource_link(resource: &Resource, label: &str) -> Option<ResourceLink> {
    let namespace = resource.namespace.as_deref()?;
    let kind = resource.kind.as_deref().unwrap_or("resource");
    Some(ResourceLink {
        label: label.to_string(),
        href: format!("/namespaces/{}/{}s/{}", namespace, kind, resource.name),
        target: resource.id(),
    })
}
