// Snapshot loading
//
// A snapshot is a JSON document listing meshed resources, unmeshed sources
// and the traffic edges between them. Neighbor sets for any focal resource
// are derived from the edge list on demand.

use super::{Neighbors, Resource, UnmeshedSource};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a snapshot file
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("cannot read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Directed traffic edge between two resource ids
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Edge {
    pub src: String,
    pub dst: String,
}

/// Point-in-time view of the mesh
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub unmeshed: Vec<UnmeshedSource>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Snapshot {
    /// Parse a snapshot from a JSON string
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Look up a meshed resource by id
    pub fn find(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id() == id)
    }

    /// Upstream and downstream meshed neighbors of `id`
    ///
    /// Each neighbor appears once per side, in the order its first edge is
    /// listed. Edges naming ids that are not meshed resources are skipped.
    pub fn neighbors_of(&self, id: &str) -> Neighbors {
        // First resource wins on duplicate ids, as with `find`
        let mut by_id: HashMap<String, &Resource> = HashMap::new();
        for r in &self.resources {
            by_id.entry(r.id()).or_insert(r);
        }
        let mut neighbors = Neighbors::default();
        let mut seen_up: HashSet<&str> = HashSet::new();
        let mut seen_down: HashSet<&str> = HashSet::new();

        for edge in &self.edges {
            if edge.dst == id && seen_up.insert(edge.src.as_str()) {
                match by_id.get(&edge.src) {
                    Some(r) => neighbors.upstream.push((*r).clone()),
                    None => debug!(src = %edge.src, "edge source is not a meshed resource"),
                }
            }
            if edge.src == id && seen_down.insert(edge.dst.as_str()) {
                match by_id.get(&edge.dst) {
                    Some(r) => neighbors.downstream.push((*r).clone()),
                    None => debug!(dst = %edge.dst, "edge destination is not a meshed resource"),
                }
            }
        }

        neighbors
    }

    /// Unmeshed sources with an edge into `id`
    pub fn unmeshed_sources_of(&self, id: &str) -> Vec<UnmeshedSource> {
        let senders: HashSet<&str> = self
            .edges
            .iter()
            .filter(|e| e.dst == id)
            .map(|e| e.src.as_str())
            .collect();

        self.unmeshed
            .iter()
            .filter(|u| senders.contains(u.id().as_str()))
            .cloned()
            .collect()
    }
}

/// Read and parse a snapshot file
pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot = Snapshot::from_json(&raw).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        resources = snapshot.resources.len(),
        unmeshed = snapshot.unmeshed.len(),
        edges = snapshot.edges.len(),
        "loaded snapshot"
    );

    Ok(snapshot)
}
