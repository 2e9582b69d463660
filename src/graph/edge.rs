//! Edge representation: directed, labeled, property-bearing

use super::vertex::{Properties, PropertyValue, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Direction of an edge relative to the vertex that owns the copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Edge leaves the owning vertex
    Out,
    /// Edge arrives at the owning vertex
    In,
}

impl Direction {
    /// The opposite direction
    pub fn reverse(&self) -> Self {
        match self {
            Self::Out => Self::In,
            Self::In => Self::Out,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Out => write!(f, "out"),
            Self::In => write!(f, "in"),
        }
    }
}

/// A directed edge between two vertex ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Vertex the edge leaves
    pub source: VertexId,
    /// Vertex the edge arrives at
    pub target: VertexId,
    /// Type of relationship (e.g., "knows", "created")
    pub label: String,
    /// Additional properties
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: Properties,
}

impl Edge {
    /// Create a new edge
    pub fn new(
        source: impl Into<VertexId>,
        target: impl Into<VertexId>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
            properties: HashMap::new(),
        }
    }

    /// Add a property to the edge
    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// The endpoint the edge exposes in the given direction
    pub fn endpoint(&self, direction: Direction) -> VertexId {
        match direction {
            Direction::Out => self.source,
            Direction::In => self.target,
        }
    }

    /// The transposed copy of this edge: endpoints swapped, label replaced,
    /// properties copied verbatim.
    pub fn reversed(&self, new_label: impl Into<String>) -> Self {
        Self {
            source: self.target,
            target: self.source,
            label: new_label.into(),
            properties: self.properties.clone(),
        }
    }
}
