//! Vertex representation in the property graph

use super::edge::{Direction, Edge};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a vertex
///
/// An opaque 64-bit id, assigned by the graph source and immutable once
/// assigned. Serializes as a plain number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VertexId(u64);

impl VertexId {
    /// Create a VertexId from a raw 64-bit value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner 64-bit value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Typed property values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<PropertyValue>),
    Object(HashMap<String, PropertyValue>),
}

/// Properties collection
pub type Properties = HashMap<String, PropertyValue>;

/// A vertex in the property graph
///
/// Adjacency is stored redundantly: the same logical edge appears once in
/// its source vertex's outgoing list and once in its target vertex's
/// incoming list. Each copy is owned and rewritten independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier
    pub id: VertexId,
    /// Domain-specific properties
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: Properties,
    /// Edges leaving this vertex
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outgoing: Vec<Edge>,
    /// Edges arriving at this vertex
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incoming: Vec<Edge>,
}

impl Vertex {
    /// Create a new vertex with the given id and empty properties/adjacency
    pub fn new(id: impl Into<VertexId>) -> Self {
        Self {
            id: id.into(),
            properties: HashMap::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Add a property to the vertex
    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Add an edge in the given direction
    pub fn with_edge(mut self, direction: Direction, edge: Edge) -> Self {
        self.add_edge(direction, edge);
        self
    }

    /// Copy the vertex's id and properties, discarding its adjacency
    pub fn clone_id_and_properties(&self) -> Self {
        Self {
            id: self.id,
            properties: self.properties.clone(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Append an edge to the adjacency list for the given direction
    pub fn add_edge(&mut self, direction: Direction, edge: Edge) {
        match direction {
            Direction::Out => self.outgoing.push(edge),
            Direction::In => self.incoming.push(edge),
        }
    }

    /// The adjacency list for the given direction
    pub fn edges(&self, direction: Direction) -> &[Edge] {
        match direction {
            Direction::Out => &self.outgoing,
            Direction::In => &self.incoming,
        }
    }

    /// Total number of stored edge copies on this vertex
    pub fn edge_count(&self) -> usize {
        self.outgoing.len() + self.incoming.len()
    }

    /// Sort both adjacency lists into their canonical order.
    ///
    /// Edges are ordered by label, then source, then target. The sort is
    /// stable: parallel edges equal in all three keep their relative order.
    pub fn canonicalize_adjacency(&mut self) {
        let key = |e: &Edge| (e.label.clone(), e.source, e.target);
        self.outgoing.sort_by_key(key);
        self.incoming.sort_by_key(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_id_serializes_as_number() {
        let id = VertexId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");

        let back: VertexId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn clone_id_and_properties_discards_adjacency() {
        let vertex = Vertex::new(1u64)
            .with_property("name", PropertyValue::String("marko".into()))
            .with_edge(Direction::Out, Edge::new(1u64, 2u64, "knows"))
            .with_edge(Direction::In, Edge::new(3u64, 1u64, "created"));

        let clone = vertex.clone_id_and_properties();
        assert_eq!(clone.id, vertex.id);
        assert_eq!(clone.properties, vertex.properties);
        assert!(clone.outgoing.is_empty());
        assert!(clone.incoming.is_empty());
    }

    #[test]
    fn add_edge_routes_by_direction() {
        let mut vertex = Vertex::new(1u64);
        vertex.add_edge(Direction::Out, Edge::new(1u64, 2u64, "knows"));
        vertex.add_edge(Direction::In, Edge::new(2u64, 1u64, "knows"));

        assert_eq!(vertex.edges(Direction::Out).len(), 1);
        assert_eq!(vertex.edges(Direction::In).len(), 1);
        assert_eq!(vertex.edge_count(), 2);
    }

    #[test]
    fn canonicalize_orders_by_label_then_endpoints() {
        let mut vertex = Vertex::new(1u64)
            .with_edge(Direction::Out, Edge::new(1u64, 9u64, "knows"))
            .with_edge(Direction::Out, Edge::new(1u64, 2u64, "created"))
            .with_edge(Direction::Out, Edge::new(1u64, 3u64, "knows"));

        vertex.canonicalize_adjacency();

        let labels: Vec<_> = vertex
            .outgoing
            .iter()
            .map(|e| (e.label.as_str(), e.target.as_u64()))
            .collect();
        assert_eq!(labels, vec![("created", 2), ("knows", 3), ("knows", 9)]);
    }

    #[test]
    fn vertex_round_trips_through_json() {
        let vertex = Vertex::new(7u64)
            .with_property("age", PropertyValue::Int(29))
            .with_edge(
                Direction::Out,
                Edge::new(7u64, 8u64, "knows").with_property("weight", PropertyValue::Float(0.5)),
            );

        let json = serde_json::to_string(&vertex).unwrap();
        let back: Vertex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vertex);
    }
}
