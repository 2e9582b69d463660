//! Emitter: the map stage of the transposition

use super::config::{Action, TransposeConfig};
use super::record::{KeyedRecord, TaggedRecord};
use crate::graph::{Direction, Edge, Vertex};

/// Everything emitted for one input vertex: the tagged records plus the
/// number of edge copies that were transposed while producing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Emission {
    /// Tagged records, all keyed by the input vertex's id
    pub records: Vec<KeyedRecord>,
    /// Edge copies reversed in this emission
    pub transposed: u64,
}

/// Consumes one vertex at a time and emits tagged fragments keyed by that
/// vertex's id.
///
/// The emitter is a pure function of its configuration and input: it shares
/// no state across invocations, so any number of them can run concurrently
/// over disjoint partitions of the input.
pub struct Emitter {
    config: TransposeConfig,
}

impl Emitter {
    /// Create an emitter with an explicit immutable configuration
    pub fn new(config: TransposeConfig) -> Self {
        Self { config }
    }

    /// Emit the tagged fragments for one input vertex.
    ///
    /// The vertex's id and properties go out first as a vertex fragment.
    /// Every edge copy then goes out as an edge fragment: non-matching
    /// edges unchanged in their own direction, matching edges reversed and
    /// relabeled into the opposite direction (preceded by the original
    /// when the action is [`Action::Keep`]).
    pub fn emit(&self, vertex: &Vertex) -> Emission {
        let mut emission = Emission::default();
        emission.records.push(KeyedRecord::new(
            vertex.id,
            TaggedRecord::Vertex(vertex.clone_id_and_properties()),
        ));

        self.emit_edges(vertex, Direction::Out, &mut emission);
        self.emit_edges(vertex, Direction::In, &mut emission);
        emission
    }

    fn emit_edges(&self, vertex: &Vertex, direction: Direction, emission: &mut Emission) {
        for edge in vertex.edges(direction) {
            if edge.label == self.config.label {
                if self.config.action == Action::Keep {
                    emission
                        .records
                        .push(KeyedRecord::new(vertex.id, tagged(direction, edge.clone())));
                }
                // The reversed copy points the other way from this
                // vertex's perspective, so it lands in the opposite list.
                let reversed = edge.reversed(self.config.new_label.as_str());
                emission
                    .records
                    .push(KeyedRecord::new(vertex.id, tagged(direction.reverse(), reversed)));
                emission.transposed += 1;
            } else {
                emission
                    .records
                    .push(KeyedRecord::new(vertex.id, tagged(direction, edge.clone())));
            }
        }
    }
}

/// Wrap an edge in the fragment variant for the given direction
fn tagged(direction: Direction, edge: Edge) -> TaggedRecord {
    match direction {
        Direction::Out => TaggedRecord::OutgoingEdge(edge),
        Direction::In => TaggedRecord::IncomingEdge(edge),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{PropertyValue, VertexId};

    fn knows_config(action: Action) -> TransposeConfig {
        TransposeConfig::new("knows", "knownBy", action)
    }

    fn vertex_with_outgoing_knows() -> Vertex {
        Vertex::new(1u64)
            .with_property("name", PropertyValue::String("marko".into()))
            .with_edge(
                Direction::Out,
                Edge::new(1u64, 2u64, "knows").with_property("since", PropertyValue::Int(2009)),
            )
    }

    // === Scenario: matching outgoing edge under DROP ===
    #[test]
    fn matching_outgoing_edge_dropped_and_reversed() {
        let emitter = Emitter::new(knows_config(Action::Drop));
        let emission = emitter.emit(&vertex_with_outgoing_knows());

        assert_eq!(emission.transposed, 1);
        assert_eq!(emission.records.len(), 2);

        // Vertex fragment carries id + properties, no adjacency
        match &emission.records[0].record {
            TaggedRecord::Vertex(v) => {
                assert_eq!(v.id, VertexId::new(1));
                assert!(v.properties.contains_key("name"));
                assert_eq!(v.edge_count(), 0);
            }
            other => panic!("expected vertex fragment first, got {other:?}"),
        }

        // The reversed edge arrives as an incoming fragment
        match &emission.records[1].record {
            TaggedRecord::IncomingEdge(e) => {
                assert_eq!(e.source, VertexId::new(2));
                assert_eq!(e.target, VertexId::new(1));
                assert_eq!(e.label, "knownBy");
                assert_eq!(
                    e.properties.get("since"),
                    Some(&PropertyValue::Int(2009))
                );
            }
            other => panic!("expected incoming edge fragment, got {other:?}"),
        }
    }

    // === Scenario: matching outgoing edge under KEEP ===
    #[test]
    fn matching_outgoing_edge_kept_alongside_reversal() {
        let emitter = Emitter::new(knows_config(Action::Keep));
        let emission = emitter.emit(&vertex_with_outgoing_knows());

        assert_eq!(emission.transposed, 1);
        assert_eq!(emission.records.len(), 3);

        // Original survives unchanged in its own direction
        match &emission.records[1].record {
            TaggedRecord::OutgoingEdge(e) => {
                assert_eq!(e.label, "knows");
                assert_eq!(e.source, VertexId::new(1));
                assert_eq!(e.target, VertexId::new(2));
            }
            other => panic!("expected outgoing edge fragment, got {other:?}"),
        }
        assert!(matches!(
            &emission.records[2].record,
            TaggedRecord::IncomingEdge(e) if e.label == "knownBy"
        ));
    }

    // === Scenario: non-matching edge passes through untouched ===
    #[test]
    fn non_matching_edge_unchanged_and_uncounted() {
        let emitter = Emitter::new(knows_config(Action::Drop));
        let original = Edge::new(1u64, 4u64, "created");
        let vertex = Vertex::new(1u64).with_edge(Direction::Out, original.clone());

        let emission = emitter.emit(&vertex);

        assert_eq!(emission.transposed, 0);
        assert_eq!(emission.records.len(), 2);
        assert!(matches!(
            &emission.records[1].record,
            TaggedRecord::OutgoingEdge(e) if *e == original
        ));
    }

    // === Scenario: matching incoming edge mirrors the outgoing case ===
    #[test]
    fn matching_incoming_edge_reversed_to_outgoing() {
        let emitter = Emitter::new(knows_config(Action::Drop));
        let vertex =
            Vertex::new(2u64).with_edge(Direction::In, Edge::new(1u64, 2u64, "knows"));

        let emission = emitter.emit(&vertex);

        assert_eq!(emission.transposed, 1);
        match &emission.records[1].record {
            TaggedRecord::OutgoingEdge(e) => {
                assert_eq!(e.source, VertexId::new(2));
                assert_eq!(e.target, VertexId::new(1));
                assert_eq!(e.label, "knownBy");
            }
            other => panic!("expected outgoing edge fragment, got {other:?}"),
        }
    }

    // === Scenario: every record carries the input vertex's id as key ===
    #[test]
    fn all_records_keyed_by_input_vertex() {
        let emitter = Emitter::new(knows_config(Action::Keep));
        let vertex = Vertex::new(5u64)
            .with_edge(Direction::Out, Edge::new(5u64, 6u64, "knows"))
            .with_edge(Direction::Out, Edge::new(5u64, 7u64, "created"))
            .with_edge(Direction::In, Edge::new(8u64, 5u64, "knows"));

        let emission = emitter.emit(&vertex);

        assert!(emission
            .records
            .iter()
            .all(|r| r.key == VertexId::new(5)));
        // 1 vertex + (keep + reversal) + passthrough + (keep + reversal)
        assert_eq!(emission.records.len(), 6);
        assert_eq!(emission.transposed, 2);
    }

    // === Scenario: vertex with no edges emits only its fragment ===
    #[test]
    fn isolated_vertex_emits_single_fragment() {
        let emitter = Emitter::new(knows_config(Action::Drop));
        let emission = emitter.emit(&Vertex::new(9u64));

        assert_eq!(emission.records.len(), 1);
        assert_eq!(emission.transposed, 0);
        assert!(matches!(
            &emission.records[0].record,
            TaggedRecord::Vertex(v) if v.id == VertexId::new(9)
        ));
    }
}
