//! Assembler: the reduce stage of the transposition

use super::record::TaggedRecord;
use super::{TransposeError, TransposeResult};
use crate::graph::{Vertex, VertexId};

/// Rebuilds one output vertex from the unordered group of tagged records
/// sharing its key.
///
/// The assembler must be correct under any permutation of the group: the
/// vertex fragment overwrites properties wherever it appears in the stream
/// (should more than one arrive, the last applied wins; a tolerance,
/// not a retry path), edge fragments append to the matching
/// adjacency list, and the adjacency is put into canonical order before
/// the vertex is handed out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler;

impl Assembler {
    pub fn new() -> Self {
        Self
    }

    /// Reconstruct the vertex for `key` from its record group.
    ///
    /// Fails with [`TransposeError::MissingVertexFragment`] when the group
    /// contains no vertex fragment; an incomplete vertex is never emitted.
    pub fn assemble(
        &self,
        key: VertexId,
        records: impl IntoIterator<Item = TaggedRecord>,
    ) -> TransposeResult<Vertex> {
        let mut vertex = Vertex::new(key);
        let mut saw_vertex_fragment = false;

        for record in records {
            match record {
                TaggedRecord::Vertex(fragment) => {
                    vertex.properties = fragment.properties;
                    saw_vertex_fragment = true;
                }
                TaggedRecord::OutgoingEdge(edge) => vertex.outgoing.push(edge),
                TaggedRecord::IncomingEdge(edge) => vertex.incoming.push(edge),
            }
        }

        if !saw_vertex_fragment {
            return Err(TransposeError::MissingVertexFragment(key));
        }

        vertex.canonicalize_adjacency();
        Ok(vertex)
    }
}
