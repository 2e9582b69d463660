//! Tagged fragment records exchanged between the emit and assemble phases

use super::{TransposeError, TransposeResult};
use crate::graph::{Edge, Vertex, VertexId};
use serde::{Deserialize, Serialize};

/// Legal wire tags, in the order the variants are declared
const LEGAL_TAGS: [&str; 3] = ["vertex", "outgoing_edge", "incoming_edge"];

/// One fragment of a vertex in flight between the phases.
///
/// Exactly one `Vertex` fragment and zero or more edge fragments are
/// emitted per input vertex. The discriminant is part of the wire form
/// (the `tag` field); an unrecognized tag on the wire surfaces as
/// [`TransposeError::InvalidTag`] during [`decode`](Self::decode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum TaggedRecord {
    /// A vertex's id and properties, carrying no adjacency
    Vertex(Vertex),
    /// An edge to attach to the output vertex's outgoing list
    OutgoingEdge(Edge),
    /// An edge to attach to the output vertex's incoming list
    IncomingEdge(Edge),
}

impl TaggedRecord {
    /// The wire tag of this record
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Vertex(_) => "vertex",
            Self::OutgoingEdge(_) => "outgoing_edge",
            Self::IncomingEdge(_) => "incoming_edge",
        }
    }

    /// Serialize the record to its wire form
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode a record from its wire form.
    ///
    /// An unrecognized `tag` discriminant is reported as
    /// [`TransposeError::InvalidTag`] naming the offending key; any other
    /// parse failure is [`TransposeError::MalformedRecord`].
    pub fn decode(key: VertexId, raw: &str) -> TransposeResult<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|source| TransposeError::MalformedRecord { key, source })?;

        match serde_json::from_value(value.clone()) {
            Ok(record) => Ok(record),
            Err(source) => match value.get("tag").and_then(|t| t.as_str()) {
                Some(tag) if !LEGAL_TAGS.contains(&tag) => Err(TransposeError::InvalidTag {
                    key,
                    tag: tag.to_string(),
                }),
                _ => Err(TransposeError::MalformedRecord { key, source }),
            },
        }
    }
}

/// A tagged record paired with the key the shuffle groups it by.
///
/// For the transposition step the key is always the id of the input vertex
/// the record was emitted from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedRecord {
    /// Grouping key
    pub key: VertexId,
    /// The fragment payload
    pub record: TaggedRecord,
}

impl KeyedRecord {
    pub fn new(key: VertexId, record: TaggedRecord) -> Self {
        Self { key, record }
    }
}
