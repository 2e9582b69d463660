//! Label-scoped edge transposition
//!
//! The transform runs in two stages around a grouping shuffle. The
//! [`Emitter`] consumes one vertex at a time and emits tagged fragments,
//! all keyed by that vertex's id. The [`Assembler`] receives the unordered
//! group of fragments for one key and rebuilds a single output vertex.
//! Edges whose label matches the configured label are reversed and
//! relabeled; all other edges pass through untouched.

mod assembler;
mod config;
mod emitter;
mod record;

pub use assembler::Assembler;
pub use config::{Action, TransposeConfig};
pub use emitter::{Emission, Emitter};
pub use record::{KeyedRecord, TaggedRecord};

use crate::graph::VertexId;
use thiserror::Error;

/// Errors that can occur while transposing
#[derive(Debug, Error)]
pub enum TransposeError {
    /// A record arrived with a discriminant that is not a legal tag.
    /// Indicates upstream data corruption; fatal for the key's rebuild.
    #[error("tag '{tag}' is not a legal tag for key {key}")]
    InvalidTag { key: VertexId, tag: String },

    /// A record for the key could not be decoded at all
    #[error("malformed record for key {key}: {source}")]
    MalformedRecord {
        key: VertexId,
        #[source]
        source: serde_json::Error,
    },

    /// A key's record group contained no vertex fragment
    #[error("no vertex fragment arrived for key {0}")]
    MissingVertexFragment(VertexId),

    /// A required configuration option was not supplied
    #[error("missing required option '{0}'")]
    MissingOption(&'static str),

    /// The action option did not name a known action
    #[error("'{0}' is not a valid action (expected KEEP or DROP)")]
    InvalidAction(String),
}

/// Result type for transpose operations
pub type TransposeResult<T> = Result<T, TransposeError>;
