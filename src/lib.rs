//! Edgewise: bulk-synchronous property graph rewriting
//!
//! A per-vertex graph-rewrite step that reverses and relabels every edge
//! matching a configured label while leaving all other edges, vertex ids,
//! and properties untouched. The step runs as an emit → shuffle → assemble
//! protocol: each input vertex is exploded into tagged fragments keyed by
//! its own id, and each output vertex is rebuilt from its fragment group
//! under arbitrary arrival order.
//!
//! # Core Concepts
//!
//! - **Vertex / Edge**: property-graph elements with redundant directed
//!   adjacency (each logical edge is stored on both endpoints)
//! - **Emitter**: the map stage, turning one vertex into tagged fragments
//! - **Assembler**: the reduce stage, rebuilding one vertex from one
//!   key's fragment group
//! - **GroupingShuffle**: the group-by-key barrier between the stages
//!
//! # Example
//!
//! ```
//! use edgewise::{Action, Assembler, Emitter, TransposeConfig, Vertex};
//!
//! let emitter = Emitter::new(TransposeConfig::new("knows", "knownBy", Action::Drop));
//! let emission = emitter.emit(&Vertex::new(1u64));
//! let vertex = Assembler::new()
//!     .assemble(1u64.into(), emission.records.into_iter().map(|r| r.record))
//!     .unwrap();
//! assert_eq!(vertex.id, 1u64.into());
//! ```

mod graph;
pub mod pipeline;
pub mod transpose;

pub use graph::{Direction, Edge, Properties, PropertyValue, Vertex, VertexId};
pub use pipeline::{
    read_vertices, AtomicCounter, CollectingSink, Counter, GraphRecordSource, GroupingShuffle,
    JsonLinesSink, PipelineError, PipelineResult, TransposePipeline, TransposeReport, VertexSink,
};
pub use transpose::{
    Action, Assembler, Emission, Emitter, KeyedRecord, TaggedRecord, TransposeConfig,
    TransposeError, TransposeResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
