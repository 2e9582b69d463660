//! Pipeline: collaborator contracts and a local bulk-synchronous driver

mod io;
mod runner;
mod shuffle;
mod traits;

pub use io::{read_vertices, JsonLinesSink};
pub use runner::{TransposePipeline, TransposeReport};
pub use shuffle::GroupingShuffle;
pub use traits::{
    AtomicCounter, CollectingSink, Counter, GraphRecordSource, PipelineError, PipelineResult,
    VertexSink,
};
