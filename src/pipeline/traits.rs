//! Collaborator seams of the transposition step
//!
//! The step composes with an execution engine through four contracts: a
//! source of input vertices, a grouping shuffle, a sink for rebuilt
//! vertices, and an additive counter. The traits here are those contracts;
//! the in-memory implementations back the local driver and tests.

use crate::graph::Vertex;
use crate::transpose::TransposeError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use thiserror::Error;

/// Errors from driving the pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Transpose(#[from] TransposeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("sink error: {0}")]
    Sink(String),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Yields one vertex per emitter invocation.
pub trait GraphRecordSource: Send {
    /// The next input vertex, or `None` when the source is exhausted
    fn next_vertex(&mut self) -> Option<Vertex>;
}

impl<I> GraphRecordSource for I
where
    I: Iterator<Item = Vertex> + Send,
{
    fn next_vertex(&mut self) -> Option<Vertex> {
        self.next()
    }
}

/// Accepts completed output vertices, one per key.
#[async_trait]
pub trait VertexSink: Send + Sync {
    /// Take ownership of a rebuilt vertex. The vertex is never mutated
    /// after it is handed over.
    async fn accept(&self, vertex: Vertex) -> PipelineResult<()>;
}

/// In-memory sink that collects rebuilt vertices for inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    vertices: Mutex<Vec<Vertex>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices collected so far
    pub fn len(&self) -> usize {
        self.vertices.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the sink, returning the collected vertices
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices.into_inner().unwrap()
    }
}

#[async_trait]
impl VertexSink for CollectingSink {
    async fn accept(&self, vertex: Vertex) -> PipelineResult<()> {
        self.vertices.lock().unwrap().push(vertex);
        Ok(())
    }
}

/// Accepts non-negative increments; the final value is the sum over all
/// emitter invocations.
///
/// The accumulation is additive and order-independent, so an execution
/// engine that re-runs a partition at-least-once recomputes the same
/// total.
pub trait Counter: Send + Sync {
    /// Add `n` to the accumulator
    fn add(&self, n: u64);

    /// The accumulated value
    fn value(&self) -> u64;
}

/// Counter backed by an atomic accumulator
#[derive(Debug, Default)]
pub struct AtomicCounter(AtomicU64);

impl AtomicCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Counter for AtomicCounter {
    fn add(&self, n: u64) {
        self.0.fetch_add(n, Ordering::Relaxed);
    }

    fn value(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;

    #[test]
    fn atomic_counter_accumulates() {
        let counter = AtomicCounter::new();
        counter.add(2);
        counter.add(0);
        counter.add(3);
        assert_eq!(counter.value(), 5);
    }

    #[test]
    fn iterator_acts_as_record_source() {
        let vertices = vec![Vertex::new(1u64), Vertex::new(2u64)];
        let mut source = vertices.into_iter();

        assert_eq!(source.next_vertex().map(|v| v.id), Some(VertexId::new(1)));
        assert_eq!(source.next_vertex().map(|v| v.id), Some(VertexId::new(2)));
        assert!(source.next_vertex().is_none());
    }

    #[tokio::test]
    async fn collecting_sink_keeps_accepted_vertices() {
        let sink = CollectingSink::new();
        sink.accept(Vertex::new(1u64)).await.unwrap();
        sink.accept(Vertex::new(2u64)).await.unwrap();

        assert_eq!(sink.len(), 2);
        let ids: Vec<_> = sink.into_vertices().into_iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![VertexId::new(1), VertexId::new(2)]);
    }
}
