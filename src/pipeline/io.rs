//! JSON-lines graph I/O
//!
//! One vertex document per line. This is the concrete source/sink pair the
//! CLI drives the pipeline with.

use super::traits::{PipelineResult, VertexSink};
use crate::graph::Vertex;
use async_trait::async_trait;
use std::io::{BufRead, Write};
use std::sync::Mutex;

/// Read all vertices from a JSON-lines reader. Blank lines are skipped.
pub fn read_vertices(reader: impl BufRead) -> PipelineResult<Vec<Vertex>> {
    let mut vertices = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        vertices.push(serde_json::from_str(&line)?);
    }
    Ok(vertices)
}

/// Sink that writes one vertex document per line.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> PipelineResult<W> {
        let mut writer = self.writer.into_inner().unwrap();
        writer.flush()?;
        Ok(writer)
    }
}

#[async_trait]
impl<W: Write + Send> VertexSink for JsonLinesSink<W> {
    async fn accept(&self, vertex: Vertex) -> PipelineResult<()> {
        let line = serde_json::to_string(&vertex)?;
        let mut writer = self.writer.lock().unwrap();
        writeln!(writer, "{line}")?;
        Ok(())
    }
}
