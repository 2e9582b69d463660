//! Grouping shuffle: the barrier between the emit and assemble phases

use crate::graph::VertexId;
use crate::transpose::{KeyedRecord, TaggedRecord};
use dashmap::DashMap;

/// Groups keyed records so that every record sharing a key is delivered
/// together to exactly one assemble invocation.
///
/// No ordering is guaranteed among records of one key; the assembler must
/// not depend on it. Collection is safe from concurrent emitters.
///
/// For the transposition step the shuffle is a pure fan-in: every record
/// an emitter produces carries the id of the vertex it was produced from,
/// so no record ever travels into a different vertex's group and the input
/// key set equals the output key set.
#[derive(Debug, Default)]
pub struct GroupingShuffle {
    groups: DashMap<VertexId, Vec<TaggedRecord>>,
}

impl GroupingShuffle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept one keyed record
    pub fn collect(&self, record: KeyedRecord) {
        self.groups
            .entry(record.key)
            .or_default()
            .push(record.record);
    }

    /// Accept a batch of keyed records
    pub fn collect_all(&self, records: impl IntoIterator<Item = KeyedRecord>) {
        for record in records {
            self.collect(record);
        }
    }

    /// Number of distinct keys collected so far
    pub fn key_count(&self) -> usize {
        self.groups.len()
    }

    /// End the emit phase and hand every key's group to the assemble
    /// phase. Consuming the shuffle is the synchronization barrier: no
    /// group is visible until every emitter has finished collecting.
    pub fn into_groups(self) -> impl Iterator<Item = (VertexId, Vec<TaggedRecord>)> {
        self.groups.into_iter()
    }
}
