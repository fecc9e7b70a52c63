use std::collections::HashMap;

use tracing::warn;

use crate::record::Record;

/// The complete result of one sweep. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl Snapshot {
    pub fn new(records: Vec<Record>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            let key = record.key();
            if index.contains_key(&key) {
                warn!(%key, "Duplicate record key in sweep - keeping first");
                continue;
            }
            index.insert(key, pos);
        }

        Self { records, index }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Record> {
        self.index.get(key).map(|pos| &self.records[*pos])
    }
}

impl From<Vec<Record>> for Snapshot {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
