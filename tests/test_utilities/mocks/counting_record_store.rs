use async_trait::async_trait;
use intech_storefront::ports::outbound::Row;
use intech_storefront::prelude::*;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Wraps a RecordStore and records the table of every read
pub struct CountingRecordStore<RS> {
    inner: RS,
    reads: Arc<Mutex<Vec<String>>>,
}

impl<RS: RecordStore> CountingRecordStore<RS> {
    pub fn new(inner: RS) -> Self {
        Self {
            inner,
            reads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }

    pub fn reads_of(&self, table: &str) -> usize {
        self.reads().iter().filter(|t| t.as_str() == table).count()
    }
}

#[async_trait]
impl<RS: RecordStore> RecordStore for CountingRecordStore<RS> {
    async fn fetch_all(&self, query: &RecordQuery) -> Result<Vec<Row>> {
        self.reads.lock().unwrap().push(query.table.clone());
        self.inner.fetch_all(query).await
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Row> {
        self.inner.insert(table, row).await
    }
}
