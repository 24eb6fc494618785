use crate::domain::delivery::Delivery;
use crate::domain::ports::RecordSink;
use crate::domain::record::Record;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A record sink that keeps every submitted record in memory.
///
/// Deliveries are accepted unless a rejection was scripted for their position
/// with [`InMemoryRecordSink::reject`]. Clones share the same captured records.
#[derive(Default, Clone)]
pub struct InMemoryRecordSink {
    received: Arc<RwLock<Vec<Record>>>,
    rejections: Arc<HashMap<usize, (u16, String)>>,
}

impl InMemoryRecordSink {
    /// Creates a new sink that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects the record submitted at zero-based position `index` with the
    /// given status and response body.
    pub fn reject(mut self, index: usize, status: u16, body: &str) -> Self {
        Arc::make_mut(&mut self.rejections).insert(index, (status, body.to_string()));
        self
    }

    /// Records received so far, in submission order.
    pub async fn received(&self) -> Vec<Record> {
        self.received.read().await.clone()
    }
}

#[async_trait]
impl RecordSink for InMemoryRecordSink {
    async fn submit(&self, record: &Record) -> Result<Delivery> {
        let mut received = self.received.write().await;
        let index = received.len();
        received.push(record.clone());

        let delivery = match self.rejections.get(&index) {
            Some((status, body)) => Delivery::Rejected {
                status: *status,
                body: body.clone(),
            },
            None => Delivery::Accepted { status: 201 },
        };
        Ok(delivery)
    }
}
