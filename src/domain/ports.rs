use super::delivery::Delivery;
use super::record::Record;
use crate::error::Result;
use async_trait::async_trait;

/// Destination that account records are replayed into.
///
/// Implementations return `Ok` for every recovered outcome, including rejected
/// and unreachable deliveries. `Err` is reserved for failures that must stop the run.
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn submit(&self, record: &Record) -> Result<Delivery>;
}

pub type RecordSinkBox = Box<dyn RecordSink>;
