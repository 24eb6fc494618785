/// Outcome of submitting one record to a sink.
///
/// Every variant is a recovered outcome: the loader moves on to the next record
/// regardless of which one it gets back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The target answered with a 2xx status.
    Accepted { status: u16 },
    /// The target answered with any other status.
    Rejected { status: u16, body: String },
    /// No HTTP response was obtained.
    Unreachable { reason: String },
}

impl Delivery {
    /// The text printed for a failed delivery: the response body of a rejection,
    /// or the transport error when there is no body.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Delivery::Accepted { .. } => None,
            Delivery::Rejected { body, .. } => Some(body),
            Delivery::Unreachable { reason } => Some(reason),
        }
    }
}

/// Counters for a completed load run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub entries: usize,
    pub records: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub unreachable: usize,
}

impl LoadReport {
    pub fn record(&mut self, delivery: &Delivery) {
        self.records += 1;
        match delivery {
            Delivery::Accepted { .. } => self.accepted += 1,
            Delivery::Rejected { .. } => self.rejected += 1,
            Delivery::Unreachable { .. } => self.unreachable += 1,
        }
    }

    pub fn failed(&self) -> usize {
        self.rejected + self.unreachable
    }
}
