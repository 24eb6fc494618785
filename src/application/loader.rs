use crate::domain::delivery::LoadReport;
use crate::domain::ports::RecordSinkBox;
use crate::error::Result;
use crate::interfaces::zip::accounts_reader::AccountsArchive;
use std::io::{Read, Seek, Write};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Pause before the archive is opened, giving the target server time to start.
pub const STARTUP_DELAY: Duration = Duration::from_secs(3);

/// Replays the account records of a zip archive into a record sink.
///
/// Records are submitted one at a time, in archive order and then in
/// `accounts` list order. Each submission completes before the next one starts.
///
/// A failed delivery is written to the output and the run moves on to the next
/// record. Any other failure (opening the archive, reading or decoding an entry)
/// stops the run with an error.
pub struct AccountLoader {
    sink: RecordSinkBox,
    startup_delay: Duration,
}

impl AccountLoader {
    /// Creates a loader with the default [`STARTUP_DELAY`].
    pub fn new(sink: RecordSinkBox) -> Self {
        Self {
            sink,
            startup_delay: STARTUP_DELAY,
        }
    }

    pub fn with_startup_delay(mut self, startup_delay: Duration) -> Self {
        self.startup_delay = startup_delay;
        self
    }

    /// Waits for the startup delay, then replays every record of the archive at
    /// `archive_path`. Failure messages for rejected records go to `out`.
    pub async fn run<W: Write>(&self, archive_path: &Path, out: &mut W) -> Result<LoadReport> {
        if !self.startup_delay.is_zero() {
            info!(delay_ms = self.startup_delay.as_millis() as u64, "waiting for target to start");
            tokio::time::sleep(self.startup_delay).await;
        }

        let mut archive = AccountsArchive::open(archive_path)?;
        info!(archive = %archive_path.display(), members = archive.len(), "archive opened");

        self.replay(&mut archive, out).await
    }

    /// Replays an already opened archive, without the startup delay.
    pub async fn replay<R, W>(
        &self,
        archive: &mut AccountsArchive<R>,
        out: &mut W,
    ) -> Result<LoadReport>
    where
        R: Read + Seek,
        W: Write,
    {
        let mut report = LoadReport::default();

        for entry in archive.entries() {
            let entry = entry?;
            let batch = entry.batch()?;
            report.entries += 1;
            debug!(entry = %entry.name, records = batch.len(), "replaying archive entry");

            for record in &batch.accounts {
                let delivery = self.sink.submit(record).await?;
                report.record(&delivery);

                if let Some(message) = delivery.failure_message() {
                    writeln!(out, "{message}")?;
                }
            }
        }

        info!(
            entries = report.entries,
            records = report.records,
            accepted = report.accepted,
            failed = report.failed(),
            "archive replayed"
        );
        Ok(report)
    }
}
