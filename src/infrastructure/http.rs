use crate::domain::delivery::Delivery;
use crate::domain::ports::RecordSink;
use crate::domain::record::Record;
use crate::error::{LoaderError, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::warn;

/// Path appended to the base URL for every replayed record.
pub const NEW_ACCOUNT_PATH: &str = "/accounts/new";

/// Posts account records to a running server.
///
/// One request per record, body = the record's JSON text. Non-2xx responses and
/// transport failures are returned as recovered [`Delivery`] outcomes.
#[derive(Debug, Clone)]
pub struct HttpRecordSink {
    client: Client,
    endpoint: Url,
}

impl HttpRecordSink {
    /// Creates a sink for the server at `base_url` (e.g. `http://127.0.0.1:80`).
    pub fn new(base_url: &str) -> Result<Self> {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), NEW_ACCOUNT_PATH);
        let endpoint = Url::parse(&endpoint).map_err(|e| {
            LoaderError::ConfigError(format!("invalid base URL '{base_url}': {e}"))
        })?;
        let client = Client::builder().build()?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl RecordSink for HttpRecordSink {
    async fn submit(&self, record: &Record) -> Result<Delivery> {
        let response = match self
            .client
            .post(self.endpoint.clone())
            .json(record)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(endpoint = %self.endpoint, error = %e, "account record not delivered");
                return Ok(Delivery::Unreachable {
                    reason: e.to_string(),
                });
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(Delivery::Accepted {
                status: status.as_u16(),
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(status = status.as_u16(), error = %e, "could not read error response body");
                return Ok(Delivery::Unreachable {
                    reason: e.to_string(),
                });
            }
        };
        warn!(status = status.as_u16(), "account record rejected");

        Ok(Delivery::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
