//! Log endpoint.

use agribot_api_models::{LogEntry, LogsEnvelope};

use crate::core::gateway::Failure;
use crate::services::api::ApiClient;

pub(crate) async fn fetch_logs(client: &ApiClient) -> Result<Vec<LogEntry>, Failure> {
    let envelope: LogsEnvelope = client.get("log/get-all").await?;
    Ok(envelope.logs)
}
