//! Feedback endpoint.

use agribot_api_models::FeedbackEnvelope;

use crate::core::gateway::Failure;
use crate::features::feedback::logic::{RatedFeedback, enrich};
use crate::services::api::ApiClient;

/// Every feedback entry, already rated.
pub(crate) async fn fetch_feedback(client: &ApiClient) -> Result<Vec<RatedFeedback>, Failure> {
    let envelope: FeedbackEnvelope = client.get("feedback/get-all").await?;
    Ok(enrich(envelope.feedbacks))
}
