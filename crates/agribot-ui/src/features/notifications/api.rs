//! Notification endpoints.

use agribot_api_models::{Ack, EntityId, Notification, NotificationsEnvelope};

use crate::core::gateway::Failure;
use crate::features::notifications::logic::{list_path, mark_read_path, sort_newest_first};
use crate::services::api::ApiClient;

/// Notifications addressed to `user_id`, newest first.
pub(crate) async fn fetch_notifications(
    client: &ApiClient,
    user_id: EntityId,
) -> Result<Vec<Notification>, Failure> {
    let envelope: NotificationsEnvelope = client.get(&list_path(user_id)).await?;
    let mut notifications = envelope.notifications;
    sort_newest_first(&mut notifications);
    Ok(notifications)
}

/// Persist the read flag.
pub(crate) async fn mark_read(client: &ApiClient, id: EntityId) -> Result<Ack, Failure> {
    client.put(&mark_read_path(id)).await
}
