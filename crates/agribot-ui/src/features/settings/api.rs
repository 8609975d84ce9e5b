//! Account settings endpoints.

use agribot_api_models::{Ack, EntityId, SocialLinks, User, UserEnvelope};
use web_sys::File;

use crate::core::gateway::Failure;
use crate::features::settings::logic::{
    ProfileForm, links_update, update_path, update_social_path, user_path,
};
use crate::services::api::{ApiClient, Multipart};

pub(crate) async fn fetch_user(client: &ApiClient, id: EntityId) -> Result<User, Failure> {
    let envelope: UserEnvelope = client.get(&user_path(id)).await?;
    Ok(envelope.user)
}

/// Multipart profile update; the avatar is attached as `profileImage`.
pub(crate) async fn update_profile(
    client: &ApiClient,
    id: EntityId,
    form: &ProfileForm,
    avatar: Option<&File>,
) -> Result<UserEnvelope, Failure> {
    let mut body = Multipart::new()?;
    for (name, value) in form.fields() {
        body = body.text(name, value)?;
    }
    if let Some(file) = avatar {
        body = body.file("profileImage", file)?;
    }
    client.post_form(&update_path(id), body.finish()).await
}

pub(crate) async fn update_links(
    client: &ApiClient,
    id: EntityId,
    links: &SocialLinks,
) -> Result<Ack, Failure> {
    client
        .post_json(&update_social_path(id), &links_update(links))
        .await
}
