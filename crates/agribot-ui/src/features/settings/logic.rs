//! Settings tabs and their form state.

use agribot_api_models::{EntityId, SocialLinks, SocialLinksUpdate, User};

/// Avatar shown when the account has no profile image.
pub const DEFAULT_PROFILE_IMAGE: &str = "/default-profile.png";

/// Settings tabs, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    /// Username, e-mail, bio, avatar.
    #[default]
    Profile,
    /// Social profile links.
    Links,
    /// Sign-out confirmation.
    Logout,
}

impl SettingsTab {
    /// Every tab.
    pub const ALL: [Self; 3] = [Self::Profile, Self::Links, Self::Logout];

    /// Tab caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Links => "Links",
            Self::Logout => "Logout",
        }
    }
}

/// Editable profile fields; the avatar file travels separately.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    /// Login handle.
    pub username: String,
    /// Contact e-mail.
    pub email: String,
    /// Free-form biography.
    pub bio: String,
}

impl ProfileForm {
    /// Prefill from the fetched account.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone().unwrap_or_default(),
            email: user.email.clone(),
            bio: user.bio.clone().unwrap_or_default(),
        }
    }

    /// Text fields of the multipart body, in submission order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("username", self.username.as_str()),
            ("email", self.email.as_str()),
            ("bio", self.bio.as_str()),
        ]
    }
}

/// Prefill the links tab. The e-mail link defaults to the account e-mail.
#[must_use]
pub fn links_from_user(user: &User) -> SocialLinks {
    SocialLinks {
        email: user.email.clone(),
        ..user.social_links.clone()
    }
}

/// Body for `admin/update-social/<id>`.
#[must_use]
pub fn links_update(links: &SocialLinks) -> SocialLinksUpdate {
    SocialLinksUpdate {
        social_links: SocialLinks {
            facebook: links.facebook.trim().to_string(),
            linkedin: links.linkedin.trim().to_string(),
            github: links.github.trim().to_string(),
            email: links.email.trim().to_string(),
        },
    }
}

/// `GET` path for one account.
#[must_use]
pub fn user_path(id: EntityId) -> String {
    format!("admin/get-user/{id}")
}

/// `POST` path for the multipart profile update.
#[must_use]
pub fn update_path(id: EntityId) -> String {
    format!("admin/update/{id}")
}

/// `POST` path for the social links update.
#[must_use]
pub fn update_social_path(id: EntityId) -> String {
    format!("admin/update-social/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 8,
            username: Some("ana".to_string()),
            email: "ana@agribot.ph".to_string(),
            social_links: SocialLinks {
                github: "https://github.com/ana".to_string(),
                email: "old@agribot.ph".to_string(),
                ..SocialLinks::default()
            },
            ..User::default()
        }
    }

    #[test]
    fn profile_form_prefills_and_lists_fields() {
        let form = ProfileForm::from_user(&user());
        assert_eq!(
            form.fields(),
            [("username", "ana"), ("email", "ana@agribot.ph"), ("bio", "")]
        );
    }

    #[test]
    fn links_default_email_to_account_and_trim_on_save() {
        let mut links = links_from_user(&user());
        assert_eq!(links.email, "ana@agribot.ph");
        assert_eq!(links.github, "https://github.com/ana");
        links.facebook = " https://fb.com/ana ".to_string();
        assert_eq!(links_update(&links).social_links.facebook, "https://fb.com/ana");
    }

    #[test]
    fn tabs_and_paths() {
        assert_eq!(SettingsTab::default(), SettingsTab::Profile);
        assert_eq!(SettingsTab::ALL.map(SettingsTab::label), ["Profile", "Links", "Logout"]);
        assert_eq!(user_path(8), "admin/get-user/8");
        assert_eq!(update_path(8), "admin/update/8");
        assert_eq!(update_social_path(8), "admin/update-social/8");
    }
}
