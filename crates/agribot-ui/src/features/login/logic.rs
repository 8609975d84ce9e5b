//! Login form validation.

use agribot_api_models::LoginRequest;

/// Fallback error when the API rejects credentials without a message.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";
/// Fallback success toast.
pub const LOGIN_SUCCESS: &str = "Login successful!";

/// Login form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Account e-mail.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Client-side validation failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// E-mail or password left blank.
    #[error("Please enter both email and password.")]
    MissingCredentials,
}

impl LoginForm {
    /// Build the `admin/login` body.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::MissingCredentials`] when either field is blank.
    pub fn to_request(&self) -> Result<LoginRequest, LoginError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_are_required() {
        let mut form = LoginForm {
            email: " admin@agribot.ph ".to_string(),
            ..LoginForm::default()
        };
        assert_eq!(form.to_request(), Err(LoginError::MissingCredentials));
        assert_eq!(
            LoginError::MissingCredentials.to_string(),
            "Please enter both email and password."
        );
        form.password = " secret ".to_string();
        let request = form.to_request().unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(request.email, "admin@agribot.ph");
        assert_eq!(request.password, " secret ");
    }
}
