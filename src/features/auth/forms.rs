//! Input validation for the sign-up, forgot-password and reset-password
//! forms. Checks run before any request is sent.

use crate::{
    client::AppError,
    features::auth::types::{Registration, ResetPasswordRequest},
};
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const OTP_LEN: usize = 6;

/// Lightweight email sanity check.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

fn invalid(message: &str) -> AppError {
    AppError::Validation(message.to_string())
}

fn check_new_password(password: &SecretString, confirm: &SecretString) -> Result<(), AppError> {
    if password.expose_secret() != confirm.expose_secret() {
        return Err(invalid("Passwords do not match"));
    }
    if password.expose_secret().chars().count() < MIN_PASSWORD_LEN {
        return Err(invalid("Password must be at least 6 characters"));
    }
    Ok(())
}

pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl RegisterForm {
    /// Validates the form and builds the registration payload.
    ///
    /// # Errors
    /// Returns `AppError::Validation` describing the first failed rule.
    pub fn validate(self) -> Result<Registration, AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(invalid("Please enter your full name"));
        }
        let email = self.email.trim();
        if !valid_email(email) {
            return Err(invalid("Please enter a valid email address."));
        }
        check_new_password(&self.password, &self.confirm_password)?;

        Ok(Registration {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password,
        })
    }
}

/// Validates the forgot-password email before an OTP is requested.
///
/// # Errors
/// Returns `AppError::Validation` when the address is malformed.
pub fn validate_otp_email(email: &str) -> Result<String, AppError> {
    let email = email.trim();
    if valid_email(email) {
        Ok(email.to_string())
    } else {
        Err(invalid("Please enter a valid email address."))
    }
}

pub struct ResetPasswordForm {
    pub email: String,
    pub otp: String,
    pub new_password: SecretString,
    pub confirm_password: SecretString,
}

impl ResetPasswordForm {
    /// Validates the form and builds the reset payload.
    ///
    /// # Errors
    /// Returns `AppError::Validation` describing the first failed rule.
    pub fn validate(self) -> Result<ResetPasswordRequest, AppError> {
        let email = validate_otp_email(&self.email)?;
        let otp = self.otp.trim();
        if otp.chars().count() != OTP_LEN {
            return Err(invalid("Please enter a valid 6-digit OTP"));
        }
        check_new_password(&self.new_password, &self.confirm_password)?;

        Ok(ResetPasswordRequest {
            email,
            otp: otp.to_string(),
            new_password: self.new_password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::from(value)
    }

    fn register_form(name: &str, password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            name: name.to_string(),
            email: "alice@example.com".to_string(),
            password: secret(password),
            confirm_password: secret(confirm),
        }
    }

    fn message(result: Result<impl Sized, AppError>) -> String {
        match result {
            Err(AppError::Validation(message)) => message,
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected validation failure"),
        }
    }

    #[test]
    fn valid_email_cases() {
        assert!(valid_email("alice@example.com"));
        assert!(!valid_email("alice@example"));
        assert!(!valid_email("alice example@x.com"));
        assert!(!valid_email(""));
    }

    #[test]
    fn register_requires_name() {
        assert_eq!(
            message(register_form("   ", "secret1", "secret1").validate()),
            "Please enter your full name"
        );
    }

    #[test]
    fn register_requires_matching_passwords() {
        assert_eq!(
            message(register_form("Alice", "secret1", "secret2").validate()),
            "Passwords do not match"
        );
    }

    #[test]
    fn register_requires_min_length() {
        assert_eq!(
            message(register_form("Alice", "abc", "abc").validate()),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn register_trims_fields() {
        let registration = register_form("  Alice ", "secret1", "secret1")
            .validate()
            .unwrap();
        assert_eq!(registration.name, "Alice");
        assert_eq!(registration.password.expose_secret(), "secret1");
    }

    #[test]
    fn reset_requires_six_character_otp() {
        let form = ResetPasswordForm {
            email: "alice@example.com".to_string(),
            otp: "123".to_string(),
            new_password: secret("secret1"),
            confirm_password: secret("secret1"),
        };
        assert_eq!(message(form.validate()), "Please enter a valid 6-digit OTP");
    }

    #[test]
    fn reset_builds_request() {
        let form = ResetPasswordForm {
            email: " alice@example.com ".to_string(),
            otp: "123456".to_string(),
            new_password: secret("secret1"),
            confirm_password: secret("secret1"),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.email, "alice@example.com");
        assert_eq!(request.otp, "123456");
    }

    #[test]
    fn otp_email_rejects_malformed_address() {
        assert_eq!(
            message(validate_otp_email("not-an-email")),
            "Please enter a valid email address."
        );
    }
}
