//! Sign-in credentials.
//!
//! Accounts sign in with the e-mail address their credentials were issued
//! to. Parsing happens here so handlers hand a validated value to the
//! [`LoginService`](crate::domain::ports::LoginService) port.

use zeroize::Zeroizing;

/// Reasons a sign-in payload is rejected before authentication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// E-mail was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// E-mail did not have the `local@domain` shape.
    #[error("email must look like name@domain")]
    MalformedEmail,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated sign-in credentials.
///
/// ## Invariants
/// - `email` is trimmed, lower-cased and has a non-empty local part and
///   domain around a single `@`.
/// - `password` is non-empty and kept verbatim; it is zeroised on drop.
///
/// # Examples
/// ```
/// use portal::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" Finance@Acme.test ", "s3cret").unwrap();
/// assert_eq!(creds.email(), "finance@acme.test");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Build credentials from raw request values.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
            _ => return Err(LoginValidationError::MalformedEmail),
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_ascii_lowercase(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised e-mail address used for account lookups.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as supplied by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyEmail)]
    #[case("   ", "pw", LoginValidationError::EmptyEmail)]
    #[case("finance", "pw", LoginValidationError::MalformedEmail)]
    #[case("@acme.test", "pw", LoginValidationError::MalformedEmail)]
    #[case("a@b@c", "pw", LoginValidationError::MalformedEmail)]
    #[case("finance@acme.test", "", LoginValidationError::EmptyPassword)]
    fn rejects_invalid_payloads(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn keeps_password_whitespace() {
        let creds = LoginCredentials::try_from_parts("a@b.test", " pw ").expect("valid");
        assert_eq!(creds.password(), " pw ");
    }
}
