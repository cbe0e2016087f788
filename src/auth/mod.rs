//! Member portal authentication
//!
//! Provides:
//! - [`Credentials`] / [`AuthenticatedMember`] - what goes in and what comes out
//! - [`CredentialVerifier`] - trait implemented by the real member directory
//! - [`login`] - form validation, verification and the resulting view state
//! - [`InMemoryVerifier`] - small directory for tests and local demos

mod error;
mod memory;

pub use error::AuthError;
pub use memory::InMemoryVerifier;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::view::{ViewEvent, ViewState};

/// Login form contents
#[derive(Clone, Default, Deserialize)]
pub struct Credentials {
    pub member_id: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

impl Credentials {
    pub fn new(member_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    /// Both fields are required on the form
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.member_id.trim().is_empty() {
            return Err(AuthError::MissingMemberId);
        }
        if self.password.is_empty() {
            return Err(AuthError::MissingPassword);
        }
        Ok(())
    }
}

// Never print the password
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("member_id", &self.member_id)
            .field("password", &"***")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// Identity returned by a successful verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedMember {
    pub member_id: String,
    pub display_name: String,
    pub remember_me: bool,
}

/// Member directory that checks credentials
///
/// Implement this for the Sacco's core banking or identity service.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, credentials: &Credentials) -> Result<AuthenticatedMember, AuthError>;
}

/// Validate the form, verify it, and close the login modal on success
///
/// On failure the view state is left to the caller unchanged so the modal
/// stays open with the error shown.
pub fn login<V: CredentialVerifier + ?Sized>(
    verifier: &V,
    credentials: &Credentials,
    state: &ViewState,
) -> Result<(AuthenticatedMember, ViewState), AuthError> {
    credentials.validate()?;

    match verifier.verify(credentials) {
        Ok(member) => {
            info!("member {} signed in", member.member_id);
            Ok((member, state.apply(&ViewEvent::LoginSucceeded)))
        }
        Err(e) => {
            warn!("login failed for {}: {}", credentials.member_id.trim(), e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unreachable;

    impl CredentialVerifier for Unreachable {
        fn verify(&self, _: &Credentials) -> Result<AuthenticatedMember, AuthError> {
            Err(AuthError::ServiceUnavailable("connection refused".to_string()))
        }
    }

    fn open_modal() -> ViewState {
        ViewState::default().apply(&ViewEvent::OpenLogin)
    }

    #[test]
    fn test_required_fields() {
        let verifier = InMemoryVerifier::new(5);
        assert_eq!(
            login(&verifier, &Credentials::new("  ", "secret"), &open_modal()),
            Err(AuthError::MissingMemberId)
        );
        assert_eq!(
            login(&verifier, &Credentials::new("AUS0001", ""), &open_modal()),
            Err(AuthError::MissingPassword)
        );
    }

    #[test]
    fn test_successful_login_closes_modal() {
        let verifier = InMemoryVerifier::new(5);
        verifier.register("AUS0001", "Jane Atieno", "s3cret").unwrap();

        let mut credentials = Credentials::new("AUS0001", "s3cret");
        credentials.remember_me = true;

        let (member, state) = login(&verifier, &credentials, &open_modal()).unwrap();
        assert_eq!(member.member_id, "AUS0001");
        assert_eq!(member.display_name, "Jane Atieno");
        assert!(member.remember_me);
        assert!(!state.login_open);
    }

    #[test]
    fn test_failed_login() {
        let verifier = InMemoryVerifier::new(5);
        verifier.register("AUS0001", "Jane Atieno", "s3cret").unwrap();
        assert_eq!(
            login(&verifier, &Credentials::new("AUS0001", "wrong"), &open_modal()),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_backend_error_passes_through() {
        let err = login(&Unreachable, &Credentials::new("AUS0001", "x"), &open_modal())
            .unwrap_err();
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_verifier_as_trait_object() {
        let verifier: Box<dyn CredentialVerifier> = Box::new(Unreachable);
        assert!(login(verifier.as_ref(), &Credentials::new("A", "b"), &ViewState::default()).is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let debug = format!("{:?}", Credentials::new("AUS0001", "hunter2"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("AUS0001"));
    }
}
