//! Login error kinds

/// Why a login attempt did not produce an authenticated member
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Member ID field left blank
    #[error("member ID is required")]
    MissingMemberId,

    #[error("password is required")]
    MissingPassword,

    /// Unknown member or wrong password; deliberately not distinguished
    #[error("invalid member ID or password")]
    InvalidCredentials,

    #[error("account '{member_id}' is locked")]
    AccountLocked { member_id: String },

    /// The verification backend could not be reached or failed internally
    #[error("authentication service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Whether the member can fix this by re-entering details (vs. a backend fault)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AuthError::ServiceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "invalid member ID or password"
        );
        assert_eq!(
            AuthError::AccountLocked {
                member_id: "AUS0042".to_string()
            }
            .to_string(),
            "account 'AUS0042' is locked"
        );
    }

    #[test]
    fn test_client_errors() {
        assert!(AuthError::MissingPassword.is_client_error());
        assert!(AuthError::InvalidCredentials.is_client_error());
        assert!(!AuthError::ServiceUnavailable("timeout".into()).is_client_error());
    }
}
