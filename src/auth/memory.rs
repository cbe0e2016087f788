//! In-memory member directory
//!
//! Holds plaintext passwords, so it is only suitable for tests and local
//! demos. Accounts lock after a run of consecutive failed attempts.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{AuthError, AuthenticatedMember, CredentialVerifier, Credentials};

#[derive(Debug)]
struct Account {
    display_name: String,
    password: String,
    failed_attempts: u32,
}

#[derive(Debug)]
pub struct InMemoryVerifier {
    accounts: Mutex<HashMap<String, Account>>,
    max_failed_attempts: u32,
}

impl InMemoryVerifier {
    /// `max_failed_attempts` consecutive failures lock the account; 0 disables lockout
    pub fn new(max_failed_attempts: u32) -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            max_failed_attempts,
        }
    }

    fn accounts(&self) -> Result<MutexGuard<'_, HashMap<String, Account>>, AuthError> {
        self.accounts
            .lock()
            .map_err(|_| AuthError::ServiceUnavailable("member directory poisoned".to_string()))
    }

    /// Add or replace a member account
    pub fn register(
        &self,
        member_id: &str,
        display_name: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        self.accounts()?.insert(
            member_id.to_string(),
            Account {
                display_name: display_name.to_string(),
                password: password.to_string(),
                failed_attempts: 0,
            },
        );
        Ok(())
    }

    /// Clear the failure counter, e.g. after a password reset
    ///
    /// Returns false when no such member is registered.
    pub fn unlock(&self, member_id: &str) -> Result<bool, AuthError> {
        let mut accounts = self.accounts()?;
        Ok(match accounts.get_mut(member_id) {
            Some(account) => {
                account.failed_attempts = 0;
                true
            }
            None => false,
        })
    }

    fn is_locked(&self, account: &Account) -> bool {
        self.max_failed_attempts > 0 && account.failed_attempts >= self.max_failed_attempts
    }
}

impl CredentialVerifier for InMemoryVerifier {
    fn verify(&self, credentials: &Credentials) -> Result<AuthenticatedMember, AuthError> {
        let mut accounts = self.accounts()?;

        let member_id = credentials.member_id.trim();
        let Some(account) = accounts.get_mut(member_id) else {
            return Err(AuthError::InvalidCredentials);
        };

        if self.is_locked(account) {
            return Err(AuthError::AccountLocked {
                member_id: member_id.to_string(),
            });
        }

        if account.password != credentials.password {
            account.failed_attempts += 1;
            if self.is_locked(account) {
                return Err(AuthError::AccountLocked {
                    member_id: member_id.to_string(),
                });
            }
            return Err(AuthError::InvalidCredentials);
        }

        account.failed_attempts = 0;
        Ok(AuthenticatedMember {
            member_id: member_id.to_string(),
            display_name: account.display_name.clone(),
            remember_me: credentials.remember_me,
        })
    }
}
