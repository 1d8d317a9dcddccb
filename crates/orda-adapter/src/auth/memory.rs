/*
[INPUT]:  Email/password credentials
[OUTPUT]: Mock identities kept in process memory
[POS]:    Auth layer - in-memory identity provider for demos and tests
[UPDATE]: When provider validation rules change
*/

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{AdapterError, Result};
use crate::types::Identity;

use super::{IdentityProvider, SessionStore};

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
struct StoredAccount {
    identity: Identity,
    password: String,
}

/// Identity provider that keeps accounts in memory.
///
/// Passwords are stored as given. This is a stand-in for a hosted provider
/// and offers no security guarantees.
#[derive(Debug, Default)]
pub struct InMemoryIdentityProvider {
    accounts: RwLock<HashMap<String, StoredAccount>>,
    session: SessionStore,
}

impl InMemoryIdentityProvider {
    /// Create a provider with no accounts
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account without signing it in
    pub fn with_account(self, email: &str, password: &str) -> Self {
        let identity = new_identity(email);
        {
            let mut accounts = self.accounts.write().unwrap_or_else(|e| e.into_inner());
            accounts.insert(
                normalize_email(email),
                StoredAccount {
                    identity,
                    password: password.to_string(),
                },
            );
        }
        self
    }

    /// Session handle shared with this provider
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Number of registered accounts
    pub fn account_count(&self) -> usize {
        let accounts = self.accounts.read().unwrap_or_else(|e| e.into_inner());
        accounts.len()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        let key = normalize_email(email);
        let identity = {
            let accounts = self.accounts.read().unwrap_or_else(|e| e.into_inner());
            match accounts.get(&key) {
                Some(stored) if stored.password == password => stored.identity.clone(),
                _ => {
                    debug!(email = %key, "login rejected");
                    return Err(AdapterError::authentication("Invalid email or password"));
                }
            }
        };

        self.session.set_identity(identity.clone());
        info!(uid = %identity.uid, "signed in");
        Ok(identity)
    }

    async fn register(&self, email: &str, password: &str) -> Result<Identity> {
        validate_credentials(email, password)?;
        let key = normalize_email(email);

        let identity = {
            let mut accounts = self.accounts.write().unwrap_or_else(|e| e.into_inner());
            if accounts.contains_key(&key) {
                return Err(AdapterError::AccountExists { email: key });
            }
            let identity = new_identity(&key);
            accounts.insert(
                key,
                StoredAccount {
                    identity: identity.clone(),
                    password: password.to_string(),
                },
            );
            identity
        };

        self.session.set_identity(identity.clone());
        info!(uid = %identity.uid, "account registered");
        Ok(identity)
    }

    async fn logout(&self) -> Result<()> {
        if let Some(identity) = self.session.identity() {
            info!(uid = %identity.uid, "signed out");
        }
        self.session.clear();
        Ok(())
    }

    fn current_identity(&self) -> Option<Identity> {
        self.session.identity()
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn new_identity(email: &str) -> Identity {
    Identity {
        uid: Uuid::new_v4().to_string(),
        email: normalize_email(email),
        created_at: Utc::now(),
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AdapterError::InvalidCredentials(
            "Please enter a valid email address".to_string(),
        ));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AdapterError::InvalidCredentials(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}
