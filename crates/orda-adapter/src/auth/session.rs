/*
[INPUT]:  Identities produced by a successful login/register
[OUTPUT]: Current-identity lookup and sign-in status
[POS]:    Auth layer - session lifecycle management
[UPDATE]: When adding session expiry or changing storage strategy
*/

use std::sync::{Arc, RwLock};

use crate::types::Identity;

/// Thread-safe holder for the signed-in identity
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    data: Arc<RwLock<Option<Identity>>>,
}

impl SessionStore {
    /// Create a new empty session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the signed-in identity
    pub fn set_identity(&self, identity: Identity) {
        let mut guard = self.data.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(identity);
    }

    /// Get the signed-in identity if available
    pub fn identity(&self) -> Option<Identity> {
        let guard = self.data.read().unwrap_or_else(|e| e.into_inner());
        guard.clone()
    }

    /// Check if someone is signed in
    pub fn is_signed_in(&self) -> bool {
        let guard = self.data.read().unwrap_or_else(|e| e.into_inner());
        guard.is_some()
    }

    /// Clear the session
    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }
}
