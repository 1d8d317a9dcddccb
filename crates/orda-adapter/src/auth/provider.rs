/*
[INPUT]:  Email/password pairs from the sign-in form
[OUTPUT]: Identity lookups and sign-in/out side effects
[POS]:    Auth layer - identity provider abstraction
[UPDATE]: When adding provider operations or changing identity shape
*/

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Identity;

/// Trait for identity provider operations
///
/// The storefront only calls these as opaque operations; real providers
/// (hosted auth, OAuth) implement it outside this workspace.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Sign in with an existing account
    async fn login(&self, email: &str, password: &str) -> Result<Identity>;

    /// Create an account and sign it in
    async fn register(&self, email: &str, password: &str) -> Result<Identity>;

    /// Sign out the current identity, if any
    async fn logout(&self) -> Result<()>;

    /// Currently signed-in identity
    fn current_identity(&self) -> Option<Identity>;
}
