/*
[INPUT]:  Email/password credentials
[OUTPUT]: Signed-in identities, session state, and auth errors
[POS]:    Auth layer - identity provider boundary
[UPDATE]: When the identity flow or provider implementations change
*/

pub mod memory;
pub mod provider;
pub mod session;

pub use memory::InMemoryIdentityProvider;
pub use provider::IdentityProvider;
pub use session::SessionStore;
