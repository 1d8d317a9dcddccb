/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Orda adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod error;
pub mod geo;
pub mod notify;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{IdentityProvider, InMemoryIdentityProvider, SessionStore};

pub use error::{AdapterError, Result};

pub use geo::{DeniedGeolocator, FixedGeolocator, Geolocator};

pub use notify::{Notifier, RecordingNotifier, TracingNotifier};

// Re-export all types
pub use types::*;
