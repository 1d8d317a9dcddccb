/*
[INPUT]:  Public API exports for the orda-storefront crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod delivery;
pub mod location;
pub mod menu;
pub mod seed;
pub mod session;

// Re-export main types for convenience
pub use cart::{Cart, CartError, CartItem, CartTotals, compute_totals};
pub use catalog::Catalog;
pub use checkout::{Checkout, CheckoutError, CheckoutForm, OrderConfirmation, OrderPlacer};
pub use config::StorefrontConfig;
pub use delivery::{DeliveryError, DeliveryStatus, DeliveryTask, DriverDesk, TaskId, TaskPool};
pub use location::{LocationError, LocationResolver};
pub use menu::{Menu, MenuDraft, MenuError};
pub use session::Storefront;
