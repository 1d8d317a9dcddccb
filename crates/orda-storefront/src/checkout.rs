/*
[INPUT]:  Signed-in identity, cart contents, delivery form
[OUTPUT]: Order confirmation or a Validation / SimulatedOperationFailure error
[POS]:    Checkout domain layer - validation then simulated placement
[UPDATE]: When checkout fields, validation order or placement backends change
*/

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use orda_adapter::Identity;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cart::{Cart, CartItem, CartTotals};
use crate::config::StorefrontConfig;

pub const SIGN_IN_REQUIRED: &str = "Please sign in to place an order";
pub const MISSING_FIELDS: &str = "Please fill in all required fields";
pub const EMPTY_CART: &str = "Your cart is empty";

/// Errors returned by checkout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Input rejected before placement started
    #[error("{0}")]
    Validation(String),

    /// The placement step itself failed
    #[error("{0}")]
    SimulatedOperationFailure(String),
}

impl CheckoutError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CheckoutError::Validation(_))
    }
}

/// Delivery details entered on the checkout screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub delivery_address: String,
    pub phone_number: String,
    /// Special instructions, optional
    #[serde(default)]
    pub notes: String,
}

impl CheckoutForm {
    pub fn new(delivery_address: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            delivery_address: delivery_address.into(),
            phone_number: phone_number.into(),
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    fn has_required_fields(&self) -> bool {
        !self.delivery_address.trim().is_empty() && !self.phone_number.trim().is_empty()
    }
}

/// Everything handed to the placement backend once validation passed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub customer: Identity,
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub form: CheckoutForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub customer_email: String,
    pub totals: CartTotals,
    pub unit_count: u64,
    pub delivery_address: String,
    pub notes: Option<String>,
    pub estimated_delivery: String,
    pub placed_at: DateTime<Utc>,
}

/// Backend that accepts a validated order
#[async_trait]
pub trait OrderPlacer: Send + Sync {
    async fn place(&self, order: &OrderRequest) -> Result<(), CheckoutError>;
}

/// Waits a fixed delay and reports success. Nothing is sent anywhere.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedPlacement {
    delay: Duration,
}

impl SimulatedPlacement {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl OrderPlacer for SimulatedPlacement {
    async fn place(&self, order: &OrderRequest) -> Result<(), CheckoutError> {
        debug!(
            delay_ms = self.delay.as_millis() as u64,
            lines = order.items.len(),
            "simulating order placement"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Checkout flow: validate, then hand off to an [`OrderPlacer`]
#[derive(Clone)]
pub struct Checkout {
    placer: Arc<dyn OrderPlacer>,
    delivery_fee: rust_decimal::Decimal,
    estimated_delivery: String,
}

impl std::fmt::Debug for Checkout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkout")
            .field("delivery_fee", &self.delivery_fee)
            .field("estimated_delivery", &self.estimated_delivery)
            .finish_non_exhaustive()
    }
}

impl Checkout {
    /// Checkout backed by [`SimulatedPlacement`] with the configured delay
    pub fn from_config(config: &StorefrontConfig) -> Self {
        let placer = SimulatedPlacement::new(config.checkout.placement_delay());
        Self::with_placer(config, Arc::new(placer))
    }

    pub fn with_placer(config: &StorefrontConfig, placer: Arc<dyn OrderPlacer>) -> Self {
        Self {
            placer,
            delivery_fee: config.delivery_fee,
            estimated_delivery: config.checkout.estimated_delivery.clone(),
        }
    }

    /// Check sign-in, then required fields, then cart contents.
    pub fn validate<'a>(
        &self,
        identity: Option<&'a Identity>,
        cart: &Cart,
        form: &CheckoutForm,
    ) -> Result<&'a Identity, CheckoutError> {
        let identity =
            identity.ok_or_else(|| CheckoutError::Validation(SIGN_IN_REQUIRED.to_string()))?;
        if !form.has_required_fields() {
            return Err(CheckoutError::Validation(MISSING_FIELDS.to_string()));
        }
        if cart.is_empty() {
            return Err(CheckoutError::Validation(EMPTY_CART.to_string()));
        }
        Ok(identity)
    }

    /// Validate and place the order. The cart is not modified here.
    pub async fn submit(
        &self,
        identity: Option<&Identity>,
        cart: &Cart,
        form: &CheckoutForm,
    ) -> Result<OrderConfirmation, CheckoutError> {
        let identity = match self.validate(identity, cart, form) {
            Ok(identity) => identity,
            Err(err) => {
                warn!(error = %err, "checkout rejected");
                return Err(err);
            }
        };

        let request = OrderRequest {
            customer: identity.clone(),
            items: cart.items().to_vec(),
            totals: cart.totals(self.delivery_fee),
            form: form.clone(),
        };
        self.placer.place(&request).await?;

        let notes = form.notes.trim();
        let confirmation = OrderConfirmation {
            customer_email: identity.email.clone(),
            totals: request.totals,
            unit_count: cart.unit_count(),
            delivery_address: form.delivery_address.trim().to_string(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            estimated_delivery: self.estimated_delivery.clone(),
            placed_at: Utc::now(),
        };
        info!(
            customer = %confirmation.customer_email,
            total = %confirmation.totals.total,
            "order placed"
        );
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::Instant;

    fn identity() -> Identity {
        Identity {
            uid: "user-1".to_string(),
            email: "customer@orda.ng".to_string(),
            created_at: Utc::now(),
        }
    }

    #[derive(Default)]
    struct CountingPlacer {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl OrderPlacer for CountingPlacer {
        async fn place(&self, _order: &OrderRequest) -> Result<(), CheckoutError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_waits_configured_delay() {
        let checkout = Checkout::from_config(&StorefrontConfig::default());
        let form = CheckoutForm::new("12 Gbongan Road", "08012345678").with_notes("  ");
        let user = identity();

        let started = Instant::now();
        let confirmation = checkout
            .submit(Some(&user), &Cart::seeded(), &form)
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert_eq!(confirmation.totals.total, Decimal::from(8500));
        assert_eq!(confirmation.unit_count, 3);
        assert_eq!(confirmation.estimated_delivery, "25-35 minutes");
        assert_eq!(confirmation.notes, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_address_skips_delay() {
        let checkout = Checkout::from_config(&StorefrontConfig::default());
        let form = CheckoutForm::new("", "08012345678");
        let user = identity();

        let started = Instant::now();
        let err = checkout
            .submit(Some(&user), &Cart::seeded(), &form)
            .await
            .unwrap_err();

        assert_eq!(err, CheckoutError::Validation(MISSING_FIELDS.to_string()));
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_validation_order() {
        let placer = Arc::new(CountingPlacer::default());
        let checkout = Checkout::with_placer(&StorefrontConfig::default(), placer.clone());
        let blank = CheckoutForm::new("   ", "\t");
        let user = identity();

        let err = checkout.submit(None, &Cart::new(), &blank).await.unwrap_err();
        assert_eq!(err.to_string(), SIGN_IN_REQUIRED);

        let err = checkout
            .submit(Some(&user), &Cart::new(), &blank)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), MISSING_FIELDS);

        let form = CheckoutForm::new("12 Gbongan Road", "08012345678");
        let err = checkout
            .submit(Some(&user), &Cart::new(), &form)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), EMPTY_CART);
        assert!(err.is_validation());

        assert_eq!(placer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_notes_are_carried() {
        let placer = Arc::new(CountingPlacer::default());
        let checkout = Checkout::with_placer(&StorefrontConfig::default(), placer.clone());
        let form = CheckoutForm::new("12 Gbongan Road", "08012345678").with_notes("Extra pepper");

        let confirmation = checkout
            .submit(Some(&identity()), &Cart::seeded(), &form)
            .await
            .unwrap();

        assert_eq!(confirmation.notes.as_deref(), Some("Extra pepper"));
        assert_eq!(placer.calls.load(Ordering::SeqCst), 1);
    }
}
