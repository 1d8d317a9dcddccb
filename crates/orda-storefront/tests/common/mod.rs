/*
[INPUT]:  Test configuration and fixture requirements
[OUTPUT]: Shared test utilities and fixtures
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for orda-storefront tests

use std::sync::Arc;

use async_trait::async_trait;
use orda_adapter::{InMemoryIdentityProvider, RecordingNotifier};
use orda_storefront::checkout::{Checkout, CheckoutError, OrderPlacer, OrderRequest};
use orda_storefront::{CheckoutForm, Storefront, StorefrontConfig};

#[allow(dead_code)]
pub const TEST_EMAIL: &str = "customer@orda.ng";
#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "jollof123";

/// Default config with the placement delay removed
#[allow(dead_code)]
pub fn fast_config() -> StorefrontConfig {
    let mut config = StorefrontConfig::default();
    config.checkout.placement_delay_ms = 0;
    config
}

#[allow(dead_code)]
pub fn valid_form() -> CheckoutForm {
    CheckoutForm::new("12 Gbongan Road, Osogbo", "08012345678")
}

/// Storefront over the seeded data with one known, signed-out account
#[allow(dead_code)]
pub fn storefront(config: StorefrontConfig) -> (Storefront, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let identity = Arc::new(InMemoryIdentityProvider::new().with_account(TEST_EMAIL, TEST_PASSWORD));
    (Storefront::new(config, identity, notifier.clone()), notifier)
}

/// Same as [`storefront`], but orders go through `placer`
#[allow(dead_code)]
pub fn storefront_with_placer(
    placer: Arc<dyn OrderPlacer>,
) -> (Storefront, Arc<RecordingNotifier>) {
    let config = fast_config();
    let notifier = Arc::new(RecordingNotifier::new());
    let identity = Arc::new(InMemoryIdentityProvider::new().with_account(TEST_EMAIL, TEST_PASSWORD));
    let checkout = Checkout::with_placer(&config, placer);
    (
        Storefront::with_checkout(config, identity, notifier.clone(), checkout),
        notifier,
    )
}

/// Placement backend that always fails
#[allow(dead_code)]
pub struct FailingPlacer;

#[async_trait]
impl OrderPlacer for FailingPlacer {
    async fn place(&self, _order: &OrderRequest) -> Result<(), CheckoutError> {
        Err(CheckoutError::SimulatedOperationFailure(
            "kitchen unreachable".to_string(),
        ))
    }
}
