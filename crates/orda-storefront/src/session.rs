/*
[INPUT]:  Configuration, identity/notification collaborators, user actions
[OUTPUT]: One storefront session owning cart, catalog, delivery and menu state
[POS]:    Session layer - wires domain modules to collaborators
[UPDATE]: When adding user-facing workflows or notifications
*/

use std::sync::Arc;

use orda_adapter::{AdapterError, Geolocator, Identity, IdentityProvider, Notifier};
use tracing::info;

use crate::cart::{Cart, CartTotals};
use crate::catalog::Catalog;
use crate::checkout::{Checkout, CheckoutError, CheckoutForm, OrderConfirmation};
use crate::config::StorefrontConfig;
use crate::delivery::{
    DeliveryError, DeliveryStatus, DeliveryTask, DriverDesk, DriverStats, TaskId, TaskPool,
};
use crate::location::{LocationError, LocationResolver};
use crate::menu::Menu;

pub const ORDER_PLACED: &str = "Order placed successfully! You'll receive updates soon.";
pub const ORDER_FAILED: &str = "Failed to place order. Please try again.";
pub const LOGGED_IN: &str = "Logged in successfully!";
pub const ACCOUNT_CREATED: &str = "Account created successfully!";
const AUTH_FAILED: &str = "Authentication failed";

/// A single user's storefront.
///
/// Each collection has exactly one owner (this value); every mutation goes
/// through `&mut self`.
pub struct Storefront {
    config: StorefrontConfig,
    identity: Arc<dyn IdentityProvider>,
    notifier: Arc<dyn Notifier>,
    catalog: Catalog,
    cart: Cart,
    checkout: Checkout,
    resolver: LocationResolver,
    location: String,
    pool: TaskPool,
    driver: DriverDesk,
    menu: Menu,
}

impl Storefront {
    /// Session over the seeded demo data
    pub fn new(
        config: StorefrontConfig,
        identity: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let checkout = Checkout::from_config(&config);
        Self::with_checkout(config, identity, notifier, checkout)
    }

    pub fn with_checkout(
        config: StorefrontConfig,
        identity: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn Notifier>,
        checkout: Checkout,
    ) -> Self {
        let resolver = LocationResolver::new(config.location.clone());
        let location = resolver.default_city().to_string();
        Self {
            config,
            identity,
            notifier,
            catalog: Catalog::seeded(),
            cart: Cart::seeded(),
            checkout,
            resolver,
            location,
            pool: TaskPool::seeded(),
            driver: DriverDesk::new(),
            menu: Menu::new(),
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    // ---- identity ----

    pub fn current_identity(&self) -> Option<Identity> {
        self.identity.current_identity()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, AdapterError> {
        let result = self.identity.login(email, password).await;
        self.report_auth(&result, LOGGED_IN);
        result
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<Identity, AdapterError> {
        let result = self.identity.register(email, password).await;
        self.report_auth(&result, ACCOUNT_CREATED);
        result
    }

    pub async fn logout(&self) -> Result<(), AdapterError> {
        self.identity.logout().await
    }

    fn report_auth(&self, result: &Result<Identity, AdapterError>, success: &str) {
        match result {
            Ok(_) => self.notifier.notify("Success", success, false),
            Err(err) => {
                let message = match err {
                    AdapterError::Authentication { message }
                    | AdapterError::InvalidCredentials(message) => message.clone(),
                    AdapterError::AccountExists { .. } => err.to_string(),
                    _ => AUTH_FAILED.to_string(),
                };
                self.notifier.notify("Error", &message, true);
            }
        }
    }

    // ---- browsing and cart ----

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn cart_totals(&self) -> CartTotals {
        self.cart.totals(self.config.delivery_fee)
    }

    /// Run checkout and report the outcome to the user.
    ///
    /// The cart is emptied only when placement succeeds.
    pub async fn place_order(
        &mut self,
        form: &CheckoutForm,
    ) -> Result<OrderConfirmation, CheckoutError> {
        let identity = self.identity.current_identity();
        match self.checkout.submit(identity.as_ref(), &self.cart, form).await {
            Ok(confirmation) => {
                self.cart.clear();
                self.notifier.notify("Success", ORDER_PLACED, false);
                Ok(confirmation)
            }
            Err(err) => {
                let message = match &err {
                    CheckoutError::Validation(message) => message.as_str(),
                    CheckoutError::SimulatedOperationFailure(_) => ORDER_FAILED,
                };
                self.notifier.notify("Error", message, true);
                Err(err)
            }
        }
    }

    // ---- location ----

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn supported_cities(&self) -> &[String] {
        self.resolver.cities()
    }

    pub async fn detect_location(&mut self, geolocator: &dyn Geolocator) -> &str {
        self.location = self.resolver.detect(geolocator).await;
        &self.location
    }

    pub fn select_location(&mut self, city: &str) -> Result<&str, LocationError> {
        self.location = self.resolver.select(city)?;
        info!(location = %self.location, "location selected");
        Ok(&self.location)
    }

    // ---- driver ----

    pub fn available_tasks(&self) -> &[DeliveryTask] {
        self.pool.tasks()
    }

    pub fn driver(&self) -> &DriverDesk {
        &self.driver
    }

    pub fn toggle_online(&mut self) -> bool {
        self.driver.toggle_online()
    }

    pub fn claim_task(&mut self, task_id: &TaskId) -> Result<&DeliveryTask, DeliveryError> {
        self.driver.claim(&mut self.pool, task_id)
    }

    pub fn advance_task(
        &mut self,
        task_id: &TaskId,
        next: DeliveryStatus,
    ) -> Result<&DeliveryTask, DeliveryError> {
        self.driver.advance(task_id, next)
    }

    pub fn driver_stats(&self) -> DriverStats {
        self.driver.stats(&self.pool)
    }

    // ---- seller ----

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }
}
