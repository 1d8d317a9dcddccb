/*
[INPUT]:  Dishes picked by the customer, +/- quantity clicks, flat delivery fee
[OUTPUT]: Cart lines with positive quantities and subtotal/total figures
[POS]:    Cart domain layer - pending selection before checkout
[UPDATE]: When cart pricing or merge rules change
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::Dish;

/// Errors returned by cart operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Cart item {item_id} not found")]
    ItemNotFound { item_id: u64 },
}

/// One line in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u64,
    pub name: String,
    pub restaurant: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: String,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

impl From<&Dish> for CartItem {
    fn from(dish: &Dish) -> Self {
        Self {
            id: dish.id,
            name: dish.name.clone(),
            restaurant: dish.restaurant.clone(),
            price: dish.price,
            quantity: 1,
            image: dish.image.clone(),
        }
    }
}

/// Subtotal and grand total for a set of cart lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

/// Sum `price * quantity` over `items` and add the flat delivery fee.
///
/// Pure; the result does not depend on the order of `items`.
pub fn compute_totals(items: &[CartItem], delivery_fee: Decimal) -> CartTotals {
    let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();
    CartTotals {
        subtotal,
        delivery_fee,
        total: subtotal + delivery_fee,
    }
}

/// The customer's cart. Every stored line has `quantity > 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart pre-filled with the demo lines
    pub fn seeded() -> Self {
        Self::from_items(crate::seed::cart_items())
    }

    /// Build a cart, merging repeated ids and dropping empty lines
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add(item);
        }
        cart
    }

    /// Add a line, or raise the quantity of the line with the same id
    pub fn add(&mut self, item: CartItem) {
        if item.quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
            None => self.items.push(item),
        }
    }

    /// Add one portion of a dish
    pub fn add_dish(&mut self, dish: &Dish) {
        debug!(dish = %dish.name, "dish added to cart");
        self.add(CartItem::from(dish));
    }

    /// Apply `max(0, quantity + delta)`; a line reaching zero is removed.
    ///
    /// Returns the new quantity.
    pub fn adjust_quantity(&mut self, item_id: u64, delta: i64) -> Result<u32, CartError> {
        let index = self
            .items
            .iter()
            .position(|line| line.id == item_id)
            .ok_or(CartError::ItemNotFound { item_id })?;

        let current = i64::from(self.items[index].quantity);
        let next = current.saturating_add(delta).max(0);
        let next = u32::try_from(next).unwrap_or(u32::MAX);

        if next == 0 {
            self.items.remove(index);
            debug!(item_id, "cart line removed");
        } else {
            self.items[index].quantity = next;
        }
        Ok(next)
    }

    pub fn remove(&mut self, item_id: u64) -> Result<CartItem, CartError> {
        let index = self
            .items
            .iter()
            .position(|line| line.id == item_id)
            .ok_or(CartError::ItemNotFound { item_id })?;
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, item_id: u64) -> Option<&CartItem> {
        self.items.iter().find(|line| line.id == item_id)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of portions across all lines
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn totals(&self, delivery_fee: Decimal) -> CartTotals {
        compute_totals(&self.items, delivery_fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn line(id: u64, price: i64, quantity: u32) -> CartItem {
        CartItem {
            id,
            name: format!("item-{id}"),
            restaurant: "Suya Spot".to_string(),
            price: Decimal::from(price),
            quantity,
            image: String::new(),
        }
    }

    #[test]
    fn test_reference_totals() {
        let items = vec![line(1, 2500, 2), line(2, 3000, 1)];
        let totals = compute_totals(&items, Decimal::from(500));
        assert_eq!(totals.subtotal, Decimal::from(8000));
        assert_eq!(totals.total, Decimal::from(8500));
    }

    #[test]
    fn test_totals_are_order_independent() {
        let items = vec![line(1, 2500, 2), line(2, 3000, 1), line(3, 1800, 4)];
        let expected = compute_totals(&items, Decimal::from(500));

        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for order in orders {
            let shuffled: Vec<CartItem> = order.iter().map(|&i| items[i].clone()).collect();
            assert_eq!(compute_totals(&shuffled, Decimal::from(500)), expected);
        }
        assert_eq!(compute_totals(&items, Decimal::from(500)), expected);
    }

    #[test]
    fn test_empty_totals_are_just_the_fee() {
        let totals = compute_totals(&[], Decimal::from(500));
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::from(500));
    }

    #[rstest]
    #[case(2, 1, 3)]
    #[case(2, -1, 1)]
    #[case(2, 0, 2)]
    #[case(1, 100, 101)]
    fn test_adjust_keeps_line(#[case] start: u32, #[case] delta: i64, #[case] expected: u32) {
        let mut cart = Cart::from_items([line(1, 2500, start)]);
        assert_eq!(cart.adjust_quantity(1, delta).unwrap(), expected);
        assert_eq!(cart.get(1).map(|l| l.quantity), Some(expected));
    }

    #[rstest]
    #[case(1, -1)]
    #[case(2, -2)]
    #[case(2, -5)]
    #[case(1, i64::MIN)]
    fn test_adjust_to_zero_removes_line(#[case] start: u32, #[case] delta: i64) {
        let mut cart = Cart::from_items([line(1, 2500, start), line(2, 3000, 1)]);
        assert_eq!(cart.adjust_quantity(1, delta).unwrap(), 0);
        assert!(cart.get(1).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_adjust_unknown_item() {
        let mut cart = Cart::seeded();
        assert_eq!(
            cart.adjust_quantity(42, 1),
            Err(CartError::ItemNotFound { item_id: 42 })
        );
    }

    #[test]
    fn test_add_merges_same_id() {
        let mut cart = Cart::new();
        cart.add(line(1, 2500, 1));
        cart.add(line(1, 2500, 2));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(1).map(|l| l.quantity), Some(3));
        assert_eq!(cart.unit_count(), 3);
    }

    #[test]
    fn test_add_zero_quantity_is_ignored() {
        let mut cart = Cart::new();
        cart.add(line(1, 2500, 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_seeded_cart_matches_reference() {
        let cart = Cart::seeded();
        assert_eq!(cart.totals(Decimal::from(500)).total, Decimal::from(8500));
    }
}
