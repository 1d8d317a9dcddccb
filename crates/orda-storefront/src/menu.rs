/*
[INPUT]:  Seller form submissions (add, edit, delete, show/hide)
[OUTPUT]: The restaurant's menu items and dashboard counters
[POS]:    Seller domain layer - menu management
[UPDATE]: When menu item fields or validation rules change
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Errors returned by menu operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("Menu item {id} not found")]
    MenuItemNotFound { id: String },

    #[error("Invalid menu item: {0}")]
    Invalid(String),
}

/// A dish the seller offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub available: bool,
    pub category: String,
}

/// Form contents for creating or editing a menu item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDraft {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
}

impl MenuDraft {
    pub fn validate(&self) -> Result<(), MenuError> {
        if self.name.trim().is_empty() {
            return Err(MenuError::Invalid("Item name cannot be empty".to_string()));
        }
        if self.price.is_sign_negative() {
            return Err(MenuError::Invalid("Price cannot be negative".to_string()));
        }
        Ok(())
    }
}

impl From<&MenuItem> for MenuDraft {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            image: item.image.clone(),
            category: item.category.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuStats {
    pub total: usize,
    pub available: usize,
}

/// A seller's menu, in insertion order
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an item from a draft. New items start available.
    pub fn add_item(&mut self, draft: MenuDraft) -> Result<&MenuItem, MenuError> {
        draft.validate()?;
        let item = MenuItem {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image: draft.image,
            available: true,
            category: draft.category,
        };
        info!(id = %item.id, name = %item.name, "menu item added");
        self.items.push(item);
        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    /// Replace an item's editable fields; id and availability are kept
    pub fn update_item(&mut self, id: &str, draft: MenuDraft) -> Result<&MenuItem, MenuError> {
        draft.validate()?;
        let item = self.find_mut(id)?;
        item.name = draft.name;
        item.description = draft.description;
        item.price = draft.price;
        item.image = draft.image;
        item.category = draft.category;
        info!(id, "menu item updated");
        Ok(item)
    }

    pub fn delete_item(&mut self, id: &str) -> Result<MenuItem, MenuError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| MenuError::MenuItemNotFound { id: id.to_string() })?;
        info!(id, "menu item deleted");
        Ok(self.items.remove(index))
    }

    /// Flip show/hide and return the new availability
    pub fn toggle_availability(&mut self, id: &str) -> Result<bool, MenuError> {
        let item = self.find_mut(id)?;
        item.available = !item.available;
        Ok(item.available)
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn stats(&self) -> MenuStats {
        MenuStats {
            total: self.items.len(),
            available: self.items.iter().filter(|item| item.available).count(),
        }
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut MenuItem, MenuError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| MenuError::MenuItemNotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: i64) -> MenuDraft {
        MenuDraft {
            name: name.to_string(),
            description: "Smoky party jollof".to_string(),
            price: Decimal::from(price),
            image: String::new(),
            category: "Nigerian".to_string(),
        }
    }

    #[test]
    fn test_add_generates_id_and_defaults_available() {
        let mut menu = Menu::new();
        let first = menu.add_item(draft("Jollof", 2500)).unwrap().id.clone();
        let second = menu.add_item(draft("Amala", 1500)).unwrap().id.clone();

        assert_ne!(first, second);
        assert!(menu.get(&first).unwrap().available);
        assert_eq!(menu.stats(), MenuStats { total: 2, available: 2 });
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut menu = Menu::new();
        assert!(matches!(
            menu.add_item(draft("  ", 100)),
            Err(MenuError::Invalid(_))
        ));
        assert!(menu.items().is_empty());
    }

    #[test]
    fn test_add_rejects_negative_price() {
        let mut menu = Menu::new();
        assert!(menu.add_item(draft("Jollof", -1)).is_err());
    }

    #[test]
    fn test_update_keeps_id_and_availability() {
        let mut menu = Menu::new();
        let id = menu.add_item(draft("Jollof", 2500)).unwrap().id.clone();
        menu.toggle_availability(&id).unwrap();

        let updated = menu.update_item(&id, draft("Jollof Special", 3000)).unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Jollof Special");
        assert_eq!(updated.price, Decimal::from(3000));
        assert!(!updated.available);
    }

    #[test]
    fn test_toggle_and_stats() {
        let mut menu = Menu::new();
        let id = menu.add_item(draft("Jollof", 2500)).unwrap().id.clone();
        menu.add_item(draft("Amala", 1500)).unwrap();

        assert!(!menu.toggle_availability(&id).unwrap());
        assert_eq!(menu.stats(), MenuStats { total: 2, available: 1 });
        assert!(menu.toggle_availability(&id).unwrap());
    }

    #[test]
    fn test_delete_unknown() {
        let mut menu = Menu::new();
        assert_eq!(
            menu.delete_item("missing"),
            Err(MenuError::MenuItemNotFound {
                id: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_draft_from_item_round_trips_fields() {
        let mut menu = Menu::new();
        let item = menu.add_item(draft("Jollof", 2500)).unwrap().clone();
        assert_eq!(MenuDraft::from(&item), draft("Jollof", 2500));
    }
}
