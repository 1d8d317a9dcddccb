/*
[INPUT]:  Seeded listings, search queries, category selections
[OUTPUT]: Restaurant/dish listings, search hits, popularity ranking, deals
[POS]:    Catalog domain layer - read-only browsing
[UPDATE]: When listing fields or ranking rules change
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const TOP_RESTAURANTS: usize = 6;
const POPULAR_DISHES: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u64,
    pub name: String,
    pub cuisine: String,
    pub image: String,
    pub rating: f32,
    pub delivery_time: String,
    pub delivery_fee: Decimal,
    pub is_open: bool,
    pub specialties: Vec<String>,
    #[serde(default)]
    pub distance_km: Option<f32>,
    #[serde(default)]
    pub promotion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: u64,
    pub name: String,
    pub restaurant: String,
    pub price: Decimal,
    pub image: String,
    pub rating: f32,
    pub prep_time: String,
    pub category: String,
}

impl Dish {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.restaurant.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub icon: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: u64,
    pub discount: String,
    pub restaurant: String,
    pub dish: String,
    pub original_price: Decimal,
    pub discounted_price: Decimal,
    pub rating: f32,
    pub image: String,
    pub time_left: String,
}

impl Deal {
    pub fn savings(&self) -> Decimal {
        self.original_price - self.discounted_price
    }
}

/// Everything the home and search screens list
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    dishes: Vec<Dish>,
    categories: Vec<Category>,
    deals: Vec<Deal>,
}

impl Catalog {
    pub fn new(
        restaurants: Vec<Restaurant>,
        dishes: Vec<Dish>,
        categories: Vec<Category>,
        deals: Vec<Deal>,
    ) -> Self {
        Self {
            restaurants,
            dishes,
            categories,
            deals,
        }
    }

    pub fn seeded() -> Self {
        Self::new(
            crate::seed::restaurants(),
            crate::seed::trending_dishes(),
            crate::seed::categories(),
            crate::seed::deals(),
        )
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// First six restaurants in listing order
    pub fn top_restaurants(&self) -> &[Restaurant] {
        let end = self.restaurants.len().min(TOP_RESTAURANTS);
        &self.restaurants[..end]
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn dish(&self, id: u64) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.id == id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    /// Case-insensitive substring search over name, restaurant and category.
    /// A blank query returns nothing.
    pub fn search_dishes(&self, query: &str) -> Vec<&Dish> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.dishes.iter().filter(|dish| dish.matches(&needle)).collect()
    }

    /// Dishes in an exact category; `None` lists every dish
    pub fn dishes_in_category(&self, category: Option<&str>) -> Vec<&Dish> {
        match category {
            Some(category) => self
                .dishes
                .iter()
                .filter(|dish| dish.category == category)
                .collect(),
            None => self.dishes.iter().collect(),
        }
    }

    /// Highest rated first, at most six
    pub fn popular_dishes(&self) -> Vec<&Dish> {
        let mut ranked: Vec<&Dish> = self.dishes.iter().collect();
        ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        ranked.truncate(POPULAR_DISHES);
        ranked
    }

    pub fn recent_searches(&self) -> &'static [&'static str] {
        &crate::seed::RECENT_SEARCHES
    }

    pub fn trending_searches(&self) -> &'static [&'static str] {
        &crate::seed::TRENDING_SEARCHES
    }
}
