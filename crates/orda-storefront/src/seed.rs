/*
[INPUT]:  None (literal demo data)
[OUTPUT]: Seeded restaurants, dishes, categories, deals, cart lines, delivery tasks
[POS]:    Mock data layer - stands in for a backend
[UPDATE]: When demo listings change
*/

use rust_decimal::Decimal;

use crate::cart::CartItem;
use crate::catalog::{Category, Deal, Dish, Restaurant};
use crate::delivery::{DeliveryStatus, DeliveryTask, TaskId};

pub const RECENT_SEARCHES: [&str; 3] = ["Mama Cass Kitchen", "Suya Platter", "Continental Bistro"];

pub const TRENDING_SEARCHES: [&str; 8] = [
    "Jollof Rice",
    "Chicken",
    "Suya",
    "Pizza",
    "Shawarma",
    "Fried Rice",
    "Pepper Soup",
    "Egusi",
];

fn naira(amount: i64) -> Decimal {
    Decimal::from(amount)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn delivery_tasks() -> Vec<DeliveryTask> {
    vec![
        DeliveryTask {
            id: TaskId::new("1"),
            restaurant_name: "Embassy Restaurant".to_string(),
            customer_name: "John Doe".to_string(),
            customer_phone: "+234 801 234 5678".to_string(),
            pickup_address: "Embassy Restaurant, Old Garage, Osogbo".to_string(),
            delivery_address: "123 Oke-Fia, Osogbo, Osun State".to_string(),
            order_total: naira(3500),
            delivery_fee: naira(500),
            status: DeliveryStatus::Pending,
            estimated_time: "25 mins".to_string(),
            distance: "2.5 km".to_string(),
        },
        DeliveryTask {
            id: TaskId::new("2"),
            restaurant_name: "BT Barbecue".to_string(),
            customer_name: "Jane Smith".to_string(),
            customer_phone: "+234 802 345 6789".to_string(),
            pickup_address: "BT Barbecue, Gbodofon, Osogbo".to_string(),
            delivery_address: "456 Alekuwodo, Osogbo, Osun State".to_string(),
            order_total: naira(2800),
            delivery_fee: naira(500),
            status: DeliveryStatus::Pending,
            estimated_time: "20 mins".to_string(),
            distance: "1.8 km".to_string(),
        },
    ]
}

pub fn cart_items() -> Vec<CartItem> {
    vec![
        CartItem {
            id: 1,
            name: "Jollof Rice & Chicken".to_string(),
            restaurant: "Mama Cass Kitchen".to_string(),
            price: naira(2500),
            quantity: 2,
            image: "https://images.unsplash.com/photo-1596040033229-a9821ebd058d?w=150".to_string(),
        },
        CartItem {
            id: 2,
            name: "Suya Platter".to_string(),
            restaurant: "Suya Spot".to_string(),
            price: naira(3000),
            quantity: 1,
            image: "https://images.unsplash.com/photo-1599487488170-d11ec9c172f0?w=150".to_string(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn restaurant(
    id: u64,
    name: &str,
    cuisine: &str,
    image: &str,
    rating: f32,
    delivery_time: &str,
    delivery_fee: i64,
    specialties: &[&str],
    distance_km: f32,
    promotion: Option<&str>,
) -> Restaurant {
    Restaurant {
        id,
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        image: image.to_string(),
        rating,
        delivery_time: delivery_time.to_string(),
        delivery_fee: naira(delivery_fee),
        is_open: true,
        specialties: strings(specialties),
        distance_km: Some(distance_km),
        promotion: promotion.map(str::to_string),
    }
}

pub fn restaurants() -> Vec<Restaurant> {
    vec![
        restaurant(
            1,
            "Embassy Restaurant",
            "Continental",
            "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=400",
            4.5,
            "20-30 mins",
            500,
            &["Continental", "Local Dishes", "Grills"],
            1.2,
            Some("10% off first order"),
        ),
        restaurant(
            2,
            "Alhaja Food Canteen",
            "Local (Yoruba)",
            "https://images.unsplash.com/photo-1596040033229-a9821ebd058d?w=400",
            4.3,
            "15-25 mins",
            400,
            &["Amala", "Gbegiri", "Ewedu"],
            0.8,
            None,
        ),
        restaurant(
            3,
            "Stomach Care",
            "Nigerian",
            "https://images.unsplash.com/photo-1596040033229-a9821ebd058d?w=400",
            4.4,
            "20-30 mins",
            450,
            &["Jollof Rice", "Fried Rice", "Chicken"],
            1.5,
            Some("Free delivery on orders above ₦5000"),
        ),
        restaurant(
            4,
            "Amazing Taste Delicacies",
            "African Fusion",
            "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=400",
            4.6,
            "25-35 mins",
            550,
            &["Fusion Dishes", "Local Delicacies"],
            2.1,
            None,
        ),
        restaurant(
            5,
            "BT Barbecue",
            "Barbecue",
            "https://images.unsplash.com/photo-1599487488170-d11ec9c172f0?w=400",
            4.7,
            "15-20 mins",
            500,
            &["Suya", "Grilled Chicken", "Barbecue"],
            0.9,
            Some("Buy 1 get 1 half price on suya"),
        ),
        restaurant(
            6,
            "Shawarma & Co",
            "Fast Food",
            "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=400",
            4.2,
            "10-15 mins",
            300,
            &["Shawarma", "Burgers", "Fries"],
            1.1,
            None,
        ),
        restaurant(
            7,
            "BET Ofada & More",
            "Yoruba Traditional",
            "https://images.unsplash.com/photo-1572802419224-296b0aeee0d9?w=400",
            4.5,
            "20-25 mins",
            450,
            &["Ofada Rice", "Traditional Stews"],
            1.8,
            Some("Free drink with combo meal"),
        ),
        restaurant(
            8,
            "Elysium Restaurant",
            "Continental",
            "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=400",
            4.8,
            "20-30 mins",
            600,
            &["Continental Cuisine", "Fine Dining"],
            2.3,
            None,
        ),
    ]
}

pub fn trending_dishes() -> Vec<Dish> {
    vec![
        Dish {
            id: 1,
            name: "Jollof Rice & Chicken".to_string(),
            restaurant: "Embassy Restaurant".to_string(),
            price: naira(2500),
            image: "https://images.unsplash.com/photo-1596040033229-a9821ebd058d?w=400".to_string(),
            rating: 4.8,
            prep_time: "25-30 mins".to_string(),
            category: "Nigerian".to_string(),
        },
        Dish {
            id: 2,
            name: "Pepper Soup".to_string(),
            restaurant: "Alhaja Food Canteen".to_string(),
            price: naira(1800),
            image: "https://images.unsplash.com/photo-1567620905732-2d1ec7ab7445?w=400".to_string(),
            rating: 4.6,
            prep_time: "20-25 mins".to_string(),
            category: "Nigerian".to_string(),
        },
        Dish {
            id: 3,
            name: "Suya Platter".to_string(),
            restaurant: "BT Barbecue".to_string(),
            price: naira(3000),
            image: "https://images.unsplash.com/photo-1599487488170-d11ec9c172f0?w=400".to_string(),
            rating: 4.9,
            prep_time: "15-20 mins".to_string(),
            category: "Suya & Grills".to_string(),
        },
    ]
}

pub fn categories() -> Vec<Category> {
    [
        ("Nigerian", "🍛", 120),
        ("Continental", "🍝", 45),
        ("Fast Food", "🍔", 68),
        ("Suya & Grills", "🥩", 32),
        ("Swallow", "🥣", 89),
        ("Drinks", "🥤", 156),
    ]
    .into_iter()
    .map(|(name, icon, count)| Category {
        name: name.to_string(),
        icon: icon.to_string(),
        count,
    })
    .collect()
}

pub fn deals() -> Vec<Deal> {
    vec![
        Deal {
            id: 1,
            discount: "40% OFF".to_string(),
            restaurant: "Mama's Kitchen".to_string(),
            dish: "Jollof Rice Combo".to_string(),
            original_price: naira(3500),
            discounted_price: naira(2100),
            rating: 4.8,
            image: "https://images.unsplash.com/photo-1596040033229-a9821ebd058d?w=400".to_string(),
            time_left: "2 hours left".to_string(),
        },
        Deal {
            id: 2,
            discount: "35% OFF".to_string(),
            restaurant: "Suya Master".to_string(),
            dish: "Beef Suya Platter".to_string(),
            original_price: naira(4000),
            discounted_price: naira(2600),
            rating: 4.9,
            image: "https://images.unsplash.com/photo-1599487488170-d11ec9c172f0?w=400".to_string(),
            time_left: "5 hours left".to_string(),
        },
        Deal {
            id: 3,
            discount: "30% OFF".to_string(),
            restaurant: "Continental Delights".to_string(),
            dish: "Pasta & Chicken".to_string(),
            original_price: naira(3000),
            discounted_price: naira(2100),
            rating: 4.6,
            image: "https://images.unsplash.com/photo-1572802419224-296b0aeee0d9?w=400".to_string(),
            time_left: "1 hour left".to_string(),
        },
    ]
}
