/*
[INPUT]:  Storefront session and user input via CLI
[OUTPUT]: Browsing, cart, checkout, driver and seller workflows in the terminal
[POS]:    CLI interactive flow
[UPDATE]: When adding storefront screens or menu actions
*/

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Password, Select, theme::ColorfulTheme};
use rust_decimal::Decimal;
use tracing::debug;

use orda_storefront::checkout::{CheckoutForm, OrderConfirmation};
use orda_storefront::delivery::{DeliveryStateMachine, DeliveryStatus, DeliveryTask};
use orda_storefront::location::short_city;
use orda_storefront::menu::{MenuDraft, MenuItem};
use orda_storefront::{CartItem, Storefront};

use super::naira;

pub async fn run_interactive(store: &mut Storefront) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", style("Orda - food delivery").bold().cyan());

    loop {
        println!(
            "{} {}",
            style("Delivering to").dim(),
            style(short_city(store.location())).cyan()
        );
        match store.current_identity() {
            Some(identity) => println!("{} {}", style("Signed in as").dim(), identity.email),
            None => println!("{}", style("Not signed in").dim()),
        }

        let actions = vec![
            "Browse restaurants",
            "Search dishes",
            "Popular dishes",
            "Deals",
            "View cart",
            "Checkout",
            "Account",
            "Change location",
            "Driver dashboard",
            "Seller menu",
            "Exit",
        ];
        let selection = Select::with_theme(&theme)
            .with_prompt("Select action")
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => browse_restaurants(store, &theme)?,
            1 => search_dishes(store, &theme)?,
            2 => popular_dishes(store, &theme)?,
            3 => print_deals(store),
            4 => manage_cart(store, &theme)?,
            5 => checkout(store, &theme).await?,
            6 => account(store, &theme).await?,
            7 => change_location(store, &theme)?,
            8 => driver_dashboard(store, &theme)?,
            9 => seller_menu(store, &theme)?,
            _ => return Ok(()),
        }
        println!();
    }
}

fn browse_restaurants(store: &mut Storefront, theme: &ColorfulTheme) -> Result<()> {
    let catalog = store.catalog();
    println!("{}", style("Top restaurants").bold());
    for restaurant in catalog.top_restaurants() {
        let status = if restaurant.is_open {
            style("open").green()
        } else {
            style("closed").red()
        };
        println!(
            "  {} | {} | {:.1} | {} | fee {} | {}",
            style(&restaurant.name).cyan(),
            restaurant.cuisine,
            restaurant.rating,
            restaurant.delivery_time,
            naira(restaurant.delivery_fee),
            status
        );
        if let Some(promotion) = &restaurant.promotion {
            println!("      {}", style(promotion).yellow());
        }
    }

    browse_category(store, theme)
}

/// Trending dishes, optionally narrowed to one category
fn browse_category(store: &mut Storefront, theme: &ColorfulTheme) -> Result<()> {
    let catalog = store.catalog();
    let names: Vec<String> = catalog
        .categories()
        .iter()
        .map(|category| category.name.clone())
        .collect();
    let mut items = vec!["All".to_string()];
    items.extend(
        catalog
            .categories()
            .iter()
            .map(|category| format!("{} {} ({})", category.icon, category.name, category.count)),
    );
    items.push("Back".to_string());

    let selection = Select::with_theme(theme)
        .with_prompt("Browse by category")
        .items(&items)
        .default(0)
        .interact()?;
    let Some(category) = category_choice(&names, selection) else {
        return Ok(());
    };

    let ids: Vec<u64> = catalog
        .dishes_in_category(category)
        .iter()
        .map(|dish| dish.id)
        .collect();
    if ids.is_empty() {
        println!("{}", style("No dishes in this category yet.").yellow());
        return Ok(());
    }
    pick_dish(store, theme, &ids)
}

/// Map a picker row to a filter: row 0 is "All", the last row is "Back"
fn category_choice(names: &[String], selection: usize) -> Option<Option<&str>> {
    match selection {
        0 => Some(None),
        index => names.get(index - 1).map(|name| Some(name.as_str())),
    }
}

fn search_dishes(store: &mut Storefront, theme: &ColorfulTheme) -> Result<()> {
    let catalog = store.catalog();
    println!(
        "{} {}",
        style("Recent:").dim(),
        catalog.recent_searches().join(", ")
    );
    println!(
        "{} {}",
        style("Trending:").dim(),
        catalog.trending_searches().join(", ")
    );

    let query: String = Input::with_theme(theme)
        .with_prompt("Search for restaurants, dishes")
        .allow_empty(true)
        .interact_text()?;

    let hits: Vec<u64> = catalog.search_dishes(&query).iter().map(|dish| dish.id).collect();
    if hits.is_empty() {
        println!("{}", style("No dishes found.").yellow());
        return Ok(());
    }
    pick_dish(store, theme, &hits)
}

fn popular_dishes(store: &mut Storefront, theme: &ColorfulTheme) -> Result<()> {
    let ids: Vec<u64> = store
        .catalog()
        .popular_dishes()
        .iter()
        .map(|dish| dish.id)
        .collect();
    if ids.is_empty() {
        println!("{}", style("No dishes found.").yellow());
        return Ok(());
    }
    pick_dish(store, theme, &ids)
}

fn pick_dish(store: &mut Storefront, theme: &ColorfulTheme, ids: &[u64]) -> Result<()> {
    let dishes: Vec<_> = ids
        .iter()
        .filter_map(|id| store.catalog().dish(*id).cloned())
        .collect();
    let mut items: Vec<String> = dishes
        .iter()
        .map(|dish| {
            format!(
                "{} | {} | {} | {:.1}",
                dish.name,
                dish.restaurant,
                naira(dish.price),
                dish.rating
            )
        })
        .collect();
    items.push("Back".to_string());

    let selection = Select::with_theme(theme)
        .with_prompt("Add to cart")
        .items(&items)
        .default(0)
        .interact()?;

    if let Some(dish) = dishes.get(selection) {
        store.cart_mut().add_dish(dish);
        println!("{} {}", style("Added to cart:").green(), dish.name);
    }
    Ok(())
}

fn print_deals(store: &Storefront) {
    println!("{}", style("Featured deals").bold());
    for deal in store.catalog().deals() {
        println!(
            "  {} {} at {} | {} (was {}, save {}) | {}",
            style(&deal.discount).yellow().bold(),
            deal.dish,
            deal.restaurant,
            naira(deal.discounted_price),
            naira(deal.original_price),
            naira(deal.savings()),
            style(&deal.time_left).dim()
        );
    }
}

fn print_cart(store: &Storefront) {
    let cart = store.cart();
    if cart.is_empty() {
        println!("{}", style("Your cart is empty").yellow());
        return;
    }
    println!("{}", style(format!("Your Cart ({} items)", cart.len())).bold());
    for line in cart.items() {
        println!(
            "  {} x{} | {} | {}",
            line.name,
            line.quantity,
            line.restaurant,
            naira(line.line_total())
        );
    }
    let totals = store.cart_totals();
    println!("  {:<14}{}", "Subtotal", naira(totals.subtotal));
    println!("  {:<14}{}", "Delivery Fee", naira(totals.delivery_fee));
    println!("  {:<14}{}", style("Total").bold(), style(naira(totals.total)).bold());
}

fn manage_cart(store: &mut Storefront, theme: &ColorfulTheme) -> Result<()> {
    loop {
        print_cart(store);
        if store.cart().is_empty() {
            return Ok(());
        }

        let lines: Vec<CartItem> = store.cart().items().to_vec();
        let mut items: Vec<String> = lines
            .iter()
            .map(|line| format!("{} (x{})", line.name, line.quantity))
            .collect();
        items.push("Back".to_string());

        let selection = Select::with_theme(theme)
            .with_prompt("Select item")
            .items(&items)
            .default(0)
            .interact()?;
        let Some(line) = lines.get(selection) else {
            return Ok(());
        };

        let actions = vec!["Increase (+1)", "Decrease (-1)", "Remove", "Back"];
        let action = Select::with_theme(theme)
            .with_prompt(&line.name)
            .items(&actions)
            .default(0)
            .interact()?;
        let cart = store.cart_mut();
        match action {
            0 => {
                cart.adjust_quantity(line.id, 1)?;
            }
            1 => {
                cart.adjust_quantity(line.id, -1)?;
            }
            2 => {
                cart.remove(line.id)?;
            }
            _ => {}
        }
    }
}

async fn checkout(store: &mut Storefront, theme: &ColorfulTheme) -> Result<()> {
    print_cart(store);

    println!("{}", style("Delivery details").bold());
    let delivery_address: String = Input::with_theme(theme)
        .with_prompt("Delivery address")
        .allow_empty(true)
        .interact_text()?;
    let phone_number: String = Input::with_theme(theme)
        .with_prompt("Phone number")
        .allow_empty(true)
        .interact_text()?;
    let notes: String = Input::with_theme(theme)
        .with_prompt("Special instructions (optional)")
        .allow_empty(true)
        .interact_text()?;

    let total = store.cart_totals().total;
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Place order - {}?", naira(total)))
        .default(true)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    println!("{}", style("Placing order...").dim());
    let form = CheckoutForm::new(delivery_address, phone_number).with_notes(notes);
    // Failures were already reported through the notifier.
    if let Ok(confirmation) = store.place_order(&form).await {
        println!("{}", confirmation_line(&confirmation));
    }
    Ok(())
}

fn confirmation_line(confirmation: &OrderConfirmation) -> String {
    format!(
        "{} {} to {}, estimated delivery {}",
        style("Order placed").green(),
        naira(confirmation.totals.total),
        confirmation.delivery_address,
        style(&confirmation.estimated_delivery).cyan()
    )
}

async fn account(store: &mut Storefront, theme: &ColorfulTheme) -> Result<()> {
    if let Some(identity) = store.current_identity() {
        let sign_out = Confirm::with_theme(theme)
            .with_prompt(format!("Sign out {}?", identity.email))
            .default(false)
            .interact()?;
        if sign_out {
            store.logout().await?;
            println!("{}", style("Signed out.").green());
        }
        return Ok(());
    }

    let actions = vec!["Sign in", "Create account", "Back"];
    let selection = Select::with_theme(theme)
        .with_prompt("Account")
        .items(&actions)
        .default(0)
        .interact()?;
    if selection > 1 {
        return Ok(());
    }

    let email: String = Input::with_theme(theme)
        .with_prompt("Email")
        .interact_text()?;
    let password = Password::with_theme(theme)
        .with_prompt("Password")
        .interact()?;

    let result = if selection == 0 {
        store.login(&email, &password).await
    } else {
        store.register(&email, &password).await
    };
    // The notifier has already shown the outcome.
    if let Err(err) = result {
        debug!(error = %err, "auth failed");
    }
    Ok(())
}

fn change_location(store: &mut Storefront, theme: &ColorfulTheme) -> Result<()> {
    let cities = store.supported_cities().to_vec();
    let current = cities
        .iter()
        .position(|city| city == store.location())
        .unwrap_or(0);
    let selection = Select::with_theme(theme)
        .with_prompt("Choose your location")
        .items(&cities)
        .default(current)
        .interact()?;
    let city = store.select_location(&cities[selection])?;
    println!("{} {}", style("Delivering to").dim(), style(city).cyan());
    Ok(())
}

fn print_task(task: &DeliveryTask) {
    println!(
        "  #{} [{}] {} -> {} | {} | {} | {}",
        task.id,
        task.status.badge(),
        task.restaurant_name,
        task.customer_name,
        task.distance,
        task.estimated_time,
        style(naira(task.delivery_fee)).green()
    );
}

fn driver_dashboard(store: &mut Storefront, theme: &ColorfulTheme) -> Result<()> {
    loop {
        let stats = store.driver_stats();
        let status = if store.driver().is_online() {
            style("Online").green()
        } else {
            style("Offline").red()
        };
        println!(
            "{} {} | earnings {} | completed {} | active {} | available {}",
            style("Driver").bold(),
            status,
            naira(stats.earnings),
            stats.completed,
            stats.active,
            stats.available
        );

        let actions = vec![
            "Go online / offline",
            "Accept delivery",
            "Update my deliveries",
            "Back",
        ];
        let selection = Select::with_theme(theme)
            .with_prompt("Driver action")
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                store.toggle_online();
            }
            1 => accept_delivery(store, theme)?,
            2 => update_delivery(store, theme)?,
            _ => return Ok(()),
        }
    }
}

fn accept_delivery(store: &mut Storefront, theme: &ColorfulTheme) -> Result<()> {
    let available: Vec<DeliveryTask> = store.available_tasks().to_vec();
    if available.is_empty() {
        println!("{}", style("No available deliveries.").yellow());
        return Ok(());
    }
    for task in &available {
        print_task(task);
    }

    let mut items: Vec<String> = available
        .iter()
        .map(|task| format!("#{} {} ({})", task.id, task.restaurant_name, naira(task.order_total)))
        .collect();
    items.push("Back".to_string());
    let selection = Select::with_theme(theme)
        .with_prompt("Accept delivery")
        .items(&items)
        .default(0)
        .interact()?;
    let Some(task) = available.get(selection) else {
        return Ok(());
    };

    match store.claim_task(&task.id) {
        Ok(task) => println!("{} #{}", style("Accepted").green(), task.id),
        Err(err) => println!("{}", style(err).red()),
    }
    Ok(())
}

fn update_delivery(store: &mut Storefront, theme: &ColorfulTheme) -> Result<()> {
    let open: Vec<DeliveryTask> = store
        .driver()
        .active_tasks()
        .iter()
        .filter(|task| !task.status.is_terminal())
        .cloned()
        .collect();
    if open.is_empty() {
        println!("{}", style("No deliveries in progress.").yellow());
        return Ok(());
    }

    let mut items: Vec<String> = open
        .iter()
        .map(|task| {
            let next = DeliveryStateMachine::successor(task.status)
                .map(|status| action_label(status).to_string())
                .unwrap_or_default();
            format!("#{} {} [{}] -> {}", task.id, task.restaurant_name, task.status.badge(), next)
        })
        .collect();
    items.push("Back".to_string());

    let selection = Select::with_theme(theme)
        .with_prompt("Update delivery")
        .items(&items)
        .default(0)
        .interact()?;
    let Some(task) = open.get(selection) else {
        return Ok(());
    };
    let Some(next) = DeliveryStateMachine::successor(task.status) else {
        return Ok(());
    };

    match store.advance_task(&task.id, next) {
        Ok(task) => println!("#{} is now {}", task.id, style(task.status.badge()).cyan()),
        Err(err) => println!("{}", style(err).red()),
    }
    Ok(())
}

fn action_label(next: DeliveryStatus) -> &'static str {
    match next {
        DeliveryStatus::Pending => "Reset",
        DeliveryStatus::Accepted => "Accept",
        DeliveryStatus::PickedUp => "Mark Picked Up",
        DeliveryStatus::Delivered => "Mark Delivered",
    }
}

fn seller_menu(store: &mut Storefront, theme: &ColorfulTheme) -> Result<()> {
    loop {
        let stats = store.menu().stats();
        println!(
            "{} {} items, {} available",
            style("Menu").bold(),
            stats.total,
            stats.available
        );
        for item in store.menu().items() {
            let badge = if item.available {
                style("Available").green()
            } else {
                style("Hidden").dim()
            };
            println!("  {} | {} | {} | {}", item.name, item.category, naira(item.price), badge);
        }

        let actions = vec!["Add item", "Edit item", "Show / hide item", "Delete item", "Back"];
        let selection = Select::with_theme(theme)
            .with_prompt("Seller action")
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let draft = prompt_draft(theme, &MenuDraft::default())?;
                match store.menu_mut().add_item(draft) {
                    Ok(item) => println!("{} {}", style("Item added:").green(), item.name),
                    Err(err) => println!("{}", style(err).red()),
                }
            }
            1 => {
                let Some(item) = select_menu_item(store, theme, "Select item to edit")? else {
                    continue;
                };
                let draft = prompt_draft(theme, &MenuDraft::from(&item))?;
                match store.menu_mut().update_item(&item.id, draft) {
                    Ok(item) => println!("{} {}", style("Item updated:").green(), item.name),
                    Err(err) => println!("{}", style(err).red()),
                }
            }
            2 => {
                let Some(item) = select_menu_item(store, theme, "Select item")? else {
                    continue;
                };
                let available = store.menu_mut().toggle_availability(&item.id)?;
                let state = if available { "available" } else { "hidden" };
                println!("{} is now {}", item.name, state);
            }
            3 => {
                let Some(item) = select_menu_item(store, theme, "Select item to delete")? else {
                    continue;
                };
                let confirmed = Confirm::with_theme(theme)
                    .with_prompt(format!("Delete '{}'?", item.name))
                    .default(false)
                    .interact()?;
                if confirmed {
                    store.menu_mut().delete_item(&item.id)?;
                    println!("{}", style("Item deleted.").green());
                }
            }
            _ => return Ok(()),
        }
    }
}

fn select_menu_item(
    store: &Storefront,
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<MenuItem>> {
    let items = store.menu().items();
    if items.is_empty() {
        println!("{}", style("No menu items yet.").yellow());
        return Ok(None);
    }
    let labels: Vec<String> = items
        .iter()
        .map(|item| format!("{} | {}", item.name, naira(item.price)))
        .collect();
    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(items.get(selection).cloned())
}

fn prompt_draft(theme: &ColorfulTheme, current: &MenuDraft) -> Result<MenuDraft> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Item name")
        .with_initial_text(current.name.clone())
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .with_initial_text(current.description.clone())
        .allow_empty(true)
        .interact_text()?;
    let price: Decimal = Input::with_theme(theme)
        .with_prompt("Price (NGN)")
        .default(current.price)
        .interact_text()?;
    let category: String = Input::with_theme(theme)
        .with_prompt("Category")
        .with_initial_text(current.category.clone())
        .allow_empty(true)
        .interact_text()?;
    let image: String = Input::with_theme(theme)
        .with_prompt("Image URL")
        .with_initial_text(current.image.clone())
        .allow_empty(true)
        .interact_text()?;

    Ok(MenuDraft {
        name,
        description,
        price,
        image,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use orda_storefront::compute_totals;
    use orda_storefront::seed;

    #[test]
    fn test_confirmation_line_does_not_claim_payment() {
        let confirmation = OrderConfirmation {
            customer_email: "customer@orda.ng".to_string(),
            totals: compute_totals(&seed::cart_items(), Decimal::from(500)),
            unit_count: 3,
            delivery_address: "12 Gbongan Road".to_string(),
            notes: None,
            estimated_delivery: "25-35 minutes".to_string(),
            placed_at: Utc::now(),
        };

        let line = confirmation_line(&confirmation);
        assert!(line.contains("Order placed"));
        assert!(line.contains("₦8,500"));
        assert!(!line.contains("Paid"));
    }

    #[test]
    fn test_category_choice_maps_rows() {
        let names: Vec<String> = seed::categories().into_iter().map(|c| c.name).collect();

        assert_eq!(category_choice(&names, 0), Some(None));
        assert_eq!(category_choice(&names, 1), Some(Some(names[0].as_str())));
        assert_eq!(category_choice(&names, names.len() + 1), None);
    }

    #[test]
    fn test_category_choice_filters_catalog() {
        let catalog = orda_storefront::Catalog::seeded();
        let names: Vec<String> = catalog.categories().iter().map(|c| c.name.clone()).collect();
        let row = names.iter().position(|name| name == "Nigerian").unwrap() + 1;

        let category = category_choice(&names, row).unwrap();
        let dishes = catalog.dishes_in_category(category);
        assert!(!dishes.is_empty());
        assert!(dishes.iter().all(|dish| dish.category == "Nigerian"));
    }
}
