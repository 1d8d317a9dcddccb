/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When StorefrontConfig schema changes
*/

use anyhow::{Context, Result, anyhow};
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use rust_decimal::Decimal;
use std::path::PathBuf;

use orda_storefront::config::{CheckoutConfig, LocationConfig, StorefrontConfig};

pub fn run_init(output: PathBuf) -> Result<()> {
    println!("{}", style("Welcome to Orda storefront init").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a storefront configuration.").dim()
    );

    let theme = ColorfulTheme::default();
    let defaults = StorefrontConfig::default();

    println!("\n{}", style("--- Pricing ---").bold());
    let delivery_fee: String = Input::with_theme(&theme)
        .with_prompt("Delivery fee (NGN)")
        .default(defaults.delivery_fee.to_string())
        .interact_text()?;
    let delivery_fee: Decimal = delivery_fee
        .trim()
        .parse()
        .map_err(|err| anyhow!("invalid delivery fee '{}': {}", delivery_fee, err))?;

    println!("\n{}", style("--- Checkout ---").bold());
    let placement_delay_ms: u64 = Input::with_theme(&theme)
        .with_prompt("Simulated placement delay (ms)")
        .default(defaults.checkout.placement_delay_ms)
        .interact_text()?;

    let estimated_delivery: String = Input::with_theme(&theme)
        .with_prompt("Estimated delivery label")
        .default(defaults.checkout.estimated_delivery.clone())
        .interact_text()?;

    println!("\n{}", style("--- Location ---").bold());
    let cities = defaults.location.cities.clone();
    let default_index = cities
        .iter()
        .position(|city| *city == defaults.location.default_city)
        .unwrap_or(0);
    let selection = Select::with_theme(&theme)
        .with_prompt("City shown when location access is denied")
        .items(&cities)
        .default(default_index)
        .interact()?;

    let config = StorefrontConfig {
        delivery_fee,
        checkout: CheckoutConfig {
            placement_delay_ms,
            estimated_delivery,
        },
        location: LocationConfig {
            default_city: cities[selection].clone(),
            ..defaults.location
        },
    };
    config.validate().context("generated config is invalid")?;

    let yaml = serde_yaml::to_string(&config).context("failed to serialize config to YAML")?;

    std::fs::write(&output, yaml)
        .context(format!("failed to write config to {}", output.display()))?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!(
        "Configuration written to: {}",
        style(output.display()).cyan()
    );

    Ok(())
}
