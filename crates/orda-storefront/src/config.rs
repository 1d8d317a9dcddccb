/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed storefront configuration
[POS]:    Configuration layer - pricing, checkout and location settings
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Result, anyhow};
use orda_adapter::Coordinates;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level configuration for the storefront.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorefrontConfig {
    /// Flat fee added to every cart total
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: Decimal,
    #[serde(default)]
    pub checkout: CheckoutConfig,
    #[serde(default)]
    pub location: LocationConfig,
}

/// Simulated order placement settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckoutConfig {
    /// Delay standing in for network latency
    #[serde(default = "default_placement_delay_ms")]
    pub placement_delay_ms: u64,
    /// Label shown on the confirmation
    #[serde(default = "default_estimated_delivery")]
    pub estimated_delivery: String,
}

/// Display-location heuristic settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocationConfig {
    /// Centre of the served area
    #[serde(default = "default_reference")]
    pub reference: Coordinates,
    /// Radius in raw degrees (roughly 10 km at 0.1)
    #[serde(default = "default_threshold_degrees")]
    pub threshold_degrees: f64,
    /// Shown when the user is within the radius
    #[serde(default = "default_served_city")]
    pub matched_city: String,
    /// Shown when the user is outside the radius
    #[serde(default = "default_fallback_city")]
    pub fallback_city: String,
    /// Shown when location access is denied
    #[serde(default = "default_served_city")]
    pub default_city: String,
    /// Choices offered by the location picker
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            delivery_fee: default_delivery_fee(),
            checkout: CheckoutConfig::default(),
            location: LocationConfig::default(),
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            placement_delay_ms: default_placement_delay_ms(),
            estimated_delivery: default_estimated_delivery(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            reference: default_reference(),
            threshold_degrees: default_threshold_degrees(),
            matched_city: default_served_city(),
            fallback_city: default_fallback_city(),
            default_city: default_served_city(),
            cities: default_cities(),
        }
    }
}

fn default_delivery_fee() -> Decimal {
    Decimal::from(500)
}

fn default_placement_delay_ms() -> u64 {
    2000
}

fn default_estimated_delivery() -> String {
    "25-35 minutes".to_string()
}

fn default_reference() -> Coordinates {
    Coordinates::new(7.7840, 4.5405)
}

fn default_threshold_degrees() -> f64 {
    0.1
}

fn default_served_city() -> String {
    "Osogbo, Osun State".to_string()
}

fn default_fallback_city() -> String {
    "Lagos, Nigeria".to_string()
}

fn default_cities() -> Vec<String> {
    [
        "Lagos, Nigeria",
        "Abuja, Nigeria",
        "Port Harcourt, Nigeria",
        "Kano, Nigeria",
        "Ibadan, Nigeria",
        "Osogbo, Osun State",
    ]
    .iter()
    .map(|city| city.to_string())
    .collect()
}

impl CheckoutConfig {
    pub fn placement_delay(&self) -> Duration {
        Duration::from_millis(self.placement_delay_ms)
    }
}

impl StorefrontConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document is not a mapping; treat it as all defaults.
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.delivery_fee.is_sign_negative() {
            return Err(anyhow!("delivery_fee cannot be negative"));
        }
        let location = &self.location;
        if !(location.threshold_degrees.is_finite() && location.threshold_degrees > 0.0) {
            return Err(anyhow!("location.threshold_degrees must be a positive number"));
        }
        if location.cities.is_empty() {
            return Err(anyhow!("location.cities cannot be empty"));
        }
        for city in [&location.matched_city, &location.fallback_city, &location.default_city] {
            if !location.cities.contains(city) {
                return Err(anyhow!("city '{}' is not listed in location.cities", city));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = StorefrontConfig::from_yaml("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.delivery_fee, Decimal::from(500));
        assert_eq!(config.checkout.placement_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_document() {
        let yaml = "delivery_fee: 700\ncheckout:\n  placement_delay_ms: 10\n";
        let config = StorefrontConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.delivery_fee, Decimal::from(700));
        assert_eq!(config.checkout.placement_delay_ms, 10);
        assert_eq!(config.checkout.estimated_delivery, "25-35 minutes");
        assert_eq!(config.location, LocationConfig::default());
    }

    #[test]
    fn test_rejects_unlisted_city() {
        let yaml = "location:\n  fallback_city: Accra, Ghana\n";
        let err = StorefrontConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("Accra"));
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        let yaml = "location:\n  threshold_degrees: 0\n";
        assert!(StorefrontConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = StorefrontConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(StorefrontConfig::from_yaml(&yaml).unwrap(), config);
    }
}
