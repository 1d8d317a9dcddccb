/*
[INPUT]:  Geolocator readings (coordinates or denial), manual city picks
[OUTPUT]: Display location string for the "Delivering to ..." banner
[POS]:    Location layer - placeholder proximity heuristic
[UPDATE]: When served areas or the proximity rule change
*/

use orda_adapter::{Coordinates, Geolocator};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::LocationConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("We don't deliver to {0} yet")]
    UnsupportedCity(String),
}

/// Maps a position to one of two display cities by a degree-distance cutoff.
///
/// This is not geofencing: the distance is Euclidean over raw lat/lng.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    config: LocationConfig,
}

impl LocationResolver {
    pub fn new(config: LocationConfig) -> Self {
        Self { config }
    }

    /// City for a known position
    pub fn resolve_coordinates(&self, position: &Coordinates) -> &str {
        let distance = position.degree_distance(&self.config.reference);
        if distance < self.config.threshold_degrees {
            &self.config.matched_city
        } else {
            &self.config.fallback_city
        }
    }

    /// Ask the geolocator once and pick a city; any failure yields the default
    pub async fn detect(&self, geolocator: &dyn Geolocator) -> String {
        match geolocator.current_position().await {
            Ok(position) => {
                let city = self.resolve_coordinates(&position);
                info!(
                    latitude = position.latitude,
                    longitude = position.longitude,
                    city,
                    "location detected"
                );
                city.to_string()
            }
            Err(err) => {
                warn!(error = %err, city = %self.config.default_city, "location unavailable, using default");
                self.config.default_city.clone()
            }
        }
    }

    /// Manual pick from the location list
    pub fn select(&self, city: &str) -> Result<String, LocationError> {
        self.config
            .cities
            .iter()
            .find(|candidate| candidate.as_str() == city)
            .cloned()
            .ok_or_else(|| LocationError::UnsupportedCity(city.to_string()))
    }

    pub fn cities(&self) -> &[String] {
        &self.config.cities
    }

    pub fn default_city(&self) -> &str {
        &self.config.default_city
    }
}

/// Leading segment of a display location, e.g. `Osogbo` for `Osogbo, Osun State`
pub fn short_city(location: &str) -> &str {
    location.split(',').next().unwrap_or(location).trim()
}
