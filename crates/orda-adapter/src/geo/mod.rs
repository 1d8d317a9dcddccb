/*
[INPUT]:  Device position requests
[OUTPUT]: Best-effort coordinates or a denial
[POS]:    Geolocation layer - position source abstraction
[UPDATE]: When adding position sources
*/

use async_trait::async_trait;

use crate::error::{AdapterError, Result};
use crate::types::Coordinates;

/// Trait for position sources.
///
/// A denial is reported as `AdapterError::LocationDenied`.
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates>;
}

/// Geolocator that always reports the same position
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator {
    position: Coordinates,
}

impl FixedGeolocator {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            position: Coordinates::new(latitude, longitude),
        }
    }
}

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Coordinates> {
        Ok(self.position)
    }
}

/// Geolocator for users who refused location access
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedGeolocator;

#[async_trait]
impl Geolocator for DeniedGeolocator {
    async fn current_position(&self) -> Result<Coordinates> {
        Err(AdapterError::LocationDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_geolocator() {
        let geo = FixedGeolocator::new(7.7840, 4.5405);
        let position = geo.current_position().await.unwrap();
        assert_eq!(position, Coordinates::new(7.7840, 4.5405));
    }

    #[tokio::test]
    async fn test_denied_geolocator() {
        let err = DeniedGeolocator.current_position().await.unwrap_err();
        assert_eq!(err, AdapterError::LocationDenied);
    }
}
