/*
[INPUT]:  Position source scenarios
[OUTPUT]: Test results for geolocators
[POS]:    Integration tests - geolocation
[UPDATE]: When position sources change
*/

mod common;

use common::osogbo;
use orda_adapter::{AdapterError, Coordinates, DeniedGeolocator, FixedGeolocator, Geolocator};
use rstest::rstest;

#[rstest]
#[case(7.7840, 4.5405)]
#[case(6.5244, 3.3792)]
#[case(-33.8688, 151.2093)]
#[tokio::test]
async fn test_fixed_geolocator_reports_position(#[case] lat: f64, #[case] lng: f64) {
    let geo: Box<dyn Geolocator> = Box::new(FixedGeolocator::new(lat, lng));
    let position = geo.current_position().await.unwrap();
    assert_eq!(position, Coordinates::new(lat, lng));
}

#[tokio::test]
async fn test_denied_geolocator_reports_denial() {
    let geo: Box<dyn Geolocator> = Box::new(DeniedGeolocator);
    let err = geo.current_position().await.unwrap_err();
    assert_eq!(err, AdapterError::LocationDenied);
    assert!(err.is_location_error());
}

#[test]
fn test_distance_from_osogbo() {
    let (lat, lng) = osogbo();
    let centre = Coordinates::new(lat, lng);
    let nearby = Coordinates::new(lat + 0.03, lng + 0.04);
    assert!((centre.degree_distance(&nearby) - 0.05).abs() < 1e-9);
}
