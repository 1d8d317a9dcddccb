/*
[INPUT]:  Collaborator data shapes and serde requirements
[OUTPUT]: Identity, coordinate and notification records
[POS]:    Data layer - type definitions for collaborator communication
[UPDATE]: When collaborator payloads change or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Planar distance over raw degrees. Not a geodesic distance.
    pub fn degree_distance(&self, other: &Coordinates) -> f64 {
        let d_lat = self.latitude - other.latitude;
        let d_lng = self.longitude - other.longitude;
        (d_lat * d_lat + d_lng * d_lng).sqrt()
    }
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, is_error: bool) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            is_error,
        }
    }
}
