/*
[INPUT]:  Seed data or dispatcher-published delivery jobs
[OUTPUT]: DeliveryTask records and the DeliveryStatus domain
[POS]:    Delivery domain layer - task data model
[UPDATE]: When task attributes or status names change
*/

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DeliveryError;

/// Opaque delivery task identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Delivery progress.
///
/// Ordering follows the lifecycle: `Pending < Accepted < PickedUp < Delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    Accepted,
    PickedUp,
    Delivered,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 4] = [
        DeliveryStatus::Pending,
        DeliveryStatus::Accepted,
        DeliveryStatus::PickedUp,
        DeliveryStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Accepted => "accepted",
            DeliveryStatus::PickedUp => "picked_up",
            DeliveryStatus::Delivered => "delivered",
        }
    }

    /// Badge text, e.g. `PICKED UP`
    pub fn badge(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DeliveryStatus::Delivered)
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryStatus {
    type Err = DeliveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pending" => Ok(DeliveryStatus::Pending),
            "accepted" => Ok(DeliveryStatus::Accepted),
            "picked_up" => Ok(DeliveryStatus::PickedUp),
            "delivered" => Ok(DeliveryStatus::Delivered),
            other => Err(DeliveryError::UnknownStatus(other.to_string())),
        }
    }
}

/// A delivery job shown on the driver dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryTask {
    pub id: TaskId,
    pub restaurant_name: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub pickup_address: String,
    pub delivery_address: String,
    pub order_total: Decimal,
    pub delivery_fee: Decimal,
    pub status: DeliveryStatus,
    /// Display label, e.g. "25 mins"
    pub estimated_time: String,
    /// Display label, e.g. "2.5 km"
    pub distance: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_order_follows_lifecycle() {
        let mut sorted = DeliveryStatus::ALL;
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, DeliveryStatus::ALL);
        assert!(DeliveryStatus::Pending < DeliveryStatus::Delivered);
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in DeliveryStatus::ALL {
            assert_eq!(status.as_str().parse::<DeliveryStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status() {
        let err = "cancelled".parse::<DeliveryStatus>().unwrap_err();
        assert!(matches!(err, DeliveryError::UnknownStatus(ref s) if s == "cancelled"));
    }

    #[test]
    fn test_status_badge() {
        assert_eq!(DeliveryStatus::PickedUp.badge(), "PICKED UP");
        assert_eq!(DeliveryStatus::Accepted.badge(), "ACCEPTED");
    }

    #[test]
    fn test_status_serde_uses_snake_case() {
        let json = serde_json::to_string(&DeliveryStatus::PickedUp).unwrap();
        assert_eq!(json, "\"picked_up\"");
    }

    #[test]
    fn test_task_id_is_transparent() {
        let json = serde_json::to_string(&TaskId::new("1")).unwrap();
        assert_eq!(json, "\"1\"");
    }
}
