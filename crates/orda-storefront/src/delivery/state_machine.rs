/*
[INPUT]:  Current DeliveryStatus and a requested next status
[OUTPUT]: Validated status transitions
[POS]:    Delivery domain layer - state machine for task lifecycle
[UPDATE]: When the delivery lifecycle gains or loses states
*/

use thiserror::Error;

use super::DeliveryStatus;

/// Errors occurring during state transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition {
        from: DeliveryStatus,
        to: DeliveryStatus,
    },
}

/// State machine enforcing `pending -> accepted -> picked_up -> delivered`
#[derive(Debug, Clone, Copy)]
pub struct DeliveryStateMachine {
    current_state: DeliveryStatus,
}

impl DeliveryStateMachine {
    /// Create a new state machine with an initial state
    pub fn new(initial: DeliveryStatus) -> Self {
        Self {
            current_state: initial,
        }
    }

    /// The only legal successor of `from`, if any
    pub fn successor(from: DeliveryStatus) -> Option<DeliveryStatus> {
        match from {
            DeliveryStatus::Pending => Some(DeliveryStatus::Accepted),
            DeliveryStatus::Accepted => Some(DeliveryStatus::PickedUp),
            DeliveryStatus::PickedUp => Some(DeliveryStatus::Delivered),
            DeliveryStatus::Delivered => None,
        }
    }

    /// Check if moving to `to` is valid from the current state
    pub fn can_transition(&self, to: DeliveryStatus) -> bool {
        matches!(
            (self.current_state, to),
            (DeliveryStatus::Pending, DeliveryStatus::Accepted)
                | (DeliveryStatus::Accepted, DeliveryStatus::PickedUp)
                | (DeliveryStatus::PickedUp, DeliveryStatus::Delivered)
        )
    }

    /// Perform a state transition
    pub fn transition(&mut self, to: DeliveryStatus) -> Result<(), StateError> {
        if !self.can_transition(to) {
            return Err(StateError::InvalidTransition {
                from: self.current_state,
                to,
            });
        }

        self.current_state = to;
        Ok(())
    }

    /// Get the current state
    pub fn state(&self) -> DeliveryStatus {
        self.current_state
    }
}
