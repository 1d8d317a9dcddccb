/*
[INPUT]:  Failed pool lookups, rejected state transitions, offline claims
[OUTPUT]: DeliveryError values surfaced to the driver dashboard
[POS]:    Delivery domain layer - error types
[UPDATE]: When adding delivery failure modes
*/

use thiserror::Error;

use super::{DeliveryStatus, StateError, TaskId};

/// Errors returned by pool and driver operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Delivery task {task_id} not found")]
    TaskNotFound { task_id: TaskId },

    #[error("Delivery task {task_id} already exists")]
    DuplicateTask { task_id: TaskId },

    #[error("Delivery task {task_id} cannot move from {from} to {to}")]
    InvalidTransition {
        task_id: TaskId,
        from: DeliveryStatus,
        to: DeliveryStatus,
    },

    #[error("Go online to accept deliveries")]
    DriverOffline,

    #[error("Unknown delivery status: {0}")]
    UnknownStatus(String),
}

impl DeliveryError {
    pub(crate) fn from_state(task_id: &TaskId, err: StateError) -> Self {
        match err {
            StateError::InvalidTransition { from, to } => DeliveryError::InvalidTransition {
                task_id: task_id.clone(),
                from,
                to,
            },
        }
    }

    pub(crate) fn not_found(task_id: &TaskId) -> Self {
        DeliveryError::TaskNotFound {
            task_id: task_id.clone(),
        }
    }
}
