/*
[INPUT]:  Seeded delivery tasks and driver actions (claim, advance, toggle online)
[OUTPUT]: Task pool, per-driver active list, earnings and dashboard stats
[POS]:    Delivery domain layer - aggregates task lifecycle modules
[UPDATE]: When adding delivery operations or task fields
*/

pub mod driver;
pub mod error;
pub mod pool;
pub mod state_machine;
pub mod task;

pub use driver::{DriverDesk, DriverStats};
pub use error::DeliveryError;
pub use pool::TaskPool;
pub use state_machine::{DeliveryStateMachine, StateError};
pub use task::{DeliveryStatus, DeliveryTask, TaskId};
