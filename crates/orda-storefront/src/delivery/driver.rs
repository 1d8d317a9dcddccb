/*
[INPUT]:  Driver actions (toggle online, claim, advance) and the shared TaskPool
[OUTPUT]: The driver's active list, earnings and dashboard counters
[POS]:    Delivery domain layer - driver dashboard state
[UPDATE]: When driver actions or dashboard counters change
*/

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use super::{DeliveryError, DeliveryStateMachine, DeliveryStatus, DeliveryTask, TaskId, TaskPool};

/// Dashboard counters for a driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverStats {
    pub earnings: Decimal,
    pub completed: usize,
    pub active: usize,
    pub available: usize,
}

/// A driver's view: online flag plus personally claimed tasks.
///
/// Delivered tasks stay in the active list; nothing is archived.
#[derive(Debug, Clone, Default)]
pub struct DriverDesk {
    online: bool,
    active: Vec<DeliveryTask>,
}

impl DriverDesk {
    /// New driver, offline, with no tasks
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn set_online(&mut self, online: bool) {
        if self.online != online {
            info!(online, "driver availability changed");
        }
        self.online = online;
    }

    /// Flip availability and return the new value
    pub fn toggle_online(&mut self) -> bool {
        self.set_online(!self.online);
        self.online
    }

    /// Move a task from the pool into this driver's active list.
    ///
    /// The claimed task is always stamped `accepted`, whatever its status
    /// was in the pool.
    pub fn claim(
        &mut self,
        pool: &mut TaskPool,
        task_id: &TaskId,
    ) -> Result<&DeliveryTask, DeliveryError> {
        if !self.online {
            return Err(DeliveryError::DriverOffline);
        }

        let mut task = pool.take(task_id)?;
        task.status = DeliveryStatus::Accepted;
        info!(task_id = %task.id, restaurant = %task.restaurant_name, "delivery accepted");

        self.active.push(task);
        let index = self.active.len() - 1;
        Ok(&self.active[index])
    }

    /// Move an active task to `next`, which must be the legal successor
    pub fn advance(
        &mut self,
        task_id: &TaskId,
        next: DeliveryStatus,
    ) -> Result<&DeliveryTask, DeliveryError> {
        let task = self
            .active
            .iter_mut()
            .find(|task| &task.id == task_id)
            .ok_or_else(|| DeliveryError::not_found(task_id))?;

        let mut machine = DeliveryStateMachine::new(task.status);
        machine
            .transition(next)
            .map_err(|err| DeliveryError::from_state(task_id, err))?;

        task.status = machine.state();
        info!(task_id = %task.id, status = %task.status, "delivery status updated");
        Ok(task)
    }

    /// Advance to whatever status follows the current one
    pub fn advance_next(&mut self, task_id: &TaskId) -> Result<&DeliveryTask, DeliveryError> {
        let current = self
            .task(task_id)
            .map(|task| task.status)
            .ok_or_else(|| DeliveryError::not_found(task_id))?;

        // Delivered has no successor; re-requesting it reports the dead end.
        let next = DeliveryStateMachine::successor(current).unwrap_or(current);
        self.advance(task_id, next)
    }

    pub fn task(&self, task_id: &TaskId) -> Option<&DeliveryTask> {
        self.active.iter().find(|task| &task.id == task_id)
    }

    pub fn active_tasks(&self) -> &[DeliveryTask] {
        &self.active
    }

    /// Sum of delivery fees over delivered tasks, recomputed on each call
    pub fn earnings(&self) -> Decimal {
        self.active
            .iter()
            .filter(|task| task.status == DeliveryStatus::Delivered)
            .map(|task| task.delivery_fee)
            .sum()
    }

    pub fn stats(&self, pool: &TaskPool) -> DriverStats {
        let completed = self
            .active
            .iter()
            .filter(|task| task.status == DeliveryStatus::Delivered)
            .count();
        DriverStats {
            earnings: self.earnings(),
            completed,
            active: self.active.len() - completed,
            available: pool.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn online_desk() -> DriverDesk {
        let mut desk = DriverDesk::new();
        desk.set_online(true);
        desk
    }

    #[test]
    fn test_new_desk_is_offline() {
        let desk = DriverDesk::new();
        assert!(!desk.is_online());
        assert!(desk.active_tasks().is_empty());
        assert_eq!(desk.earnings(), Decimal::ZERO);
    }

    #[test]
    fn test_toggle_online() {
        let mut desk = DriverDesk::new();
        assert!(desk.toggle_online());
        assert!(!desk.toggle_online());
    }

    #[test]
    fn test_claim_requires_online() {
        let mut pool = TaskPool::seeded();
        let mut desk = DriverDesk::new();
        let err = desk.claim(&mut pool, &TaskId::new("1")).unwrap_err();
        assert_eq!(err, DeliveryError::DriverOffline);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_advance_unknown_task() {
        let mut desk = online_desk();
        let err = desk
            .advance(&TaskId::new("1"), DeliveryStatus::PickedUp)
            .unwrap_err();
        assert!(matches!(err, DeliveryError::TaskNotFound { .. }));
    }

    #[test]
    fn test_advance_next_walks_lifecycle() {
        let mut pool = TaskPool::seeded();
        let mut desk = online_desk();
        let id = TaskId::new("2");
        desk.claim(&mut pool, &id).unwrap();

        assert_eq!(desk.advance_next(&id).unwrap().status, DeliveryStatus::PickedUp);
        assert_eq!(desk.advance_next(&id).unwrap().status, DeliveryStatus::Delivered);
        assert!(matches!(
            desk.advance_next(&id),
            Err(DeliveryError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_stats_counts() {
        let mut pool = TaskPool::seeded();
        let mut desk = online_desk();
        let first = TaskId::new("1");
        desk.claim(&mut pool, &first).unwrap();
        desk.advance(&first, DeliveryStatus::PickedUp).unwrap();
        desk.advance(&first, DeliveryStatus::Delivered).unwrap();

        let stats = desk.stats(&pool);
        assert_eq!(
            stats,
            DriverStats {
                earnings: Decimal::from(500),
                completed: 1,
                active: 0,
                available: 1,
            }
        );
    }
}
