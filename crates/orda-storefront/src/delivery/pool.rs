/*
[INPUT]:  Published delivery tasks, claim requests by task id
[OUTPUT]: Unclaimed tasks in listing order; owned tasks handed to drivers
[POS]:    Delivery domain layer - unclaimed task pool
[UPDATE]: When pool ordering or publishing rules change
*/

use tracing::debug;

use super::{DeliveryError, DeliveryTask, TaskId};

/// Tasks not yet claimed by any driver.
///
/// `take` moves the task out, so a claimed task can no longer be
/// observed through the pool.
#[derive(Debug, Clone, Default)]
pub struct TaskPool {
    tasks: Vec<DeliveryTask>,
}

impl TaskPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool pre-filled with the demo tasks
    pub fn seeded() -> Self {
        Self {
            tasks: crate::seed::delivery_tasks(),
        }
    }

    /// Build a pool, rejecting duplicate ids
    pub fn from_tasks(tasks: Vec<DeliveryTask>) -> Result<Self, DeliveryError> {
        let mut pool = Self::new();
        for task in tasks {
            pool.publish(task)?;
        }
        Ok(pool)
    }

    /// Add a task to the end of the pool
    pub fn publish(&mut self, task: DeliveryTask) -> Result<(), DeliveryError> {
        if self.contains(&task.id) {
            return Err(DeliveryError::DuplicateTask { task_id: task.id });
        }
        debug!(task_id = %task.id, "task published");
        self.tasks.push(task);
        Ok(())
    }

    /// Remove and return a task, preserving the order of the rest
    pub fn take(&mut self, task_id: &TaskId) -> Result<DeliveryTask, DeliveryError> {
        let index = self
            .tasks
            .iter()
            .position(|task| &task.id == task_id)
            .ok_or_else(|| DeliveryError::not_found(task_id))?;
        Ok(self.tasks.remove(index))
    }

    pub fn get(&self, task_id: &TaskId) -> Option<&DeliveryTask> {
        self.tasks.iter().find(|task| &task.id == task_id)
    }

    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.get(task_id).is_some()
    }

    pub fn tasks(&self) -> &[DeliveryTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
