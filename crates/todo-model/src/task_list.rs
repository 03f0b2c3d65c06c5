use tracing::{
  debug,
  trace
};

use crate::route::ViewFilter;
use crate::task::{
  Task,
  TaskId
};

/// Ordered task collection. Insertion
/// order is display order; every lookup
/// goes through the task id.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TaskList {
  tasks: Vec<Task>
}

impl TaskList {
  pub fn from_tasks(
    tasks: Vec<Task>
  ) -> Self {
    Self { tasks }
  }

  pub fn as_slice(&self) -> &[Task] {
    &self.tasks
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn get(
    &self,
    id: &TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| &task.id == id)
  }

  fn position(
    &self,
    id: &TaskId
  ) -> Option<usize> {
    self
      .tasks
      .iter()
      .position(|task| &task.id == id)
  }

  /// Appends an active task. Returns
  /// `None` when the trimmed title is
  /// empty.
  pub fn create(
    &mut self,
    title: &str
  ) -> Option<TaskId> {
    let title = title.trim();
    if title.is_empty() {
      trace!("ignoring empty title");
      return None;
    }

    let task =
      Task::new_active(title.to_string());
    let id = task.id.clone();
    debug!(id = %id, "created task");
    self.tasks.push(task);
    Some(id)
  }

  pub fn toggle(
    &mut self,
    id: &TaskId
  ) -> bool {
    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| &task.id == id)
    else {
      return false;
    };
    task.completed = !task.completed;
    debug!(id = %id, completed = task.completed, "toggled task");
    true
  }

  pub fn toggle_all(
    &mut self,
    completed: bool
  ) {
    for task in &mut self.tasks {
      task.completed = completed;
    }
    debug!(
      completed,
      count = self.tasks.len(),
      "toggled all tasks"
    );
  }

  /// Replaces the title. An empty
  /// trimmed title removes the task.
  pub fn update_title(
    &mut self,
    id: &TaskId,
    title: &str
  ) -> bool {
    let title = title.trim();
    if title.is_empty() {
      return self.delete(id);
    }

    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| &task.id == id)
    else {
      return false;
    };
    task.title = title.to_string();
    debug!(id = %id, "retitled task");
    true
  }

  pub fn delete(
    &mut self,
    id: &TaskId
  ) -> bool {
    match self.position(id) {
      | Some(idx) => {
        self.tasks.remove(idx);
        debug!(id = %id, "deleted task");
        true
      }
      | None => false
    }
  }

  /// Drops completed tasks and returns
  /// how many were removed.
  pub fn clear_completed(
    &mut self
  ) -> usize {
    let before = self.tasks.len();
    self
      .tasks
      .retain(|task| !task.completed);
    let removed =
      before - self.tasks.len();
    debug!(
      removed,
      "cleared completed tasks"
    );
    removed
  }

  pub fn active(&self) -> Vec<&Task> {
    self.visible(ViewFilter::Active)
  }

  pub fn completed(&self) -> Vec<&Task> {
    self.visible(ViewFilter::Completed)
  }

  pub fn active_count(&self) -> usize {
    self
      .tasks
      .iter()
      .filter(|task| task.is_active())
      .count()
  }

  pub fn visible(
    &self,
    filter: ViewFilter
  ) -> Vec<&Task> {
    self
      .tasks
      .iter()
      .filter(|task| filter.matches(task))
      .collect()
  }
}
