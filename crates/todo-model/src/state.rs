use tracing::{
  debug,
  info
};

use crate::edit::{
  EditOutcome,
  EditSession
};
use crate::route::Route;
use crate::summary::Summary;
use crate::task::{
  Task,
  TaskId
};
use crate::task_list::TaskList;

/// One user intent. Front ends translate
/// their input events into these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  Create(String),
  Toggle(TaskId),
  ToggleAll(bool),
  BeginEdit(TaskId),
  CancelEdit,
  CommitEdit {
    id:    TaskId,
    title: String
  },
  Delete(TaskId),
  ClearCompleted,
  Navigate(Route)
}

/// What the caller owes after
/// [`AppState::apply`].
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
)]
pub enum Effect {
  None,
  Render,
  PersistAndRender
}

impl Effect {
  pub fn persists(self) -> bool {
    self == Effect::PersistAndRender
  }

  pub fn renders(self) -> bool {
    self != Effect::None
  }

  fn from_change(changed: bool) -> Self {
    if changed {
      Effect::PersistAndRender
    } else {
      Effect::None
    }
  }
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct AppState {
  tasks:   TaskList,
  route:   Route,
  editing: EditSession
}

impl AppState {
  pub fn new(tasks: Vec<Task>) -> Self {
    Self {
      tasks: TaskList::from_tasks(tasks),
      ..Self::default()
    }
  }

  pub fn with_route(
    mut self,
    route: Route
  ) -> Self {
    self.route = route;
    self
  }

  pub fn tasks(&self) -> &TaskList {
    &self.tasks
  }

  pub fn route(&self) -> &Route {
    &self.route
  }

  pub fn editing(&self) -> &EditSession {
    &self.editing
  }

  pub fn visible_tasks(
    &self
  ) -> Vec<&Task> {
    self
      .tasks
      .visible(self.route.filter())
  }

  pub fn summary(&self) -> Summary {
    Summary::new(
      &self.tasks,
      &self.route
    )
  }

  /// Applies `action` in place. Any
  /// action other than entering or
  /// cancelling an edit closes the open
  /// edit session.
  #[tracing::instrument(
    skip(self),
    fields(tasks = self.tasks.len())
  )]
  pub fn apply(
    &mut self,
    action: Action
  ) -> Effect {
    let effect = match action {
      | Action::BeginEdit(id) => {
        if self.tasks.get(&id).is_none()
        {
          debug!(id = %id, "edit requested for unknown task");
          return Effect::None;
        }
        self.editing.begin(id);
        return Effect::Render;
      }
      | Action::CancelEdit => {
        return if self.editing.cancel() {
          Effect::Render
        } else {
          Effect::None
        };
      }
      | Action::CommitEdit {
        id,
        title
      } => {
        match self.editing.finish(&id) {
          | EditOutcome::Discard => {
            debug!(id = %id, "edit cancelled");
            Effect::Render
          }
          | EditOutcome::Commit => {
            Effect::from_change(
              self
                .tasks
                .update_title(&id, &title)
            )
            .max(Effect::Render)
          }
        }
      }
      | Action::Create(title) => {
        Effect::from_change(
          self.tasks.create(&title).is_some()
        )
      }
      | Action::Toggle(id) => {
        Effect::from_change(
          self.tasks.toggle(&id)
        )
      }
      | Action::ToggleAll(completed) => {
        self.tasks.toggle_all(completed);
        Effect::PersistAndRender
      }
      | Action::Delete(id) => {
        Effect::from_change(
          self.tasks.delete(&id)
        )
      }
      | Action::ClearCompleted => {
        let removed =
          self.tasks.clear_completed();
        self.route = Route::default();
        info!(removed, "cleared completed");
        Effect::PersistAndRender
      }
      | Action::Navigate(route) => {
        debug!(segment = route.segment(), "navigating");
        self.route = route;
        Effect::Render
      }
    };

    if self.editing.end() {
      effect.max(Effect::Render)
    } else {
      effect
    }
  }
}
