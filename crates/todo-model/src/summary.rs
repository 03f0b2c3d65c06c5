use crate::route::Route;
use crate::task_list::TaskList;

pub fn pluralize(
  count: usize,
  word: &str
) -> String {
  if count == 1 {
    word.to_string()
  } else {
    format!("{word}s")
  }
}

/// Everything the list chrome and the
/// footer need, derived from the full
/// list and the current route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
  pub total:       usize,
  pub active:      usize,
  pub completed:   usize,
  pub visible:     usize,
  pub active_word: String,
  pub route:       Route
}

impl Summary {
  pub fn new(
    tasks: &TaskList,
    route: &Route
  ) -> Self {
    let total = tasks.len();
    let active = tasks.active_count();
    let visible = tasks
      .visible(route.filter())
      .len();

    Self {
      total,
      active,
      completed: total - active,
      visible,
      active_word: pluralize(
        active, "item"
      ),
      route: route.clone()
    }
  }

  /// State of the toggle-all checkbox.
  pub fn all_completed(&self) -> bool {
    self.active == 0
  }

  pub fn show_main(&self) -> bool {
    self.visible > 0
  }

  pub fn show_footer(&self) -> bool {
    self.total > 0
  }

  pub fn show_clear_completed(
    &self
  ) -> bool {
    self.completed > 0
  }

  pub fn items_left(&self) -> String {
    format!(
      "{} {} left",
      self.active, self.active_word
    )
  }
}
