use std::mem;

use crate::task::TaskId;

/// Inline-edit state for at most one
/// task. Never persisted.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub enum EditSession {
  #[default]
  Viewing,
  Editing {
    id:      TaskId,
    aborted: bool
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum EditOutcome {
  Commit,
  Discard
}

impl EditSession {
  pub fn begin(&mut self, id: TaskId) {
    *self = EditSession::Editing {
      id,
      aborted: false
    };
  }

  /// Marks the open session aborted so
  /// the commit that follows the blur is
  /// discarded. Returns `false` when
  /// nothing is being edited.
  pub fn cancel(&mut self) -> bool {
    match self {
      | EditSession::Editing {
        aborted,
        ..
      } => {
        *aborted = true;
        true
      }
      | EditSession::Viewing => false
    }
  }

  /// Ends the session and reports
  /// whether a commit for `id` should be
  /// applied.
  pub fn finish(
    &mut self,
    id: &TaskId
  ) -> EditOutcome {
    match mem::take(self) {
      | EditSession::Editing {
        id: editing,
        aborted: true
      } if &editing == id => {
        EditOutcome::Discard
      }
      | _ => EditOutcome::Commit
    }
  }

  /// Returns `true` if a session was
  /// open.
  pub fn end(&mut self) -> bool {
    !matches!(
      mem::take(self),
      EditSession::Viewing
    )
  }

  pub fn editing_id(
    &self
  ) -> Option<&TaskId> {
    match self {
      | EditSession::Editing {
        id,
        ..
      } => Some(id),
      | EditSession::Viewing => None
    }
  }

  pub fn is_editing(
    &self,
    id: &TaskId
  ) -> bool {
    self.editing_id() == Some(id)
  }
}
