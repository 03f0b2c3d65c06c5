use tracing::{
  debug,
  info
};

use crate::state::{
  Action,
  AppState,
  Effect
};
use crate::storage::{
  self,
  SlotStore
};

/// Owns the state and the slot it is
/// persisted to. Every dispatch runs
/// mutate then persist.
pub struct Controller<S> {
  state: AppState,
  store: S,
  key:   String
}

impl<S: SlotStore> Controller<S> {
  #[tracing::instrument(skip(store))]
  pub fn open(
    store: S,
    key: &str
  ) -> anyhow::Result<Self> {
    let tasks =
      storage::load(&store, key)?;
    info!(
      count = tasks.len(),
      "opened task list"
    );

    Ok(Self {
      state: AppState::new(tasks),
      store,
      key: key.to_string()
    })
  }

  pub fn state(&self) -> &AppState {
    &self.state
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  /// Applies `action` and saves the
  /// full list when it changed. A failed
  /// save is returned after the
  /// in-memory state has already moved
  /// on.
  #[tracing::instrument(skip(self))]
  pub fn dispatch(
    &mut self,
    action: Action
  ) -> anyhow::Result<Effect> {
    let effect =
      self.state.apply(action);
    debug!(?effect, "applied action");

    if effect.persists() {
      storage::save(
        &self.store,
        &self.key,
        self.state.tasks().as_slice()
      )?;
    }

    Ok(effect)
  }
}

#[cfg(test)]
mod tests {
  use anyhow::anyhow;

  use super::*;
  use crate::route::Route;
  use crate::storage::MemoryStore;

  struct FullStore;

  impl SlotStore for FullStore {
    fn read_slot(
      &self,
      _key: &str
    ) -> anyhow::Result<Option<String>>
    {
      Ok(None)
    }

    fn write_slot(
      &self,
      _key: &str,
      _value: &str
    ) -> anyhow::Result<()> {
      Err(anyhow!("quota exceeded"))
    }
  }

  #[test]
  fn blank_create_does_not_save() {
    let mut controller = Controller::open(
      MemoryStore::new(),
      "k"
    )
    .expect("open");

    let effect = controller
      .dispatch(Action::Create(
        " ".into()
      ))
      .expect("dispatch");
    assert_eq!(effect, Effect::None);
    assert!(
      controller.store().slot("k").is_none()
    );

    controller
      .dispatch(Action::Create(
        "a".into()
      ))
      .expect("dispatch");
    assert!(
      controller
        .store()
        .slot("k")
        .expect("saved")
        .contains("\"a\"")
    );
  }

  #[test]
  fn navigation_leaves_slot_untouched() {
    let mut controller = Controller::open(
      MemoryStore::new(),
      "k"
    )
    .expect("open");
    let effect = controller
      .dispatch(Action::Navigate(
        Route::new("active")
      ))
      .expect("navigate");
    assert_eq!(effect, Effect::Render);
    assert!(
      controller.store().slot("k").is_none()
    );
  }

  #[test]
  fn storage_failure_propagates() {
    let mut controller =
      Controller::open(FullStore, "k")
        .expect("open");
    let err = controller
      .dispatch(Action::Create(
        "a".into()
      ))
      .expect_err("save must fail");
    assert!(
      format!("{err:#}")
        .contains("quota exceeded")
    );
    assert_eq!(
      controller.state().tasks().len(),
      1
    );
  }
}
