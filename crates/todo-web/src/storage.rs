use anyhow::anyhow;
use todo_model::SlotStore;

/// `window.localStorage`, one item per
/// slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
  fn storage(
    &self
  ) -> anyhow::Result<web_sys::Storage>
  {
    web_sys::window()
      .ok_or_else(|| {
        anyhow!("no window available")
      })?
      .local_storage()
      .map_err(|err| {
        anyhow!(
          "local storage unavailable: \
           {err:?}"
        )
      })?
      .ok_or_else(|| {
        anyhow!(
          "local storage unavailable"
        )
      })
  }
}

impl SlotStore for LocalStore {
  fn read_slot(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    self
      .storage()?
      .get_item(key)
      .map_err(|err| {
        anyhow!(
          "getItem({key}) failed: \
           {err:?}"
        )
      })
  }

  fn write_slot(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .storage()?
      .set_item(key, value)
      .map_err(|err| {
        anyhow!(
          "setItem({key}) failed: \
           {err:?}"
        )
      })
  }
}
