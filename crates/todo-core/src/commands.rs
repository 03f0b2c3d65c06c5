use todo_model::{
  Action,
  Controller,
  Route,
  SlotStore
};
use tracing::{
  debug,
  info,
  instrument
};

use crate::cli::{
  Command,
  resolve_id
};
use crate::render::Renderer;

/// Turns a parsed command into an
/// [`Action`], resolving id prefixes
/// against the loaded list.
pub fn to_action<S: SlotStore>(
  controller: &Controller<S>,
  command: Command
) -> anyhow::Result<Action> {
  let tasks = controller.state().tasks();
  let action = match command {
    | Command::Add {
      title
    } => Action::Create(title.join(" ")),
    | Command::List {
      filter
    } => Action::Navigate(
      filter
        .map(Route::new)
        .unwrap_or_default()
    ),
    | Command::Toggle {
      id
    } => Action::Toggle(resolve_id(
      tasks, &id
    )?),
    | Command::ToggleAll {
      clear
    } => Action::ToggleAll(!clear),
    | Command::Edit {
      id,
      title
    } => Action::CommitEdit {
      id:    resolve_id(tasks, &id)?,
      title: title.join(" ")
    },
    | Command::Delete {
      id
    } => Action::Delete(resolve_id(
      tasks, &id
    )?),
    | Command::ClearCompleted => {
      Action::ClearCompleted
    }
  };
  Ok(action)
}

#[instrument(skip(controller, renderer))]
pub fn execute<S: SlotStore>(
  controller: &mut Controller<S>,
  renderer: &Renderer,
  command: Command
) -> anyhow::Result<()> {
  let action =
    to_action(controller, command)?;
  debug!(?action, "dispatching");

  let effect =
    controller.dispatch(action)?;
  info!(?effect, "command applied");

  renderer.print_state(controller.state())
}
