use std::rc::Rc;

use gloo::console::log;
use todo_model::storage::{
  self as slot,
  BROWSER_SLOT_KEY
};
use todo_model::{
  Action,
  AppState,
  Route
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Event,
  Html,
  Reducible,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_reducer
};
use yew_router::HashRouter;
use yew_router::hooks::use_location;

use crate::components::{
  Footer,
  NewTaskInput,
  TaskList
};
use crate::storage::LocalStore;

/// Reducer wrapper: applies the action
/// to a copy of the state and writes the
/// full list back to local storage when
/// the action changed it.
#[derive(Clone, PartialEq)]
struct TodoStore {
  state: AppState
}

impl TodoStore {
  fn load(route: Route) -> Self {
    let tasks = slot::load(
      &LocalStore,
      BROWSER_SLOT_KEY
    )
    .unwrap_or_else(|error| {
      tracing::error!(
        error = %format!("{error:#}"),
        "failed reading tasks from \
         local storage"
      );
      Vec::new()
    });

    Self {
      state: AppState::new(tasks)
        .with_route(route)
    }
  }
}

impl Reducible for TodoStore {
  type Action = Action;

  fn reduce(
    self: Rc<Self>,
    action: Action
  ) -> Rc<Self> {
    let mut state = self.state.clone();
    let effect = state.apply(action);

    if !effect.renders() {
      return self;
    }

    if effect.persists()
      && let Err(error) = slot::save(
        &LocalStore,
        BROWSER_SLOT_KEY,
        state.tasks().as_slice()
      )
    {
      tracing::error!(
        error = %format!("{error:#}"),
        "failed persisting tasks"
      );
    }

    Rc::new(Self { state })
  }
}

#[function_component(App)]
pub fn app() -> Html {
  html! {
      <HashRouter>
          <TodoApp />
      </HashRouter>
  }
}

/// The router keeps the fragment
/// without its `#`, so `#/active`
/// arrives here as `/active`.
fn current_route(
  path: Option<&str>
) -> Route {
  path
    .map(Route::from_fragment)
    .unwrap_or_default()
}

#[function_component(TodoApp)]
fn todo_app() -> Html {
  let location = use_location();
  let route = current_route(
    location
      .as_ref()
      .map(|location| location.path())
  );

  let store = use_reducer({
    let route = route.clone();
    move || TodoStore::load(route)
  });

  {
    let dispatcher = store.dispatcher();
    use_effect_with(route, move |route| {
      dispatcher.dispatch(
        Action::Navigate(route.clone())
      );
    });
  }

  let on_action = {
    let dispatcher = store.dispatcher();
    Callback::from(
      move |action: Action| {
        ui_debug(
          "dispatch",
          &format!("{action:?}")
        );
        dispatcher.dispatch(action);
      }
    )
  };

  let on_toggle_all = {
    let on_action = on_action.clone();
    Callback::from(move |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_action.emit(Action::ToggleAll(
        input.checked()
      ));
    })
  };

  let state = &store.state;
  let summary = state.summary();
  let visible = state
    .visible_tasks()
    .into_iter()
    .cloned()
    .collect::<Vec<_>>();
  let editing =
    state.editing().editing_id().cloned();

  html! {
      <section class="todoapp">
          <header class="header">
              <h1>{ "todos" }</h1>
              <NewTaskInput on_action={on_action.clone()} />
          </header>
          {
              if summary.show_main() {
                  html! {
                      <section class="main">
                          <input
                              id="toggle-all"
                              class="toggle-all"
                              type="checkbox"
                              checked={summary.all_completed()}
                              onchange={on_toggle_all}
                          />
                          <label for="toggle-all">{ "Mark all as complete" }</label>
                          <TaskList
                              tasks={visible}
                              editing={editing}
                              on_action={on_action.clone()}
                          />
                      </section>
                  }
              } else {
                  html! {}
              }
          }
          {
              if summary.show_footer() {
                  html! { <Footer summary={summary.clone()} on_action={on_action.clone()} /> }
              } else {
                  html! {}
              }
          }
      </section>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
