use todo_model::{
  Action,
  Route,
  Summary,
  ViewFilter
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
  pub summary:   Summary,
  pub on_action: Callback<Action>
}

#[function_component(Footer)]
pub fn footer(
  props: &FooterProps
) -> Html {
  let summary = &props.summary;

  let on_clear = {
    let on_action = props.on_action.clone();
    move |_: MouseEvent| {
      on_action
        .emit(Action::ClearCompleted)
    }
  };

  html! {
      <footer class="footer">
          <span class="todo-count">
              <strong>{ summary.active.to_string() }</strong>
              { format!(" {} left", summary.active_word) }
          </span>
          <ul class="filters">
              {
                  for ViewFilter::ALL.into_iter().map(|filter| {
                      let selected = summary.route.selects(filter);
                      html! {
                          <li>
                              <a
                                  href={Route::href(filter)}
                                  class={classes!(selected.then_some("selected"))}
                              >
                                  { filter.label() }
                              </a>
                          </li>
                      }
                  })
              }
          </ul>
          {
              if summary.show_clear_completed() {
                  html! {
                      <button class="clear-completed" onclick={on_clear}>
                          { "Clear completed" }
                      </button>
                  }
              } else {
                  html! {}
              }
          }
      </footer>
  }
}
