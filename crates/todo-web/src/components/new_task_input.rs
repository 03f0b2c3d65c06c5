use todo_model::Action;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  KeyboardEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct NewTaskInputProps {
  pub on_action: Callback<Action>
}

#[function_component(NewTaskInput)]
pub fn new_task_input(
  props: &NewTaskInputProps
) -> Html {
  let on_action = props.on_action.clone();
  let onkeydown =
    move |e: KeyboardEvent| {
      if e.key() != "Enter" {
        return;
      }
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let value = input.value();
      if value.trim().is_empty() {
        return;
      }
      on_action
        .emit(Action::Create(value));
      input.set_value("");
    };

  html! {
      <input
          class="new-todo"
          placeholder="What needs to be done?"
          autofocus={true}
          onkeydown={onkeydown}
      />
  }
}
