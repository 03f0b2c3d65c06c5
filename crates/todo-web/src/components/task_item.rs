use todo_model::{
  Action,
  Task
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Event,
  FocusEvent,
  Html,
  KeyboardEvent,
  MouseEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_effect_with,
  use_node_ref
};

#[derive(Properties, PartialEq)]
pub struct TaskItemProps {
  pub task:      Task,
  pub editing:   bool,
  pub on_action: Callback<Action>
}

#[function_component(TaskItem)]
pub fn task_item(
  props: &TaskItemProps
) -> Html {
  let edit_ref = use_node_ref();

  {
    let edit_ref = edit_ref.clone();
    use_effect_with(
      props.editing,
      move |editing| {
        if *editing
          && let Some(input) = edit_ref
            .cast::<HtmlInputElement>()
        {
          let len = input
            .value()
            .encode_utf16()
            .count() as u32;
          let _ = input.focus();
          let _ = input
            .set_selection_range(
              len, len
            );
        }
      }
    );
  }

  let id = props.task.id.clone();

  let on_toggle = {
    let on_action = props.on_action.clone();
    let id = id.clone();
    move |_: Event| {
      on_action
        .emit(Action::Toggle(id.clone()))
    }
  };

  let on_destroy = {
    let on_action = props.on_action.clone();
    let id = id.clone();
    move |_: MouseEvent| {
      on_action
        .emit(Action::Delete(id.clone()))
    }
  };

  let on_begin_edit = {
    let on_action = props.on_action.clone();
    let id = id.clone();
    move |_: MouseEvent| {
      on_action.emit(Action::BeginEdit(
        id.clone()
      ))
    }
  };

  // Enter and Escape both leave the
  // field; the blur handler commits.
  let on_edit_keydown = {
    let on_action = props.on_action.clone();
    move |e: KeyboardEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      match e.key().as_str() {
        | "Enter" => {
          let _ = input.blur();
        }
        | "Escape" => {
          on_action
            .emit(Action::CancelEdit);
          let _ = input.blur();
        }
        | _ => {}
      }
    }
  };

  let on_edit_blur = {
    let on_action = props.on_action.clone();
    move |e: FocusEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_action.emit(Action::CommitEdit {
        id:    id.clone(),
        title: input.value()
      });
    }
  };

  let class = classes!(
    props.task.completed.then_some("completed"),
    props.editing.then_some("editing")
  );

  html! {
      <li class={class}>
          <div class="view">
              <input
                  class="toggle"
                  type="checkbox"
                  checked={props.task.completed}
                  onchange={on_toggle}
              />
              <label ondblclick={on_begin_edit}>{ &props.task.title }</label>
              <button class="destroy" onclick={on_destroy}></button>
          </div>
          {
              if props.editing {
                  html! {
                      <input
                          ref={edit_ref}
                          class="edit"
                          value={props.task.title.clone()}
                          onkeydown={on_edit_keydown}
                          onblur={on_edit_blur}
                      />
                  }
              } else {
                  html! {}
              }
          }
      </li>
  }
}
