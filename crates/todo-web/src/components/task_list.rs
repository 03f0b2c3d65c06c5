use todo_model::{
  Action,
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskItem;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:     Vec<Task>,
  pub editing:   Option<TaskId>,
  pub on_action: Callback<Action>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <ul class="todo-list">
          {
              for props.tasks.iter().cloned().map(|task| {
                  let editing = props.editing.as_ref() == Some(&task.id);
                  let key = task.id.to_string();
                  html! {
                      <TaskItem
                          key={key}
                          task={task}
                          editing={editing}
                          on_action={props.on_action.clone()}
                      />
                  }
              })
          }
      </ul>
  }
}
