mod footer;
mod new_task_input;
mod task_item;
mod task_list;

pub use footer::Footer;
pub use new_task_input::NewTaskInput;
pub use task_item::TaskItem;
pub use task_list::TaskList;
