pub mod controller;
pub mod edit;
pub mod route;
pub mod state;
pub mod storage;
pub mod summary;
pub mod task;
pub mod task_list;

pub use controller::Controller;
pub use edit::EditSession;
pub use route::{
  Route,
  ViewFilter
};
pub use state::{
  Action,
  AppState,
  Effect
};
pub use storage::{
  BROWSER_SLOT_KEY,
  DEFAULT_SLOT_KEY,
  MemoryStore,
  SlotStore
};
pub use summary::Summary;
pub use task::{
  Task,
  TaskId
};
pub use task_list::TaskList;
