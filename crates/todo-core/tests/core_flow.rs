use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tempfile::tempdir;
use todo_core::datastore::FileStore;
use todo_model::storage;
use todo_model::{Action, Controller, Task};

fn args(data: &Path, config: &Path, rest: &[&str]) -> Vec<OsString> {
    let mut out: Vec<OsString> = vec![
        "todo".into(),
        "-q".into(),
        "--config".into(),
        config.as_os_str().to_owned(),
        "--data".into(),
        data.as_os_str().to_owned(),
    ];
    out.extend(rest.iter().map(OsString::from));
    out
}

fn stored(path: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(path).expect("slot file");
    serde_json::from_str(&raw).expect("json")
}

#[test]
fn file_store_roundtrip() {
    let temp = tempdir().expect("tempdir");
    let store = FileStore::open(temp.path()).expect("open datastore");

    let tasks = vec![
        Task::new_active("Write tests".to_string()),
        Task {
            completed: true,
            ..Task::new_active("Ship it".to_string())
        },
    ];
    storage::save(&store, "todos", &tasks).expect("save");

    assert!(store.slot_path("todos").exists());
    assert_eq!(storage::load(&store, "todos").expect("load"), tasks);
}

#[test]
fn missing_and_corrupt_files_load_empty() {
    let temp = tempdir().expect("tempdir");
    let store = FileStore::open(temp.path()).expect("open datastore");
    assert!(storage::load(&store, "todos").expect("load").is_empty());

    fs::write(store.slot_path("todos"), "[{\"id\": ").expect("write");
    assert!(storage::load(&store, "todos").expect("load").is_empty());

    fs::write(store.slot_path("todos"), [0xff, 0xfe, 0x5b]).expect("write");
    assert!(storage::load(&store, "todos").expect("load").is_empty());
}

#[test]
fn save_replaces_file_without_leftovers() {
    let temp = tempdir().expect("tempdir");
    let store = FileStore::open(temp.path()).expect("open datastore");
    let mut controller = Controller::open(store, "todos").expect("controller");

    controller.dispatch(Action::Create("a".into())).expect("create");
    controller.dispatch(Action::Create("b".into())).expect("create");
    controller.dispatch(Action::ClearCompleted).expect("clear");

    let entries: Vec<_> = fs::read_dir(temp.path())
        .expect("read dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(entries, vec![OsString::from("todos.json")]);
    assert_eq!(stored(&temp.path().join("todos.json")).as_array().map(Vec::len), Some(2));
}

#[test]
fn cli_add_toggle_clear_flow() {
    let temp = tempdir().expect("tempdir");
    let data = temp.path().join("data");
    let config = temp.path().join("config.toml");
    fs::write(&config, "color = false\n").expect("config");
    let slot = data.join("todos.json");

    todo_core::run(args(&data, &config, &["add", "Buy", "milk"])).expect("add");
    todo_core::run(args(&data, &config, &["add", "Walk", "dog"])).expect("add");

    let value = stored(&slot);
    let tasks = value.as_array().expect("array");
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["title"], "Buy milk");
    assert_eq!(tasks[0]["completed"], false);

    let first_id = tasks[0]["id"].as_str().expect("id").to_string();
    todo_core::run(args(&data, &config, &["toggle", &first_id[..8]])).expect("toggle");
    assert_eq!(stored(&slot)[0]["completed"], true);

    todo_core::run(args(&data, &config, &["list", "completed"])).expect("list");
    assert_eq!(stored(&slot).as_array().map(Vec::len), Some(2));

    todo_core::run(args(&data, &config, &["clear-completed"])).expect("clear");
    let value = stored(&slot);
    let tasks = value.as_array().expect("array");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Walk dog");
}

#[test]
fn cli_edit_to_empty_deletes() {
    let temp = tempdir().expect("tempdir");
    let data = temp.path().join("data");
    let config = temp.path().join("config.toml");
    fs::write(&config, "").expect("config");

    todo_core::run(args(&data, &config, &["add", "temporary"])).expect("add");
    let id = stored(&data.join("todos.json"))[0]["id"]
        .as_str()
        .expect("id")
        .to_string();

    todo_core::run(args(&data, &config, &["edit", &id, "renamed"])).expect("edit");
    assert_eq!(stored(&data.join("todos.json"))[0]["title"], "renamed");

    todo_core::run(args(&data, &config, &["edit", &id])).expect("edit");
    assert_eq!(stored(&data.join("todos.json")), serde_json::json!([]));
}

#[test]
fn storage_key_override_selects_slot_file() {
    let temp = tempdir().expect("tempdir");
    let config = temp.path().join("config.toml");
    fs::write(&config, "[storage]\nkey = \"work\"\n").expect("config");

    todo_core::run(args(temp.path(), &config, &["add", "report"])).expect("add");
    assert!(temp.path().join("work.json").exists());

    todo_core::run(args(
        temp.path(),
        &config,
        &["--rc", "storage.key=home", "add", "laundry"],
    ))
    .expect("add");
    assert_eq!(stored(&temp.path().join("home.json")).as_array().map(Vec::len), Some(1));
}

#[test]
fn unknown_id_fails_without_touching_file() {
    let temp = tempdir().expect("tempdir");
    let config = temp.path().join("config.toml");
    fs::write(&config, "").expect("config");

    todo_core::run(args(temp.path(), &config, &["add", "keep"])).expect("add");
    let before = fs::read_to_string(temp.path().join("todos.json")).expect("read");

    let err = todo_core::run(args(temp.path(), &config, &["delete", "not-an-id"]))
        .expect_err("unknown id");
    assert!(format!("{err:#}").contains("no task matches"));
    assert_eq!(
        fs::read_to_string(temp.path().join("todos.json")).expect("read"),
        before
    );
}
