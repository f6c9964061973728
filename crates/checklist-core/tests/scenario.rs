use checklist_core::{NewTask, Profile, Task, TaskId, TaskPatch, Validator};
use checklist_test_utils::{profile_payload, setup_managers, task_payload};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn checklist_lifecycle() {
    let fx = setup_managers();

    let first = fx
        .tasks
        .create("test", NewTask::new("t1").with_done(false))
        .await
        .unwrap();
    let second = fx
        .tasks
        .create("test", NewTask::new("t2").with_done(true))
        .await
        .unwrap();
    assert_eq!(first, TaskId::new(1));
    assert_eq!(second, TaskId::new(2));

    let all = fx.tasks.all("test").await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[&first], Task::new("t1", false));
    assert_eq!(all[&second], Task::new("t2", true));

    fx.tasks.delete("test", first).await.unwrap();
    assert!(fx.tasks.exists("test", first).await.unwrap_err().is_not_found());

    let all = fx.tasks.all("test").await.unwrap();
    assert_eq!(all.keys().copied().collect::<Vec<_>>(), vec![second]);
}

#[tokio::test]
async fn validated_payload_flows_into_manager() {
    let fx = setup_managers();
    let payload = task_payload("milk", None);

    Validator::task().validate(&payload, &["name"]).unwrap();
    let new_task: NewTask = serde_json::from_value(payload).unwrap();
    let id = fx.tasks.create("groceries", new_task).await.unwrap();

    let patch_payload = json!({ "done": true });
    Validator::task().validate(&patch_payload, &[]).unwrap();
    let patch: TaskPatch = serde_json::from_value(patch_payload).unwrap();

    let updated = fx.tasks.update("groceries", id, &patch).await.unwrap();
    assert_eq!(updated, Task::new("milk", true));
}

#[tokio::test]
async fn lists_do_not_share_counters() {
    let fx = setup_managers();

    fx.tasks.create("a", NewTask::new("x")).await.unwrap();
    fx.tasks.create("a", NewTask::new("y")).await.unwrap();
    let id = fx.tasks.create("b", NewTask::new("z")).await.unwrap();

    assert_eq!(id, TaskId::new(1));
}

#[tokio::test]
async fn deleting_last_task_keeps_counter() {
    let fx = setup_managers();

    let id = fx.tasks.create("solo", NewTask::new("x")).await.unwrap();
    fx.tasks.delete("solo", id).await.unwrap();

    assert!(fx.tasks.all("solo").await.unwrap().is_empty());
    assert_eq!(
        fx.tasks.create("solo", NewTask::new("y")).await.unwrap(),
        TaskId::new(2)
    );
}

#[tokio::test]
async fn profile_replace_leaves_nothing_behind() {
    let fx = setup_managers();
    let payload = profile_payload(&["groceries", "chores"]);

    Validator::profile().validate(&payload, &["lists"]).unwrap();
    let profile: Profile = serde_json::from_value(payload).unwrap();
    fx.profiles.create("ann", &profile).await.unwrap();

    fx.profiles
        .update("ann", &Profile::new(["work"]))
        .await
        .unwrap();

    let stored = fx.profiles.get("ann").await.unwrap();
    assert_eq!(stored, vec!["work".to_string()]);
}
