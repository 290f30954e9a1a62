mod helpers;

use agencia_notify::api::{
    execute, NotifyCommentAddedUseCase, NotifyTaskCreatedUseCase, NotifyTaskUpdatedUseCase,
};
use agencia_notify::domain::TaskStatus;
use chrono::NaiveDate;
use helpers::setup::{spawn_failing_endpoint, spawn_notify_endpoint, test_context};
use helpers::utils::{comment_factory, task_factory};

#[actix_web::main]
#[test]
async fn task_created_notifies_participants_and_mentions() {
    let (endpoint, recorded) = spawn_notify_endpoint();
    let ctx = test_context(endpoint);

    let mut task = task_factory();
    task.mentioned = vec!["dora@agencia.mx".into(), "ana@agencia.mx".into()];

    let usecase = NotifyTaskCreatedUseCase {
        task,
        sender: "ana@agencia.mx".into(),
    };
    let res = execute(usecase, &ctx).await.expect("Use case to succeed");
    assert!(res.dispatched);

    let payloads = recorded.lock().unwrap();
    assert_eq!(payloads.len(), 2);

    assert_eq!(payloads[0]["type"], "task_created");
    assert_eq!(payloads[0]["sender"], "ana@agencia.mx");
    let participants = payloads[0]["participants"].as_array().unwrap();
    assert!(!participants.contains(&"ana@agencia.mx".into()));
    assert!(participants.contains(&"bruno@agencia.mx".into()));
    assert!(participants.contains(&"carla@agencia.mx".into()));

    // The mention dispatch follows in the same control flow and never
    // includes the sender
    assert_eq!(payloads[1]["type"], "user_mentioned");
    assert_eq!(
        payloads[1]["participants"].as_array().unwrap(),
        &vec![serde_json::Value::from("dora@agencia.mx")]
    );
}

#[actix_web::main]
#[test]
async fn comment_with_mentions_dispatches_two_notifications() {
    let (endpoint, recorded) = spawn_notify_endpoint();
    let ctx = test_context(endpoint);

    let mut comment = comment_factory("carla@agencia.mx");
    comment.mentioned = vec!["bruno@agencia.mx".into()];
    let mut task = task_factory();
    task.comments.push(comment.clone());

    let usecase = NotifyCommentAddedUseCase {
        task,
        comment,
        sender: "carla@agencia.mx".into(),
    };
    execute(usecase, &ctx).await.expect("Use case to succeed");

    let payloads = recorded.lock().unwrap();
    assert_eq!(payloads.len(), 2);
    assert_eq!(payloads[0]["type"], "comment_added");
    assert!(payloads[0]["comment"]["body"]
        .as_str()
        .unwrap()
        .contains("Cliente confirmó"));
    assert_eq!(payloads[1]["type"], "user_mentioned");
}

#[actix_web::main]
#[test]
async fn task_update_carries_display_labeled_changes() {
    let (endpoint, recorded) = spawn_notify_endpoint();
    let ctx = test_context(endpoint);

    let old_task = task_factory();
    let mut new_task = old_task.clone();
    new_task.status = TaskStatus::Completada;
    new_task.due_date = Some(NaiveDate::from_ymd(2026, 9, 15));

    let usecase = NotifyTaskUpdatedUseCase {
        old_task,
        new_task,
        sender: "bruno@agencia.mx".into(),
    };
    let res = execute(usecase, &ctx).await.expect("Use case to succeed");
    assert!(res.dispatched);

    let payloads = recorded.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0]["type"], "task_updated");

    let changes = payloads[0]["changes"].as_array().unwrap();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0]["field"], "status");
    assert_eq!(changes[0]["new_value"], "Completada");
    assert_eq!(changes[1]["field"], "dueDate");
    assert_eq!(changes[1]["old_value"], "Sin fecha");
    assert_eq!(changes[1]["new_value"], "15/09/2026");
}

#[actix_web::main]
#[test]
async fn endpoint_failure_never_blocks_the_primary_action() {
    let endpoint = spawn_failing_endpoint();
    let ctx = test_context(endpoint);

    let usecase = NotifyTaskCreatedUseCase {
        task: task_factory(),
        sender: "ana@agencia.mx".into(),
    };
    let res = execute(usecase, &ctx).await.expect("Use case to succeed");

    assert!(!res.dispatched);
    assert_eq!(
        res.participants,
        vec!["bruno@agencia.mx", "carla@agencia.mx"]
    );
}
