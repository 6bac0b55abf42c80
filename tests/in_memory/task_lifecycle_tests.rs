//! In-memory integration tests for task lifecycle operations.

use super::helpers::{TestService, service, task_advanced_through};
use rstest::rstest;
use tasktrail::task::{
    domain::{TaskId, TaskStatus},
    services::{
        CreateTaskRequest, TaskLifecycleError, TaskLifecycleErrorKind, UpdateStatusRequest,
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn advance_reject_then_repeat(service: TestService) -> Result<(), eyre::Report> {
    let task = service
        .create_task(CreateTaskRequest::new("Write spec"))
        .await?;
    eyre::ensure!(task.status() == TaskStatus::ToDo);

    let pending = service
        .update_status(UpdateStatusRequest::new(task.id(), "pending", "alice"))
        .await?;
    eyre::ensure!(pending.status() == TaskStatus::Pending);
    let history = service.audit_history(task.id()).await?;
    eyre::ensure!(history.len() == 1, "expected one entry after alice");

    let rejected = service
        .update_status(UpdateStatusRequest::new(task.id(), "done", "bob"))
        .await;
    eyre::ensure!(matches!(
        rejected.as_ref().map_err(TaskLifecycleError::kind),
        Err(TaskLifecycleErrorKind::InvalidStatusTransition)
    ));
    eyre::ensure!(service.get_task_by_id(task.id()).await?.status() == TaskStatus::Pending);
    eyre::ensure!(service.audit_history(task.id()).await?.len() == 1);

    let unchanged = service
        .update_status(UpdateStatusRequest::new(task.id(), "pending", "carol"))
        .await?;
    eyre::ensure!(unchanged == pending);
    eyre::ensure!(service.audit_history(task.id()).await?.len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_reaches_done(service: TestService) -> Result<(), eyre::Report> {
    let task = task_advanced_through(
        &service,
        "Ship release",
        &["pending", "in_progress", "done"],
        "alice",
    )
    .await?;

    eyre::ensure!(task.status() == TaskStatus::Done);
    let history = service.audit_history(task.id()).await?;
    let transitions: Vec<(TaskStatus, TaskStatus)> = history
        .iter()
        .map(|entry| (entry.from_status(), entry.to_status()))
        .collect();
    eyre::ensure!(
        transitions
            == vec![
                (TaskStatus::ToDo, TaskStatus::Pending),
                (TaskStatus::Pending, TaskStatus::InProgress),
                (TaskStatus::InProgress, TaskStatus::Done),
            ],
        "unexpected transitions {transitions:?}"
    );
    Ok(())
}

#[rstest]
#[case(&[], "in_progress")]
#[case(&[], "done")]
#[case(&["pending"], "to_do")]
#[case(&["pending"], "done")]
#[case(&["pending", "in_progress"], "pending")]
#[case(&["pending", "in_progress", "done"], "in_progress")]
#[case(&["pending", "in_progress", "done"], "to_do")]
#[tokio::test(flavor = "multi_thread")]
async fn out_of_order_targets_are_rejected(
    service: TestService,
    #[case] history: &[&str],
    #[case] target: &str,
) -> Result<(), eyre::Report> {
    let task = task_advanced_through(&service, "Out of order", history, "alice").await?;
    let entries_before = service.audit_history(task.id()).await?.len();

    let result = service
        .update_status(UpdateStatusRequest::new(task.id(), target, "mallory"))
        .await;

    let Err(err) = result else {
        eyre::bail!("moving to {target} should have failed");
    };
    eyre::ensure!(err.kind() == TaskLifecycleErrorKind::InvalidStatusTransition);
    eyre::ensure!(service.get_task_by_id(task.id()).await? == task);
    eyre::ensure!(service.audit_history(task.id()).await?.len() == entries_before);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_disappears_from_listing(service: TestService) -> Result<(), eyre::Report> {
    let keep = service.create_task(CreateTaskRequest::new("Keep")).await?;
    let discarded = service.create_task(CreateTaskRequest::new("Drop")).await?;

    service.delete_task(discarded.id()).await?;

    let remaining: Vec<TaskId> = service
        .get_all_tasks()
        .await?
        .iter()
        .map(|task| task.id())
        .collect();
    eyre::ensure!(remaining == vec![keep.id()]);
    eyre::ensure!(service.find_task(discarded.id()).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_delete_reports_missing_task(service: TestService) -> Result<(), eyre::Report> {
    let task = service.create_task(CreateTaskRequest::new("Once")).await?;
    service.delete_task(task.id()).await?;

    let err = service
        .delete_task(task.id())
        .await
        .err()
        .ok_or_else(|| eyre::eyre!("second delete should fail"))?;

    eyre::ensure!(err.kind() == TaskLifecycleErrorKind::TaskNotFound);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_rejects_status_updates(service: TestService) -> Result<(), eyre::Report> {
    let task = service.create_task(CreateTaskRequest::new("Gone")).await?;
    service.delete_task(task.id()).await?;

    let err = service
        .update_status(UpdateStatusRequest::new(task.id(), "pending", "alice"))
        .await
        .err()
        .ok_or_else(|| eyre::eyre!("update of deleted task should fail"))?;

    eyre::ensure!(err.kind() == TaskLifecycleErrorKind::TaskNotFound);
    eyre::ensure!(service.audit_history(task.id()).await?.is_empty());
    Ok(())
}
