//! In-memory integration tests for the audit trail.

use super::helpers::{TestService, service, task_advanced_through};
use rstest::rstest;
use tasktrail::task::{
    domain::{TaskId, TaskStatus},
    services::UpdateStatusRequest,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn history_is_chronological_and_scoped_to_task(
    service: TestService,
) -> Result<(), eyre::Report> {
    let first = task_advanced_through(&service, "First", &["pending"], "alice").await?;
    let second =
        task_advanced_through(&service, "Second", &["pending", "in_progress"], "bob").await?;
    service
        .update_status(UpdateStatusRequest::new(first.id(), "in_progress", "carol"))
        .await?;

    let history = service.audit_history(first.id()).await?;
    eyre::ensure!(history.len() == 2, "expected two entries, got {}", history.len());
    eyre::ensure!(history.iter().all(|entry| entry.task_id() == first.id()));

    let actors: Vec<&str> = history.iter().map(|entry| entry.actor().as_str()).collect();
    eyre::ensure!(actors == vec!["alice", "carol"], "unexpected actors {actors:?}");
    let timestamps_ordered = history
        .windows(2)
        .all(|pair| matches!(pair, [earlier, later] if earlier.timestamp() <= later.timestamp()));
    eyre::ensure!(timestamps_ordered, "entries are not chronological");

    eyre::ensure!(service.audit_history(second.id()).await?.len() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_task_history_is_empty(service: TestService) -> Result<(), eyre::Report> {
    eyre::ensure!(service.audit_history(TaskId::new()).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn history_survives_deletion(service: TestService) -> Result<(), eyre::Report> {
    let task = task_advanced_through(
        &service,
        "Retained",
        &["pending", "in_progress", "done"],
        "alice",
    )
    .await?;

    service.delete_task(task.id()).await?;

    let history = service.audit_history(task.id()).await?;
    eyre::ensure!(history.len() == 3);
    let last = history
        .last()
        .ok_or_else(|| eyre::eyre!("history should not be empty"))?;
    eyre::ensure!(last.to_status() == TaskStatus::Done);
    Ok(())
}
