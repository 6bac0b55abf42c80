//! Concurrent transitions against a single task.

use super::helpers::{TestService, service};
use rstest::rstest;
use tasktrail::task::{
    domain::TaskStatus,
    services::{CreateTaskRequest, TaskLifecycleErrorKind, UpdateStatusRequest},
};
use tokio::task::JoinSet;

const CONTENDERS: usize = 32;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_identical_transitions_record_one_entry(
    service: TestService,
) -> Result<(), eyre::Report> {
    let task = service.create_task(CreateTaskRequest::new("Contended")).await?;

    let mut requests = JoinSet::new();
    for contender in 0..CONTENDERS {
        let worker = service.clone();
        let task_id = task.id();
        requests.spawn(async move {
            worker
                .update_status(UpdateStatusRequest::new(
                    task_id,
                    "pending",
                    format!("worker-{contender}"),
                ))
                .await
        });
    }

    while let Some(joined) = requests.join_next().await {
        let updated = joined??;
        eyre::ensure!(updated.status() == TaskStatus::Pending);
    }

    let history = service.audit_history(task.id()).await?;
    eyre::ensure!(
        history.len() == 1,
        "expected exactly one audit entry, found {}",
        history.len()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_chain_advances_at_most_one_step_each(
    service: TestService,
) -> Result<(), eyre::Report> {
    let task = service.create_task(CreateTaskRequest::new("Relay")).await?;

    let mut requests = JoinSet::new();
    for target in ["pending", "in_progress", "done"].into_iter().cycle().take(CONTENDERS) {
        let worker = service.clone();
        let task_id = task.id();
        requests.spawn(async move {
            worker
                .update_status(UpdateStatusRequest::new(task_id, target, "racer"))
                .await
        });
    }

    while let Some(joined) = requests.join_next().await {
        if let Err(err) = joined? {
            eyre::ensure!(
                err.kind() == TaskLifecycleErrorKind::InvalidStatusTransition,
                "unexpected failure {err}"
            );
        }
    }

    let stored = service.get_task_by_id(task.id()).await?;
    let history = service.audit_history(task.id()).await?;
    for (entry, expected_from) in history.iter().zip(TaskStatus::ALL) {
        eyre::ensure!(entry.from_status() == expected_from);
        eyre::ensure!(expected_from.can_transition_to(entry.to_status()));
    }
    let last_recorded = history
        .last()
        .map_or(TaskStatus::ToDo, |entry| entry.to_status());
    eyre::ensure!(
        stored.status() == last_recorded,
        "stored status {} does not match audit trail {}",
        stored.status(),
        last_recorded
    );
    Ok(())
}
