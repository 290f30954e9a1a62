use super::{dispatch_and_log, recipients_for};
use crate::shared::usecase::UseCase;
use agencia_notify_domain::{
    detect_changes, participants, FieldChange, NotificationKind, NotificationPayload, Task,
};
use agencia_notify_infra::NotifyContext;

/// Notifies the participants of a task about the watched fields that
/// changed between two snapshots. No changes means no dispatch.
#[derive(Debug)]
pub struct NotifyTaskUpdatedUseCase {
    pub old_task: Task,
    pub new_task: Task,
    pub sender: String,
}

#[derive(Debug)]
pub struct TaskUpdateNotification {
    pub changes: Vec<FieldChange>,
    pub participants: Vec<String>,
    pub dispatched: bool,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for NotifyTaskUpdatedUseCase {
    type Response = TaskUpdateNotification;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &NotifyContext) -> Result<Self::Response, Self::Errors> {
        let changes = detect_changes(&self.old_task, &self.new_task);
        if changes.is_empty() {
            return Ok(TaskUpdateNotification {
                changes,
                participants: Vec::new(),
                dispatched: false,
            });
        }

        let recipients = recipients_for(participants(&self.new_task), &self.sender, ctx);
        if recipients.is_empty() {
            return Ok(TaskUpdateNotification {
                changes,
                participants: recipients,
                dispatched: false,
            });
        }

        let payload = NotificationPayload::new(
            NotificationKind::TaskUpdated,
            self.new_task.clone(),
            recipients.clone(),
            self.sender.clone(),
        )
        .with_changes(changes.clone());
        let dispatched = dispatch_and_log(&payload, ctx).await;

        Ok(TaskUpdateNotification {
            changes,
            participants: recipients,
            dispatched,
        })
    }
}
