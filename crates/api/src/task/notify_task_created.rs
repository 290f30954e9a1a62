use super::subscribers::NotifyMentionsOnTaskCreated;
use super::{dispatch_and_log, recipients_for};
use crate::shared::usecase::{Subscriber, UseCase};
use agencia_notify_domain::{participants, NotificationKind, NotificationPayload, Task};
use agencia_notify_infra::NotifyContext;

/// Notifies the participants of a freshly created task.
#[derive(Debug)]
pub struct NotifyTaskCreatedUseCase {
    pub task: Task,
    /// Email of the acting user saving the task
    pub sender: String,
}

#[derive(Debug)]
pub struct TaskNotification {
    pub task: Task,
    pub sender: String,
    pub participants: Vec<String>,
    pub dispatched: bool,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for NotifyTaskCreatedUseCase {
    type Response = TaskNotification;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &NotifyContext) -> Result<Self::Response, Self::Errors> {
        let all = participants(&self.task);

        // A creator assigning only themselves still gets a confirmation
        // email, so the sender is not filtered out of a single-entry
        // list on creation. Updates always filter.
        let recipients = if all.len() == 1 && all[0] == self.sender {
            all
        } else {
            recipients_for(all, &self.sender, ctx)
        };

        if recipients.is_empty() {
            return Ok(TaskNotification {
                task: self.task.clone(),
                sender: self.sender.clone(),
                participants: recipients,
                dispatched: false,
            });
        }

        let payload = NotificationPayload::new(
            NotificationKind::TaskCreated,
            self.task.clone(),
            recipients.clone(),
            self.sender.clone(),
        );
        let dispatched = dispatch_and_log(&payload, ctx).await;

        Ok(TaskNotification {
            task: self.task.clone(),
            sender: self.sender.clone(),
            participants: recipients,
            dispatched,
        })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyMentionsOnTaskCreated)]
    }
}
