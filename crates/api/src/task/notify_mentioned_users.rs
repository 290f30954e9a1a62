use super::dispatch_and_log;
use crate::shared::usecase::UseCase;
use agencia_notify_domain::{
    filter_participants, Comment, NotificationKind, NotificationPayload, Task,
};
use agencia_notify_infra::NotifyContext;
use std::collections::HashSet;

/// Dispatches a `user_mentioned` notification to the addresses
/// @-mentioned in a task description or comment. Runs as a side effect
/// of the base notification and never affects its outcome.
#[derive(Debug)]
pub struct NotifyMentionedUsersUseCase {
    pub task: Task,
    pub mentioned: Vec<String>,
    pub sender: String,
    pub comment: Option<Comment>,
}

#[derive(Debug)]
pub struct MentionNotification {
    pub participants: Vec<String>,
    pub dispatched: bool,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for NotifyMentionedUsersUseCase {
    type Response = MentionNotification;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &NotifyContext) -> Result<Self::Response, Self::Errors> {
        let mut recipients = filter_participants(self.mentioned.clone(), &self.sender);
        recipients = filter_participants(recipients, &ctx.config.sender_email);
        let mut seen = HashSet::new();
        recipients.retain(|r| seen.insert(r.clone()));

        if recipients.is_empty() {
            return Ok(MentionNotification {
                participants: recipients,
                dispatched: false,
            });
        }

        let mut payload = NotificationPayload::new(
            NotificationKind::UserMentioned,
            self.task.clone(),
            recipients.clone(),
            self.sender.clone(),
        );
        if let Some(comment) = &self.comment {
            payload = payload.with_comment(comment.clone());
        }
        let dispatched = dispatch_and_log(&payload, ctx).await;

        Ok(MentionNotification {
            participants: recipients,
            dispatched,
        })
    }
}
