use super::subscribers::NotifyMentionsOnCommentAdded;
use super::{dispatch_and_log, recipients_for};
use crate::shared::usecase::{Subscriber, UseCase};
use agencia_notify_domain::{
    participants, Comment, NotificationKind, NotificationPayload, Task,
};
use agencia_notify_infra::NotifyContext;

/// Notifies the participants of a task about a new comment. Replies and
/// admin-only comments dispatch with their own notification kind.
#[derive(Debug)]
pub struct NotifyCommentAddedUseCase {
    pub task: Task,
    pub comment: Comment,
    pub sender: String,
}

#[derive(Debug)]
pub struct CommentNotification {
    pub task: Task,
    pub comment: Comment,
    pub sender: String,
    pub kind: NotificationKind,
    pub participants: Vec<String>,
    pub dispatched: bool,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

fn notification_kind(comment: &Comment) -> NotificationKind {
    if comment.admin_only {
        NotificationKind::AdminComment
    } else if comment.reply_to.is_some() {
        NotificationKind::ReplyAdded
    } else {
        NotificationKind::CommentAdded
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for NotifyCommentAddedUseCase {
    type Response = CommentNotification;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &NotifyContext) -> Result<Self::Response, Self::Errors> {
        let kind = notification_kind(&self.comment);
        let recipients = recipients_for(participants(&self.task), &self.sender, ctx);

        let dispatched = if recipients.is_empty() {
            false
        } else {
            let payload = NotificationPayload::new(
                kind,
                self.task.clone(),
                recipients.clone(),
                self.sender.clone(),
            )
            .with_comment(self.comment.clone());
            dispatch_and_log(&payload, ctx).await
        };

        Ok(CommentNotification {
            task: self.task.clone(),
            comment: self.comment.clone(),
            sender: self.sender.clone(),
            kind,
            participants: recipients,
            dispatched,
        })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyMentionsOnCommentAdded)]
    }
}
