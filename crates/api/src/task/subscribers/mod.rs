use super::notify_comment_added::{CommentNotification, NotifyCommentAddedUseCase};
use super::notify_mentioned_users::NotifyMentionedUsersUseCase;
use super::notify_task_created::{NotifyTaskCreatedUseCase, TaskNotification};
use crate::shared::usecase::{execute, Subscriber};
use agencia_notify_infra::NotifyContext;

pub struct NotifyMentionsOnTaskCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<NotifyTaskCreatedUseCase> for NotifyMentionsOnTaskCreated {
    async fn notify(&self, e: &TaskNotification, ctx: &NotifyContext) {
        if e.task.mentioned.is_empty() {
            return;
        }
        let notify_mentions = NotifyMentionedUsersUseCase {
            task: e.task.clone(),
            mentioned: e.task.mentioned.clone(),
            sender: e.sender.clone(),
            comment: None,
        };

        // Sideeffect, ignore result
        let _ = execute(notify_mentions, ctx).await;
    }
}

pub struct NotifyMentionsOnCommentAdded;

#[async_trait::async_trait(?Send)]
impl Subscriber<NotifyCommentAddedUseCase> for NotifyMentionsOnCommentAdded {
    async fn notify(&self, e: &CommentNotification, ctx: &NotifyContext) {
        if e.comment.mentioned.is_empty() {
            return;
        }
        let notify_mentions = NotifyMentionedUsersUseCase {
            task: e.task.clone(),
            mentioned: e.comment.mentioned.clone(),
            sender: e.sender.clone(),
            comment: Some(e.comment.clone()),
        };

        // Sideeffect, ignore result
        let _ = execute(notify_mentions, ctx).await;
    }
}
