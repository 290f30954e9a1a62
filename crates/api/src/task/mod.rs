pub mod notify_comment_added;
pub mod notify_mentioned_users;
pub mod notify_task_created;
pub mod notify_task_updated;
mod subscribers;

use agencia_notify_domain::{filter_participants, NotificationPayload};
use agencia_notify_infra::NotifyContext;
use tracing::error;

/// Fire-and-forget dispatch. A failed call is logged at the call site
/// and never blocks or rolls back the triggering user action.
pub(crate) async fn dispatch_and_log(payload: &NotificationPayload, ctx: &NotifyContext) -> bool {
    match ctx.notifier.send(payload).await {
        Ok(_) => true,
        Err(e) => {
            error!(
                "Unable to dispatch {} notification for task {}: {:?}",
                payload.kind.as_str(),
                payload.task.id,
                e
            );
            false
        }
    }
}

/// Recipients for a dispatch: participants minus the acting user and
/// minus the configured sender identity, so the service never notifies
/// itself.
pub(crate) fn recipients_for(
    participants: Vec<String>,
    sender: &str,
    ctx: &NotifyContext,
) -> Vec<String> {
    let recipients = filter_participants(participants, sender);
    filter_participants(recipients, &ctx.config.sender_email)
}
