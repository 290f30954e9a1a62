use crate::change::FieldChange;
use crate::task::{Comment, Task};
use serde::Serialize;

/// The kind of notification being dispatched, serialized as the
/// `type` discriminator of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    TaskCreated,
    TaskUpdated,
    CommentAdded,
    ReplyAdded,
    UserMentioned,
    AdminComment,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaskCreated => "task_created",
            Self::TaskUpdated => "task_updated",
            Self::CommentAdded => "comment_added",
            Self::ReplyAdded => "reply_added",
            Self::UserMentioned => "user_mentioned",
            Self::AdminComment => "admin_comment",
        }
    }
}

/// The payload POSTed to the external email-sending endpoint.
/// Constructed per dispatch call, sent once, never queued or retried.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationPayload {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub task: Task,
    pub participants: Vec<String>,
    pub sender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<Vec<FieldChange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

impl NotificationPayload {
    pub fn new(
        kind: NotificationKind,
        task: Task,
        participants: Vec<String>,
        sender: String,
    ) -> Self {
        Self {
            kind,
            task,
            participants,
            sender,
            changes: None,
            comment: None,
        }
    }

    pub fn with_changes(mut self, changes: Vec<FieldChange>) -> Self {
        self.changes = Some(changes);
        self
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }
}
