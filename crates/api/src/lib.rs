mod reminder;
mod shared;
mod task;

pub use reminder::get_upcoming_reminders::{GetUpcomingRemindersUseCase, UpcomingReminder};
pub use shared::usecase::{execute, Subscriber, UseCase};
pub use task::notify_comment_added::{CommentNotification, NotifyCommentAddedUseCase};
pub use task::notify_mentioned_users::{MentionNotification, NotifyMentionedUsersUseCase};
pub use task::notify_task_created::{NotifyTaskCreatedUseCase, TaskNotification};
pub use task::notify_task_updated::{NotifyTaskUpdatedUseCase, TaskUpdateNotification};
