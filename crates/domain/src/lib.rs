mod change;
mod content;
mod notification;
mod participant;
mod policy;
mod reminder;
mod shared;
mod task;

pub use change::{detect_changes, FieldChange, SIN_FECHA};
pub use content::{render_reminder, EmailContent, NOT_AVAILABLE};
pub use notification::{NotificationKind, NotificationPayload};
pub use participant::{filter_participants, participants};
pub use policy::{PolicyRecord, RecordKind};
pub use reminder::{compute_reminders, PaymentFrequency, ReminderInstance, ReminderSpec};
pub use shared::entity::{Entity, ID};
pub use task::{Comment, Task, TaskPriority, TaskStatus, User};
