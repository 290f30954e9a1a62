pub mod get_upcoming_reminders;
