use crate::task::Task;
use itertools::Itertools;

/// Collects the distinct email addresses entitled to receive
/// notifications about a task: creator, assignees and comment authors,
/// in that order. Mentioned users are dispatched separately and are not
/// part of this set.
pub fn participants(task: &Task) -> Vec<String> {
    task.created_by
        .iter()
        .map(|u| u.email.clone())
        .chain(task.assigned_users.iter().map(|u| u.email.clone()))
        .chain(task.comments.iter().map(|c| c.author.email.clone()))
        .unique()
        .collect()
}

/// Removes the excluded address (the acting user) from the participant
/// list; all other addresses pass through unchanged.
pub fn filter_participants(participants: Vec<String>, exclude: &str) -> Vec<String> {
    participants.into_iter().filter(|p| p != exclude).collect()
}
