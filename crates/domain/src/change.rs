use crate::task::Task;
use chrono::NaiveDate;
use serde::Serialize;

pub const SIN_FECHA: &str = "Sin fecha";

/// A single watched field that differs between two snapshots of a task.
/// Values are already mapped to their human display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    pub field: &'static str,
    pub old_value: String,
    pub new_value: String,
}

fn format_due_date(due_date: &Option<NaiveDate>) -> String {
    match due_date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => SIN_FECHA.to_string(),
    }
}

fn format_assigned(task: &Task) -> String {
    if task.assigned_users.is_empty() {
        return "Sin asignar".to_string();
    }
    task.assigned_users
        .iter()
        .map(|u| u.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compares exactly four fields of two task snapshots, in fixed order:
/// status, priority, assignedTo, dueDate. Differences in any other
/// field are ignored.
pub fn detect_changes(old: &Task, new: &Task) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    if old.status != new.status {
        changes.push(FieldChange {
            field: "status",
            old_value: old.status.display_label().to_string(),
            new_value: new.status.display_label().to_string(),
        });
    }
    if old.priority != new.priority {
        changes.push(FieldChange {
            field: "priority",
            old_value: old.priority.display_label().to_string(),
            new_value: new.priority.display_label().to_string(),
        });
    }
    if old.assigned_users != new.assigned_users {
        changes.push(FieldChange {
            field: "assignedTo",
            old_value: format_assigned(old),
            new_value: format_assigned(new),
        });
    }
    if old.due_date != new.due_date {
        changes.push(FieldChange {
            field: "dueDate",
            old_value: format_due_date(&old.due_date),
            new_value: format_due_date(&new.due_date),
        });
    }

    changes
}
