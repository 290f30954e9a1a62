use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A `User` of the agency, as embedded in `Task` records. Only the
/// fields needed for notification routing are carried here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pendiente,
    EnProgreso,
    Completada,
    Cancelada,
}

impl TaskStatus {
    /// Human label shown in notification emails
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::EnProgreso => "En progreso",
            Self::Completada => "Completada",
            Self::Cancelada => "Cancelada",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Baja,
    Media,
    Alta,
    Urgente,
}

impl TaskPriority {
    /// Human label shown in notification emails
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Baja => "Baja",
            Self::Media => "Media",
            Self::Alta => "Alta",
            Self::Urgente => "Urgente",
        }
    }
}

/// A comment on a `Task`. `mentioned` holds the email addresses
/// @-mentioned in the comment body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: ID,
    pub author: User,
    pub body: String,
    #[serde(default)]
    pub mentioned: Vec<String>,
    #[serde(default)]
    pub reply_to: Option<ID>,
    #[serde(default)]
    pub admin_only: bool,
}

/// A `Task` record owned by the external document store. This core only
/// reads it to resolve recipients, detect changes and assemble
/// notification payloads; durability belongs to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: ID,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_by: Option<User>,
    #[serde(default)]
    pub assigned_users: Vec<User>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Email addresses @-mentioned in the task description
    #[serde(default)]
    pub mentioned: Vec<String>,
}

impl Entity for Task {
    fn id(&self) -> &ID {
        &self.id
    }
}
