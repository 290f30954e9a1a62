use agencia_notify::domain::{Comment, Task, TaskPriority, TaskStatus, User};

pub fn task_factory() -> Task {
    Task {
        id: Default::default(),
        title: "Renovar póliza de autos".into(),
        description: String::new(),
        status: TaskStatus::Pendiente,
        priority: TaskPriority::Alta,
        due_date: None,
        created_by: Some(User::new("Ana", "ana@agencia.mx")),
        assigned_users: vec![
            User::new("Bruno", "bruno@agencia.mx"),
            User::new("Carla", "carla@agencia.mx"),
        ],
        comments: Vec::new(),
        mentioned: Vec::new(),
    }
}

pub fn comment_factory(author_email: &str) -> Comment {
    Comment {
        id: Default::default(),
        author: User::new(author_email, author_email),
        body: "Cliente confirmó por teléfono".into(),
        mentioned: Vec::new(),
        reply_to: None,
        admin_only: false,
    }
}
