use serde::{Deserialize, Serialize};

/// Single entry of a todo-list note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: i64, text: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            completed: false,
        }
    }
}

/// A note is either free text or a titled checklist. The `type` field is
/// the wire discriminant; persisted notes written before the discriminant
/// existed are rewritten to `text` during the load merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Note {
    #[serde(rename = "text", rename_all = "camelCase")]
    Text {
        id: i64,
        content: String,
        created_at: String,
    },
    #[serde(rename = "todo", rename_all = "camelCase")]
    Todo {
        id: i64,
        title: String,
        items: Vec<TodoItem>,
        created_at: String,
    },
}

impl Note {
    pub fn id(&self) -> i64 {
        match self {
            Note::Text { id, .. } | Note::Todo { id, .. } => *id,
        }
    }

    pub fn created_at(&self) -> &str {
        match self {
            Note::Text { created_at, .. } | Note::Todo { created_at, .. } => created_at,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Note::Text { .. })
    }

    pub fn is_todo(&self) -> bool {
        matches!(self, Note::Todo { .. })
    }
}
