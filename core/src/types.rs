//! Domain DTOs for the Targets / Todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. Wire
//! names are camelCase (`isComplete`, `targetId`) to match the remote API.
//!
//! Ids are always assigned by the server. The client never mints one; a
//! record only gets an id by coming back in a response body.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Server-assigned identifier shared by both collections.
pub type EntityId = i64;

/// `targetId` value meaning "not assigned to any target".
pub const UNASSIGNED: EntityId = 0;

/// The two remote collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Targets,
    Todos,
}

impl Resource {
    /// Path segment of the collection under the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Targets => "Targets",
            Resource::Todos => "Todo",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A parent goal / category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub is_complete: bool,
    /// Absent in older API variants.
    #[serde(default)]
    pub todos: Vec<Todo>,
}

/// A task, optionally linked to one [`Target`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub is_complete: bool,
    /// `0` when unassigned. Not checked against the Targets collection.
    #[serde(default)]
    pub target_id: EntityId,
}

/// Unsaved input for a new target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetDraft {
    pub title: String,
    pub description: String,
}

/// Unsaved input for a new todo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub target_id: EntityId,
}

/// Request payload for creating a new target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTarget {
    pub title: String,
    pub description: String,
    pub is_complete: bool,
    pub todos: Vec<Todo>,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
    pub is_complete: bool,
    pub target_id: EntityId,
}

/// One form-input change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Title(String),
    Description(String),
    TargetId(EntityId),
}

/// Records that accept [`Field`] changes from a form.
pub trait Editable {
    /// Apply `field`. Returns `false` when the record has no such field.
    fn apply(&mut self, field: Field) -> bool;
}

impl Editable for TargetDraft {
    fn apply(&mut self, field: Field) -> bool {
        match field {
            Field::Title(title) => self.title = title,
            Field::Description(description) => self.description = description,
            Field::TargetId(_) => return false,
        }
        true
    }
}

impl Editable for TodoDraft {
    fn apply(&mut self, field: Field) -> bool {
        match field {
            Field::Title(title) => self.title = title,
            Field::Description(description) => self.description = description,
            Field::TargetId(target_id) => self.target_id = target_id,
        }
        true
    }
}

impl Editable for Target {
    fn apply(&mut self, field: Field) -> bool {
        match field {
            Field::Title(title) => self.title = title,
            Field::Description(description) => self.description = description,
            Field::TargetId(_) => return false,
        }
        true
    }
}

impl Editable for Todo {
    fn apply(&mut self, field: Field) -> bool {
        match field {
            Field::Title(title) => self.title = title,
            Field::Description(description) => self.description = description,
            Field::TargetId(target_id) => self.target_id = target_id,
        }
        true
    }
}

/// A record living in one of the remote collections.
pub trait Entity: Editable + Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned {
    type Draft: Editable + Default + Clone + fmt::Debug + PartialEq;
    type Payload: Serialize;

    const RESOURCE: Resource;

    fn id(&self) -> EntityId;

    /// Creation payload for `draft`. New records always start incomplete.
    fn payload(draft: &Self::Draft) -> Self::Payload;
}

impl Entity for Target {
    type Draft = TargetDraft;
    type Payload = CreateTarget;

    const RESOURCE: Resource = Resource::Targets;

    fn id(&self) -> EntityId {
        self.id
    }

    fn payload(draft: &TargetDraft) -> CreateTarget {
        CreateTarget {
            title: draft.title.clone(),
            description: draft.description.clone(),
            is_complete: false,
            todos: Vec::new(),
        }
    }
}

impl Entity for Todo {
    type Draft = TodoDraft;
    type Payload = CreateTodo;

    const RESOURCE: Resource = Resource::Todos;

    fn id(&self) -> EntityId {
        self.id
    }

    fn payload(draft: &TodoDraft) -> CreateTodo {
        CreateTodo {
            title: draft.title.clone(),
            description: draft.description.clone(),
            is_complete: false,
            target_id: draft.target_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_uses_camel_case_wire_names() {
        let target = Target {
            id: 1,
            title: "Groceries".to_string(),
            description: "Weekly shop".to_string(),
            is_complete: false,
            todos: Vec::new(),
        };
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["isComplete"], false);
        assert!(json["todos"].as_array().unwrap().is_empty());
        assert!(json.get("is_complete").is_none());
    }

    #[test]
    fn target_without_todos_field_defaults_to_empty() {
        let target: Target =
            serde_json::from_str(r#"{"id":3,"title":"T","description":"D","isComplete":true}"#).unwrap();
        assert!(target.todos.is_empty());
        assert!(target.is_complete);
    }

    #[test]
    fn todo_without_target_id_is_unassigned() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":2,"title":"T","description":"D","isComplete":false}"#).unwrap();
        assert_eq!(todo.target_id, UNASSIGNED);
    }

    #[test]
    fn payload_forces_incomplete_and_empty_children() {
        let draft = TargetDraft {
            title: "Groceries".to_string(),
            description: "Weekly shop".to_string(),
        };
        let json = serde_json::to_value(Target::payload(&draft)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Groceries",
                "description": "Weekly shop",
                "isComplete": false,
                "todos": []
            })
        );
    }

    #[test]
    fn todo_payload_carries_target_id() {
        let draft = TodoDraft {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            target_id: 1,
        };
        let json = serde_json::to_value(Todo::payload(&draft)).unwrap();
        assert_eq!(json["targetId"], 1);
        assert_eq!(json["isComplete"], false);
    }

    #[test]
    fn target_records_reject_target_id_field() {
        let mut draft = TargetDraft::default();
        assert!(!draft.apply(Field::TargetId(4)));
        assert!(draft.apply(Field::Title("x".to_string())));
        assert_eq!(draft.title, "x");
    }

    #[test]
    fn resource_paths_match_remote_api() {
        assert_eq!(Resource::Targets.path(), "Targets");
        assert_eq!(Resource::Todos.path(), "Todo");
    }
}
