//! Presentation derived from [`AppState`]. Holds no state of its own.

use std::fmt;

use crate::state::{AppState, Collection};
use crate::types::{Entity, EntityId, Target, UNASSIGNED};

/// Label of the "no target" choice in the todo form.
pub const NO_TARGET_LABEL: &str = "Select Target";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub target_form: TargetForm,
    pub todo_form: TodoForm,
    pub targets: Vec<TargetRow>,
    pub todos: Vec<TodoRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetForm {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoForm {
    pub title: String,
    pub description: String,
    pub target_id: EntityId,
    /// `Select Target` / 0 first, then one entry per loaded target.
    pub target_options: Vec<TargetOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOption {
    pub value: EntityId,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Read,
    Edit,
}

/// One target row. In `Edit` mode the text fields show the edit buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRow {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub mode: RowMode,
}

/// One todo row. In `Edit` mode the text fields and `target_id` show the
/// edit buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub target_id: EntityId,
    /// Title of the target `target_id` points at, `None` if it points nowhere.
    pub target_title: Option<String>,
    pub mode: RowMode,
}

/// Linear lookup of a target's title. Dangling ids resolve to `None`.
pub fn resolve_target_title(targets: &[Target], target_id: EntityId) -> Option<&str> {
    targets
        .iter()
        .find(|target| target.id == target_id)
        .map(|target| target.title.as_str())
}

pub fn render(state: &AppState) -> View {
    let targets = &state.targets.items;

    let mut target_options = vec![TargetOption {
        value: UNASSIGNED,
        label: NO_TARGET_LABEL.to_string(),
    }];
    target_options.extend(targets.iter().map(|target| TargetOption {
        value: target.id,
        label: target.title.clone(),
    }));

    View {
        target_form: TargetForm {
            title: state.targets.draft.title.clone(),
            description: state.targets.draft.description.clone(),
        },
        todo_form: TodoForm {
            title: state.todos.draft.title.clone(),
            description: state.todos.draft.description.clone(),
            target_id: state.todos.draft.target_id,
            target_options,
        },
        targets: rows(&state.targets)
            .map(|(target, mode)| TargetRow {
                id: target.id,
                title: target.title.clone(),
                description: target.description.clone(),
                mode,
            })
            .collect(),
        todos: rows(&state.todos)
            .map(|(todo, mode)| TodoRow {
                id: todo.id,
                title: todo.title.clone(),
                description: todo.description.clone(),
                target_id: todo.target_id,
                target_title: resolve_target_title(targets, todo.target_id).map(str::to_string),
                mode,
            })
            .collect(),
    }
}

/// Each committed record, swapped for the edit buffer when it is open.
fn rows<E: Entity>(collection: &Collection<E>) -> impl Iterator<Item = (&E, RowMode)> {
    collection
        .items
        .iter()
        .map(move |item| match collection.edit.buffer() {
            Some(buffer) if buffer.id() == item.id() => (buffer, RowMode::Edit),
            _ => (item, RowMode::Read),
        })
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== TARGETS ==")?;
        writeln!(
            f,
            "new target: title={:?} description={:?}",
            self.target_form.title, self.target_form.description
        )?;
        for row in &self.targets {
            match row.mode {
                RowMode::Read => writeln!(f, "  {} (ID: {})\n    {}", row.title, row.id, row.description)?,
                RowMode::Edit => writeln!(
                    f,
                    "  [editing {}] title={:?} description={:?}",
                    row.id, row.title, row.description
                )?,
            }
        }

        writeln!(f, "== TODOS ==")?;
        let chosen = self
            .todo_form
            .target_options
            .iter()
            .find(|option| option.value == self.todo_form.target_id)
            .map_or("", |option| option.label.as_str());
        writeln!(
            f,
            "new todo: title={:?} description={:?} target={chosen}",
            self.todo_form.title, self.todo_form.description
        )?;
        for row in &self.todos {
            let target = row.target_title.as_deref().unwrap_or("");
            match row.mode {
                RowMode::Read => writeln!(
                    f,
                    "  {} (ID: {})\n    {}\n    Target: {target}",
                    row.title, row.id, row.description
                )?,
                RowMode::Edit => writeln!(
                    f,
                    "  [editing {}] title={:?} description={:?} target={} ({target})",
                    row.id, row.title, row.description, row.target_id
                )?,
            }
        }
        Ok(())
    }
}
