//! Local view-state: a cached snapshot of both remote collections plus the
//! draft and edit slot of each.
//!
//! # Design
//! `items` is only ever changed from a server response. It is kept sorted by
//! id so that completions arriving in any order produce the same list.

use crate::action::{Action, CollectionAction};
use crate::types::{Entity, EntityId, Target, Todo};

/// The edit slot of one collection: nothing open, or exactly one working
/// copy. The copy's `id` names the entity being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState<E> {
    Viewing,
    Editing(E),
}

impl<E> Default for EditState<E> {
    fn default() -> Self {
        EditState::Viewing
    }
}

impl<E: Entity> EditState<E> {
    pub fn editing_id(&self) -> Option<EntityId> {
        match self {
            EditState::Viewing => None,
            EditState::Editing(buffer) => Some(buffer.id()),
        }
    }

    pub fn is_editing(&self, id: EntityId) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn buffer(&self) -> Option<&E> {
        match self {
            EditState::Viewing => None,
            EditState::Editing(buffer) => Some(buffer),
        }
    }
}

/// One remote collection as seen by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<E: Entity> {
    /// Committed records, sorted by id.
    pub items: Vec<E>,
    pub draft: E::Draft,
    pub edit: EditState<E>,
}

impl<E: Entity> Default for Collection<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            draft: E::Draft::default(),
            edit: EditState::Viewing,
        }
    }
}

impl<E: Entity> Collection<E> {
    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replace the whole snapshot with a freshly listed one.
    pub fn replace_all(&mut self, mut items: Vec<E>) {
        items.sort_by_key(|item| item.id());
        self.items = items;
    }

    /// Insert at the position given by its id. A record with the same id is
    /// overwritten so ids stay unique.
    pub fn insert_ordered(&mut self, entity: E) {
        match self.items.binary_search_by_key(&entity.id(), |item| item.id()) {
            Ok(index) => self.items[index] = entity,
            Err(index) => self.items.insert(index, entity),
        }
    }

    /// Overwrite the record with `entity`'s id. Returns `false` (and leaves
    /// the list alone) when no such record is present.
    pub fn replace(&mut self, entity: E) -> bool {
        match self.items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: EntityId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Open the edit slot on `id`, discarding whatever was open before.
    /// Returns `false` when `id` is not in the collection.
    pub fn begin_edit(&mut self, id: EntityId) -> bool {
        match self.get(id).cloned() {
            Some(entity) => {
                self.edit = EditState::Editing(entity);
                true
            }
            None => false,
        }
    }

    /// Close the slot only if it is still open on `id`.
    pub fn close_edit_on(&mut self, id: EntityId) {
        if self.edit.is_editing(id) {
            self.edit = EditState::Viewing;
        }
    }
}

/// All client state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub targets: Collection<Target>,
    pub todos: Collection<Todo>,
}

/// Routes an entity type to its collection and its action variant, so the
/// reducer and store can be written once for both collections.
pub trait Stored: Entity {
    fn collection(state: &AppState) -> &Collection<Self>;
    fn collection_mut(state: &mut AppState) -> &mut Collection<Self>;
    fn into_action(action: CollectionAction<Self>) -> Action;
    fn from_action(action: Action) -> Option<CollectionAction<Self>>;
}

impl Stored for Target {
    fn collection(state: &AppState) -> &Collection<Self> {
        &state.targets
    }

    fn collection_mut(state: &mut AppState) -> &mut Collection<Self> {
        &mut state.targets
    }

    fn into_action(action: CollectionAction<Self>) -> Action {
        Action::Target(action)
    }

    fn from_action(action: Action) -> Option<CollectionAction<Self>> {
        match action {
            Action::Target(action) => Some(action),
            _ => None,
        }
    }
}

impl Stored for Todo {
    fn collection(state: &AppState) -> &Collection<Self> {
        &state.todos
    }

    fn collection_mut(state: &mut AppState) -> &mut Collection<Self> {
        &mut state.todos
    }

    fn into_action(action: CollectionAction<Self>) -> Action {
        Action::Todo(action)
    }

    fn from_action(action: Action) -> Option<CollectionAction<Self>> {
        match action {
            Action::Todo(action) => Some(action),
            _ => None,
        }
    }
}
