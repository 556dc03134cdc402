//! Actions fed to the reducer and effects it hands back.
//!
//! # Design
//! User intents (`Submit`, `Save`, `Delete`, ...) and request completions
//! (`Created`, `Updated`, `Deleted`, ...) share one enum. A user intent that
//! needs the network returns an [`Effect::Request`]; the host executes it and
//! feeds the matching completion back through the reducer.

use crate::error::TransportError;
use crate::http::HttpRequest;
use crate::types::{EntityId, Field, Resource, Target, Todo};

/// Everything that can change [`AppState`](crate::AppState).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Fetch both collections. Targets are listed first; todos are only
    /// requested once that succeeds.
    Load,
    /// First half of a load. Nothing is committed yet.
    TargetsFetched(Result<Vec<Target>, TransportError>),
    /// Both lists arrived, or the load failed and nothing changes.
    Loaded(Result<Snapshot, TransportError>),
    Target(CollectionAction<Target>),
    Todo(CollectionAction<Todo>),
}

/// Both lists from one load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub targets: Vec<Target>,
    pub todos: Vec<Todo>,
}

/// The per-collection protocol, identical for both collections.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionAction<E> {
    /// Change one field of the draft.
    EditDraft(Field),
    /// Create a record from the current draft.
    Submit,
    Created(Result<E, TransportError>),

    /// Open the edit slot on an existing record.
    BeginEdit(EntityId),
    /// Change one field of the open edit buffer.
    EditField(Field),
    /// Close the edit slot without sending anything.
    CancelEdit,
    /// Send the edit buffer to the server.
    Save,
    Updated {
        id: EntityId,
        result: Result<E, TransportError>,
    },

    Delete(EntityId),
    Deleted {
        id: EntityId,
        result: Result<(), TransportError>,
    },
}

/// Which completion a finished request turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    LoadTargets,
    /// The todo list of a load, carrying the targets already fetched.
    LoadTodos(Vec<Target>),
    Created(Resource),
    Updated(Resource, EntityId),
    Deleted(Resource, EntityId),
}

/// Work the reducer asks the host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Execute `request`, then hand the outcome to
    /// [`ApiClient::complete`](crate::ApiClient::complete) with `completion`.
    Request {
        request: HttpRequest,
        completion: Completion,
    },
    /// Feed an action straight back to the reducer.
    Dispatch(Action),
}
