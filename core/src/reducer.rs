//! The single update function for [`AppState`].
//!
//! # Design
//! `reduce` is pure apart from logging: it mutates state and returns the
//! effects to run. Committed records only change inside completion arms
//! (`Loaded`, `Created`, `Updated`, `Deleted`) and only on `Ok`. On `Err` the
//! failure is logged and state is left exactly as it was.
//!
//! A load is two chained requests. The todo list is only requested after the
//! target list arrived, and neither collection is replaced until both have.

use tracing::{debug, error, info};

use crate::action::{Action, CollectionAction, Completion, Effect};
use crate::client::ApiClient;
use crate::state::{AppState, EditState, Stored};
use crate::types::{Editable, Resource, Target, Todo};

pub fn reduce(state: &mut AppState, action: Action, client: &ApiClient) -> Vec<Effect> {
    match action {
        Action::Load => {
            info!("fetching targets");
            vec![Effect::Request {
                request: client.build_list(Resource::Targets),
                completion: Completion::LoadTargets,
            }]
        }
        Action::TargetsFetched(Ok(targets)) => {
            info!(count = targets.len(), "fetching todos");
            vec![Effect::Request {
                request: client.build_list(Resource::Todos),
                completion: Completion::LoadTodos(targets),
            }]
        }
        Action::TargetsFetched(Err(err)) => {
            error!(resource = %Resource::Targets, error = %err, "error fetching collection");
            Vec::new()
        }
        Action::Loaded(Ok(snapshot)) => {
            debug!(targets = snapshot.targets.len(), todos = snapshot.todos.len(), "collections loaded");
            state.targets.replace_all(snapshot.targets);
            state.todos.replace_all(snapshot.todos);
            Vec::new()
        }
        Action::Loaded(Err(err)) => {
            error!(resource = %Resource::Todos, error = %err, "error fetching collection");
            Vec::new()
        }
        Action::Target(action) => reduce_collection::<Target>(state, action, client),
        Action::Todo(action) => reduce_collection::<Todo>(state, action, client),
    }
}

fn reduce_collection<E: Stored>(
    state: &mut AppState,
    action: CollectionAction<E>,
    client: &ApiClient,
) -> Vec<Effect> {
    let resource = E::RESOURCE;
    let collection = E::collection_mut(state);

    match action {
        CollectionAction::EditDraft(field) => {
            if !collection.draft.apply(field) {
                debug!(%resource, "draft has no such field");
            }
            Vec::new()
        }
        CollectionAction::Submit => {
            info!(%resource, draft = ?collection.draft, "posting new record");
            let effect = match client.build_create(resource, &E::payload(&collection.draft)) {
                Ok(request) => Effect::Request {
                    request,
                    completion: Completion::Created(resource),
                },
                Err(err) => Effect::Dispatch(E::into_action(CollectionAction::Created(Err(err)))),
            };
            vec![effect]
        }
        CollectionAction::Created(Ok(entity)) => {
            collection.insert_ordered(entity);
            collection.draft = E::Draft::default();
            Vec::new()
        }
        CollectionAction::Created(Err(err)) => {
            error!(%resource, error = %err, "error posting record");
            Vec::new()
        }

        CollectionAction::BeginEdit(id) => {
            if !collection.begin_edit(id) {
                debug!(%resource, id, "edit requested for unknown record");
            }
            Vec::new()
        }
        CollectionAction::EditField(field) => {
            match &mut collection.edit {
                EditState::Editing(buffer) => {
                    if !buffer.apply(field) {
                        debug!(%resource, "record has no such field");
                    }
                }
                EditState::Viewing => debug!(%resource, "field edit with no open record"),
            }
            Vec::new()
        }
        CollectionAction::CancelEdit => {
            collection.edit = EditState::Viewing;
            Vec::new()
        }
        CollectionAction::Save => {
            let Some(buffer) = collection.edit.buffer() else {
                debug!(%resource, "save with no open record");
                return Vec::new();
            };
            let id = buffer.id();
            info!(%resource, id, "updating record");
            let effect = match client.build_update(resource, id, buffer) {
                Ok(request) => Effect::Request {
                    request,
                    completion: Completion::Updated(resource, id),
                },
                Err(err) => Effect::Dispatch(E::into_action(CollectionAction::Updated { id, result: Err(err) })),
            };
            vec![effect]
        }
        CollectionAction::Updated { id, result: Ok(entity) } => {
            collection.replace(entity);
            collection.close_edit_on(id);
            Vec::new()
        }
        CollectionAction::Updated { id, result: Err(err) } => {
            error!(%resource, id, error = %err, "error updating record");
            Vec::new()
        }

        CollectionAction::Delete(id) => {
            info!(%resource, id, "deleting record");
            vec![Effect::Request {
                request: client.build_delete(resource, id),
                completion: Completion::Deleted(resource, id),
            }]
        }
        CollectionAction::Deleted { id, result: Ok(()) } => {
            collection.remove(id);
            collection.close_edit_on(id);
            Vec::new()
        }
        CollectionAction::Deleted { id, result: Err(err) } => {
            error!(%resource, id, error = %err, "error deleting record");
            Vec::new()
        }
    }
}
