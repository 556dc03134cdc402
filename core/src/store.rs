//! The store: owns [`AppState`], runs the reducer, and executes its effects
//! through an injected [`Transport`].
//!
//! # Design
//! Effects are executed one at a time in the order the reducer produced
//! them, and each completion is reduced before the next effect runs. Hosts
//! that want reordered or concurrent completions can drive
//! [`reduce`](crate::reduce) and [`ApiClient::complete`] themselves; the
//! id-ordered collections make the result independent of arrival order.

use std::collections::VecDeque;

use tracing::debug;

use crate::action::{Action, CollectionAction, Effect};
use crate::client::ApiClient;
use crate::error::{StoreError, TransportError};
use crate::reducer::reduce;
use crate::state::{AppState, Stored};
use crate::transport::Transport;
use crate::types::{EntityId, Field};
use crate::view::{render, View};

pub struct Store<T> {
    state: AppState,
    client: ApiClient,
    transport: T,
}

impl<T: Transport> Store<T> {
    pub fn new(client: ApiClient, transport: T) -> Self {
        Self {
            state: AppState::default(),
            client,
            transport,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn view(&self) -> View {
        render(&self.state)
    }

    /// Reduce `action`, run every effect that follows from it, and return the
    /// completion actions in the order they were applied.
    pub fn send(&mut self, action: Action) -> Vec<Action> {
        let mut completions = Vec::new();
        let mut pending: VecDeque<Effect> = reduce(&mut self.state, action, &self.client).into();

        while let Some(effect) = pending.pop_front() {
            let next = match effect {
                Effect::Request { request, completion } => {
                    debug!(method = %request.method, url = %request.path, "executing request");
                    let outcome = self.transport.execute(&request);
                    self.client.complete(completion, outcome)
                }
                Effect::Dispatch(action) => action,
            };
            pending.extend(reduce(&mut self.state, next.clone(), &self.client));
            completions.push(next);
        }

        completions
    }

    /// Fetch both collections. Either both are replaced or, on the first
    /// failure, neither is and the error is returned.
    pub fn load(&mut self) -> Result<(), TransportError> {
        for action in self.send(Action::Load) {
            if let Action::TargetsFetched(Err(err)) | Action::Loaded(Err(err)) = action {
                return Err(err);
            }
        }
        Ok(())
    }

    pub fn edit_draft<E: Stored>(&mut self, field: Field) {
        self.send(E::into_action(CollectionAction::EditDraft(field)));
    }

    /// POST the current draft of `E`'s collection.
    pub fn create<E: Stored>(&mut self) -> Result<E, StoreError> {
        let completions = self.send(E::into_action(CollectionAction::Submit));
        let result = pick::<E, _>(completions, |action| match action {
            CollectionAction::Created(result) => Some(result),
            _ => None,
        })?;
        Ok(result?)
    }

    /// Open the edit slot on `id`. Returns `false` when `id` is not loaded.
    pub fn begin_edit<E: Stored>(&mut self, id: EntityId) -> bool {
        self.send(E::into_action(CollectionAction::BeginEdit(id)));
        E::collection(&self.state).edit.is_editing(id)
    }

    pub fn edit_field<E: Stored>(&mut self, field: Field) {
        self.send(E::into_action(CollectionAction::EditField(field)));
    }

    pub fn cancel_edit<E: Stored>(&mut self) {
        self.send(E::into_action(CollectionAction::CancelEdit));
    }

    /// PUT the open edit buffer of `E`'s collection.
    pub fn save<E: Stored>(&mut self) -> Result<E, StoreError> {
        let completions = self.send(E::into_action(CollectionAction::Save));
        let result = pick::<E, _>(completions, |action| match action {
            CollectionAction::Updated { result, .. } => Some(result),
            _ => None,
        })?;
        Ok(result?)
    }

    pub fn delete<E: Stored>(&mut self, id: EntityId) -> Result<(), StoreError> {
        let completions = self.send(E::into_action(CollectionAction::Delete(id)));
        let result = pick::<E, _>(completions, |action| match action {
            CollectionAction::Deleted { result, .. } => Some(result),
            _ => None,
        })?;
        Ok(result?)
    }
}

/// First completion of `E`'s collection accepted by `select`.
fn pick<E: Stored, R>(
    completions: Vec<Action>,
    select: impl Fn(CollectionAction<E>) -> Option<R>,
) -> Result<R, StoreError> {
    completions
        .into_iter()
        .filter_map(E::from_action)
        .find_map(select)
        .ok_or(StoreError::NothingSent)
}
