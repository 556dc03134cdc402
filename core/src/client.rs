//! Stateless HTTP request builder and response parser for the Targets / Todo
//! API.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! [`ApiClient::complete`] joins the two halves for the reducer: it parses a
//! finished round trip into the completion action named by a [`Completion`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::action::{Action, CollectionAction, Completion, Snapshot};
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::state::Stored;
use crate::types::{EntityId, Resource, Target, Todo};

/// Synchronous, stateless client for the Targets / Todo API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list(&self, resource: Resource) -> HttpRequest {
        self.request(HttpMethod::Get, self.collection_url(resource), None)
    }

    pub fn build_create<P: Serialize>(
        &self,
        resource: Resource,
        payload: &P,
    ) -> Result<HttpRequest, TransportError> {
        let body = encode(payload)?;
        Ok(self.request(HttpMethod::Post, self.collection_url(resource), Some(body)))
    }

    /// PUT the full record. The server's response, not `entity`, is what
    /// ends up in local state.
    pub fn build_update<E: Serialize>(
        &self,
        resource: Resource,
        id: EntityId,
        entity: &E,
    ) -> Result<HttpRequest, TransportError> {
        let body = encode(entity)?;
        Ok(self.request(HttpMethod::Put, self.item_url(resource, id), Some(body)))
    }

    pub fn build_delete(&self, resource: Resource, id: EntityId) -> HttpRequest {
        self.request(HttpMethod::Delete, self.item_url(resource, id), None)
    }

    pub fn parse_list<E: DeserializeOwned>(&self, response: HttpResponse) -> Result<Vec<E>, TransportError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_entity<E: DeserializeOwned>(&self, response: HttpResponse) -> Result<E, TransportError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), TransportError> {
        check_status(&response)
    }

    /// Turn the outcome of an executed effect into its completion action.
    pub fn complete(
        &self,
        completion: Completion,
        outcome: Result<HttpResponse, TransportError>,
    ) -> Action {
        let (resource, change) = match completion {
            Completion::LoadTargets => {
                return Action::TargetsFetched(outcome.and_then(|r| self.parse_list(r)));
            }
            Completion::LoadTodos(targets) => {
                let todos = outcome.and_then(|r| self.parse_list(r));
                return Action::Loaded(todos.map(|todos| Snapshot { targets, todos }));
            }
            Completion::Created(resource) => (resource, Change::Created),
            Completion::Updated(resource, id) => (resource, Change::Updated(id)),
            Completion::Deleted(resource, id) => (resource, Change::Deleted(id)),
        };
        match resource {
            Resource::Targets => self.finish::<Target>(change, outcome),
            Resource::Todos => self.finish::<Todo>(change, outcome),
        }
    }

    fn finish<E: Stored>(&self, change: Change, outcome: Result<HttpResponse, TransportError>) -> Action {
        let action = match change {
            Change::Created => CollectionAction::Created(outcome.and_then(|r| self.parse_entity(r))),
            Change::Updated(id) => CollectionAction::Updated {
                id,
                result: outcome.and_then(|r| self.parse_entity(r)),
            },
            Change::Deleted(id) => CollectionAction::Deleted {
                id,
                result: outcome.and_then(|r| self.parse_delete(r)),
            },
        };
        E::into_action(action)
    }

    fn collection_url(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    fn item_url(&self, resource: Resource, id: EntityId) -> String {
        format!("{}/{}/{id}", self.base_url, resource.path())
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        }
    }
}

/// A write to one collection, as named by its [`Completion`].
#[derive(Debug, Clone, Copy)]
enum Change {
    Created,
    Updated(EntityId),
    Deleted(EntityId),
}

/// Any 2xx is success; everything else becomes `TransportError::Status`.
fn check_status(response: &HttpResponse) -> Result<(), TransportError> {
    if response.is_success() {
        return Ok(());
    }
    Err(TransportError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

fn encode<T: Serialize>(value: &T) -> Result<String, TransportError> {
    serde_json::to_string(value).map_err(|e| TransportError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))
}
