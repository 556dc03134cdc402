//! Client core for the Targets / Todo API.
//!
//! # Overview
//! Keeps a local snapshot of two remote collections (Targets and their
//! child Todos) and mirrors create / update / delete intents onto the API.
//! The core builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). The host supplies a
//! [`Transport`] to the [`Store`].
//!
//! # Design
//! - `AppState` is the only mutable state. It changes only through
//!   [`reduce`], which returns [`Effect`]s for the host to execute.
//! - Committed records change only after the server answers, and always to
//!   the server's copy. Failures are logged and leave state untouched; the
//!   store also returns them as `Result`s.
//! - Each collection has one edit slot, [`EditState`], so "one record open
//!   for editing at a time" holds by construction.
//! - Collections stay sorted by id regardless of completion order.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod action;
pub mod client;
pub mod error;
pub mod http;
pub mod reducer;
pub mod state;
pub mod store;
pub mod transport;
pub mod types;
pub mod view;

pub use action::{Action, CollectionAction, Completion, Effect, Snapshot};
pub use client::ApiClient;
pub use error::{StoreError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use reducer::reduce;
pub use state::{AppState, Collection, EditState, Stored};
pub use store::Store;
pub use transport::Transport;
pub use types::{
    CreateTarget, CreateTodo, Editable, Entity, EntityId, Field, Resource, Target, TargetDraft, Todo,
    TodoDraft, UNASSIGNED,
};
pub use view::{render, View};
