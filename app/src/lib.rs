//! Terminal host for `todo-core`.
//!
//! # Overview
//! Supplies the pieces the core leaves to its host: a ureq [`Transport`],
//! configuration, and a line-command front end. Each command maps onto one
//! store operation; afterwards the host re-renders the view.
//!
//! Failed operations are silent for the user. The core logs them.

pub mod command;
pub mod config;
pub mod transport;

use todo_core::{Store, Stored, Target, Todo, Transport};
use tracing::debug;

use command::{Command, Intent};

/// What the host should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Render,
    Help,
    Quit,
}

pub fn execute<T: Transport>(store: &mut Store<T>, command: Command) -> Flow {
    match command {
        Command::Load => {
            if let Err(err) = store.load() {
                debug!(error = %err, "load failed");
            }
            Flow::Render
        }
        Command::Show => Flow::Render,
        Command::Help => Flow::Help,
        Command::Quit => Flow::Quit,
        Command::Target(intent) => {
            apply::<Target, T>(store, intent);
            Flow::Render
        }
        Command::Todo(intent) => {
            apply::<Todo, T>(store, intent);
            Flow::Render
        }
    }
}

fn apply<E: Stored, T: Transport>(store: &mut Store<T>, intent: Intent) {
    let outcome = match intent {
        Intent::Draft(field) => {
            store.edit_draft::<E>(field);
            Ok(())
        }
        Intent::Add => store.create::<E>().map(drop),
        Intent::Edit(id) => {
            if !store.begin_edit::<E>(id) {
                debug!(id, "no such record to edit");
            }
            Ok(())
        }
        Intent::Set(field) => {
            store.edit_field::<E>(field);
            Ok(())
        }
        Intent::Save => store.save::<E>().map(drop),
        Intent::Cancel => {
            store.cancel_edit::<E>();
            Ok(())
        }
        Intent::Delete(id) => store.delete::<E>(id),
    };
    if let Err(err) = outcome {
        debug!(resource = %E::RESOURCE, error = %err, "command had no effect");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use todo_core::{ApiClient, HttpMethod, HttpRequest, HttpResponse, TransportError};

    use super::*;
    use crate::command::parse;

    struct Canned {
        responses: RefCell<VecDeque<HttpResponse>>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl Transport for Canned {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.seen.borrow_mut().push(request.clone());
            self.responses
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| TransportError::Connection("no response".to_string()))
        }
    }

    fn store(bodies: &[(u16, &str)]) -> Store<Canned> {
        let responses = bodies
            .iter()
            .map(|(status, body)| HttpResponse {
                status: *status,
                headers: Vec::new(),
                body: body.to_string(),
            })
            .collect();
        Store::new(
            ApiClient::new("http://api.test"),
            Canned {
                responses: RefCell::new(responses),
                seen: RefCell::new(Vec::new()),
            },
        )
    }

    fn run(store: &mut Store<Canned>, line: &str) -> Flow {
        execute(store, parse(line).unwrap())
    }

    #[test]
    fn commands_drive_a_create() {
        let mut store = store(&[(
            201,
            r#"{"id":1,"title":"Groceries","description":"Weekly shop","isComplete":false,"todos":[]}"#,
        )]);
        run(&mut store, "target title Groceries");
        run(&mut store, "target desc Weekly shop");
        assert_eq!(run(&mut store, "target add"), Flow::Render);

        assert_eq!(store.state().targets.items[0].title, "Groceries");
        let seen = store.transport().seen.borrow();
        assert_eq!(seen[0].method, HttpMethod::Post);
        assert!(seen[0].body.as_deref().unwrap().contains("Weekly shop"));
    }

    #[test]
    fn failed_command_is_silent() {
        let mut store = store(&[]);
        run(&mut store, "todo title Buy milk");
        assert_eq!(run(&mut store, "todo add"), Flow::Render);
        assert!(store.state().todos.items.is_empty());
        assert_eq!(store.state().todos.draft.title, "Buy milk");
    }

    #[test]
    fn quit_and_help_flow() {
        let mut store = store(&[]);
        assert_eq!(run(&mut store, "quit"), Flow::Quit);
        assert_eq!(run(&mut store, "help"), Flow::Help);
        assert_eq!(run(&mut store, "todo save"), Flow::Render);
        assert!(store.transport().seen.borrow().is_empty());
    }
}
