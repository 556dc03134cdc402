//! Line commands standing in for the form inputs and buttons of the UI.
//!
//! ```text
//! target title Groceries        # type into the new-target form
//! target add                    # press "Add Target"
//! todo for 1                    # pick a target in the new-todo form
//! todo edit 3                   # press "Edit" on todo 3
//! todo set-title Buy oat milk   # type into the open editor
//! todo save
//! ```

use thiserror::Error;
use todo_core::{EntityId, Field};

pub const HELP: &str = "\
commands:
  load | show | help | quit
  target title <text> | desc <text> | add
  target edit <id> | set-title <text> | set-desc <text> | save | cancel | delete <id>
  todo   title <text> | desc <text> | for <target-id> | add
  todo   edit <id> | set-title <text> | set-desc <text> | set-target <target-id> | save | cancel | delete <id>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load,
    Show,
    Help,
    Quit,
    Target(Intent),
    Todo(Intent),
}

/// One gesture on a collection's forms or rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Change a field of the new-record form.
    Draft(Field),
    Add,
    Edit(EntityId),
    /// Change a field of the open editor.
    Set(Field),
    Save,
    Cancel,
    Delete(EntityId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, try `help`")]
    UnknownCommand(String),
    #[error("unknown verb `{0}`, try `help`")]
    UnknownVerb(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(String),
    #[error("`{0}` is not a valid id")]
    InvalidId(String),
    #[error("targets have no `{0}`")]
    NotForTargets(String),
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let (head, rest) = split_word(line.trim());
    match head {
        "" => Err(CommandError::Empty),
        "load" => Ok(Command::Load),
        "show" => Ok(Command::Show),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "target" => parse_intent(rest, false).map(Command::Target),
        "todo" => parse_intent(rest, true).map(Command::Todo),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

fn parse_intent(input: &str, has_target: bool) -> Result<Intent, CommandError> {
    let (verb, arg) = split_word(input);
    let target_only = |verb: &str| {
        if has_target {
            Ok(())
        } else {
            Err(CommandError::NotForTargets(verb.to_string()))
        }
    };

    match verb {
        "" => Err(CommandError::MissingArgument("verb".to_string())),
        "title" => Ok(Intent::Draft(Field::Title(arg.to_string()))),
        "desc" => Ok(Intent::Draft(Field::Description(arg.to_string()))),
        "for" => {
            target_only(verb)?;
            Ok(Intent::Draft(Field::TargetId(parse_id(verb, arg)?)))
        }
        "add" => Ok(Intent::Add),
        "edit" => Ok(Intent::Edit(parse_id(verb, arg)?)),
        "set-title" => Ok(Intent::Set(Field::Title(arg.to_string()))),
        "set-desc" => Ok(Intent::Set(Field::Description(arg.to_string()))),
        "set-target" => {
            target_only(verb)?;
            Ok(Intent::Set(Field::TargetId(parse_id(verb, arg)?)))
        }
        "save" => Ok(Intent::Save),
        "cancel" => Ok(Intent::Cancel),
        "delete" => Ok(Intent::Delete(parse_id(verb, arg)?)),
        other => Err(CommandError::UnknownVerb(other.to_string())),
    }
}

fn parse_id(verb: &str, arg: &str) -> Result<EntityId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(verb.to_string()));
    }
    arg.parse().map_err(|_| CommandError::InvalidId(arg.to_string()))
}

/// First whitespace-separated word and the trimmed remainder.
fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}
