use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub is_complete: bool,
    pub todos: Vec<Todo>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub is_complete: bool,
    pub target_id: i64,
}

/// Body of `POST /Targets` and `PUT /Targets/{id}`. Any `id` or `todos` in
/// the body is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// Body of `POST /Todo` and `PUT /Todo/{id}`. Any `id` in the body is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub target_id: i64,
}

/// In-memory tables. Ids are sequential per table and start at 1.
#[derive(Default)]
pub struct Tables {
    targets: BTreeMap<i64, Target>,
    todos: BTreeMap<i64, Todo>,
    last_target_id: i64,
    last_todo_id: i64,
}

impl Tables {
    /// A stored target with the todos that point at it filled in.
    fn target_with_todos(&self, target: &Target) -> Target {
        Target {
            todos: self
                .todos
                .values()
                .filter(|todo| todo.target_id == target.id)
                .cloned()
                .collect(),
            ..target.clone()
        }
    }
}

pub type Db = Arc<RwLock<Tables>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Tables::default()));
    Router::new()
        .route("/Targets", get(list_targets).post(create_target))
        .route(
            "/Targets/{id}",
            get(get_target).put(update_target).delete(delete_target),
        )
        .route("/Todo", get(list_todos).post(create_todo))
        .route("/Todo/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// --- targets ---

async fn list_targets(State(db): State<Db>) -> Json<Vec<Target>> {
    let tables = db.read().await;
    Json(
        tables
            .targets
            .values()
            .map(|target| tables.target_with_todos(target))
            .collect(),
    )
}

async fn create_target(
    State(db): State<Db>,
    Json(input): Json<TargetInput>,
) -> (StatusCode, Json<Target>) {
    let mut tables = db.write().await;
    tables.last_target_id += 1;
    let target = Target {
        id: tables.last_target_id,
        title: input.title,
        description: input.description,
        is_complete: input.is_complete,
        todos: Vec::new(),
    };
    tables.targets.insert(target.id, target.clone());
    tracing::debug!(id = target.id, "target created");
    (StatusCode::CREATED, Json(target))
}

async fn get_target(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Target>, StatusCode> {
    let tables = db.read().await;
    tables
        .targets
        .get(&id)
        .map(|target| Json(tables.target_with_todos(target)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_target(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<TargetInput>,
) -> Result<Json<Target>, StatusCode> {
    let mut tables = db.write().await;
    let target = tables.targets.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    target.title = input.title;
    target.description = input.description;
    target.is_complete = input.is_complete;
    let target = target.clone();
    Ok(Json(tables.target_with_todos(&target)))
}

/// Todos pointing at a deleted target are left as they are.
async fn delete_target(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut tables = db.write().await;
    tables
        .targets
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- todos ---

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let tables = db.read().await;
    Json(tables.todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<TodoInput>,
) -> (StatusCode, Json<Todo>) {
    let mut tables = db.write().await;
    tables.last_todo_id += 1;
    let todo = Todo {
        id: tables.last_todo_id,
        title: input.title,
        description: input.description,
        is_complete: input.is_complete,
        target_id: input.target_id,
    };
    tables.todos.insert(todo.id, todo.clone());
    tracing::debug!(id = todo.id, target_id = todo.target_id, "todo created");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, StatusCode> {
    let tables = db.read().await;
    tables.todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<TodoInput>,
) -> Result<Json<Todo>, StatusCode> {
    let mut tables = db.write().await;
    let todo = tables.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    todo.title = input.title;
    todo.description = input.description;
    todo.is_complete = input.is_complete;
    todo.target_id = input.target_id;
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut tables = db.write().await;
    tables
        .todos
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
