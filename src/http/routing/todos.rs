use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::application::todo_service::TodoService;
use crate::domain::todo::{CreateTodo, Todo, TodoId};
use crate::http::types::ApiError;

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", post(create_todo::<S>).get(list_todos::<S>))
        .route("/todos/:id", get(get_todo::<S>).put(update_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.service.list().await?;
    Ok(Json(todos))
}

async fn get_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<i64>) -> Result<Json<Todo>, ApiError> {
    match state.service.get(TodoId(id)).await? {
        Some(todo) => Ok(Json(todo)),
        None => Err(ApiError::NotFound),
    }
}

async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, Json(payload): Json<CreateTodo>) -> Result<impl IntoResponse, ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::unprocessable("title must not be empty"));
    }
    let todo = state.service.create(payload).await?;
    let location = format!("/todos/{}", todo.id.0);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(todo)))
}

async fn update_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<i64>, Json(payload): Json<Todo>) -> Result<StatusCode, ApiError> {
    // Reject before the service sees the payload; the stored id is never rewritten
    if payload.id != TodoId(id) {
        return Err(ApiError::bad_request("body id does not match path id"));
    }
    match state.service.update(TodoId(id), payload).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(ApiError::NotFound),
    }
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let deleted = state.service.delete(TodoId(id)).await?;
    if deleted { Ok(StatusCode::NO_CONTENT) } else { Err(ApiError::NotFound) }
}
