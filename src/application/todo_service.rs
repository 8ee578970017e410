use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, Todo, TodoId};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Todo>>;
    async fn get(&self, id: TodoId) -> Result<Option<Todo>>;
    async fn create(&self, input: CreateTodo) -> Result<Todo>;
    async fn update(&self, id: TodoId, candidate: Todo) -> Result<Option<Todo>>;
    async fn delete(&self, id: TodoId) -> Result<bool>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn list(&self) -> Result<Vec<Todo>> { self.repo.find_all().await }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>> { self.repo.find_by_id(id).await }

    async fn create(&self, input: CreateTodo) -> Result<Todo> { self.repo.insert(input).await }

    async fn update(&self, id: TodoId, candidate: Todo) -> Result<Option<Todo>> {
        let Some(mut existing) = self.repo.find_by_id(id).await? else { return Ok(None) };
        // Only title and the completion flag are mutable; the stored id stays
        existing.title = candidate.title;
        existing.is_completed = candidate.is_completed;
        self.repo.save(&existing).await?;
        Ok(Some(existing))
    }

    async fn delete(&self, id: TodoId) -> Result<bool> {
        let Some(todo) = self.repo.find_by_id(id).await? else { return Ok(false) };
        self.repo.remove(&todo).await?;
        Ok(true)
    }
}
