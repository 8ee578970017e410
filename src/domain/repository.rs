use async_trait::async_trait;
use super::todo::{CreateTodo, Todo, TodoId};

#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn find_all(&self) -> anyhow::Result<Vec<Todo>>;
    async fn find_by_id(&self, id: TodoId) -> anyhow::Result<Option<Todo>>;
    // The store assigns the id
    async fn insert(&self, input: CreateTodo) -> anyhow::Result<Todo>;
    async fn save(&self, todo: &Todo) -> anyhow::Result<()>;
    async fn remove(&self, todo: &Todo) -> anyhow::Result<()>;
}
