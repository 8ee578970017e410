use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow}, Pool, Row, Sqlite};

use crate::domain::{
    repository::TodoRepository,
    todo::{CreateTodo, Todo, TodoId},
};

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteTodoRepository {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Self { pool: Arc::new(pool) })
    }

    pub async fn init(&self) -> Result<()> {
        // AUTOINCREMENT keeps ids monotonic; a deleted record's id is never handed out again
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                is_completed INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>> {
        let rows = sqlx::query("SELECT id, title, is_completed FROM todos ORDER BY id")
            .fetch_all(&*self.pool)
            .await?;
        Ok(rows.into_iter().map(row_to_todo).collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>> {
        let row = sqlx::query("SELECT id, title, is_completed FROM todos WHERE id = ?1")
            .bind(id.0)
            .fetch_optional(&*self.pool)
            .await?;
        Ok(row.map(row_to_todo))
    }

    async fn insert(&self, input: CreateTodo) -> Result<Todo> {
        let result = sqlx::query("INSERT INTO todos (title, is_completed) VALUES (?1, ?2)")
            .bind(&input.title)
            .bind(input.is_completed)
            .execute(&*self.pool)
            .await?;
        let id = TodoId(result.last_insert_rowid());
        Ok(Todo { id, title: input.title, is_completed: input.is_completed })
    }

    async fn save(&self, todo: &Todo) -> Result<()> {
        sqlx::query("UPDATE todos SET title = ?2, is_completed = ?3 WHERE id = ?1")
            .bind(todo.id.0)
            .bind(&todo.title)
            .bind(todo.is_completed)
            .execute(&*self.pool)
            .await?;
        Ok(())
    }

    async fn remove(&self, todo: &Todo) -> Result<()> {
        sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(todo.id.0)
            .execute(&*self.pool)
            .await?;
        Ok(())
    }
}

fn row_to_todo(row: SqliteRow) -> Todo {
    Todo {
        id: TodoId(row.get("id")),
        title: row.get("title"),
        is_completed: row.get("is_completed"),
    }
}
