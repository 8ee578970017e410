#[cfg(test)]
mod tests {
    use super::super::todo_service::{TodoService, TodoServiceImpl};
    use crate::domain::{repository::TodoRepository, todo::{CreateTodo, Todo, TodoId}};
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicI64, Ordering};

    #[derive(Clone, Default)]
    struct InMemoryRepo {
        items: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<i64, Todo>>>,
        next_id: std::sync::Arc<AtomicI64>,
    }

    #[async_trait]
    impl TodoRepository for InMemoryRepo {
        async fn find_all(&self) -> Result<Vec<Todo>> {
            Ok(self.items.lock().unwrap().values().cloned().collect())
        }
        async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>> {
            Ok(self.items.lock().unwrap().get(&id.0).cloned())
        }
        async fn insert(&self, input: CreateTodo) -> Result<Todo> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let todo = Todo { id: TodoId(id), title: input.title, is_completed: input.is_completed };
            self.items.lock().unwrap().insert(id, todo.clone());
            Ok(todo)
        }
        async fn save(&self, todo: &Todo) -> Result<()> {
            self.items.lock().unwrap().insert(todo.id.0, todo.clone());
            Ok(())
        }
        async fn remove(&self, todo: &Todo) -> Result<()> {
            self.items.lock().unwrap().remove(&todo.id.0);
            Ok(())
        }
    }

    fn service() -> TodoServiceImpl<InMemoryRepo> {
        TodoServiceImpl::new(InMemoryRepo::default())
    }

    #[tokio::test]
    async fn create_assigns_an_id_and_persists() {
        let service = service();
        let created = service.create(CreateTodo { title: "X".into(), is_completed: false }).await.unwrap();
        assert_ne!(created.id, TodoId(0));
        let got = service.get(created.id).await.unwrap().unwrap();
        assert_eq!(got, created);
    }

    #[tokio::test]
    async fn create_accepts_an_empty_title() {
        // Title validation belongs to the HTTP boundary, not the service
        let service = service();
        let created = service.create(CreateTodo { title: String::new(), is_completed: false }).await.unwrap();
        assert_eq!(created.title, "");
    }

    #[tokio::test]
    async fn get_returns_none_for_an_absent_id() {
        let service = service();
        assert!(service.get(TodoId(999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_returns_every_record() {
        let service = service();
        assert!(service.list().await.unwrap().is_empty());
        service.create(CreateTodo { title: "A".into(), is_completed: false }).await.unwrap();
        service.create(CreateTodo { title: "B".into(), is_completed: true }).await.unwrap();
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_overwrites_title_and_completion() {
        let service = service();
        let created = service.create(CreateTodo { title: "Old".into(), is_completed: false }).await.unwrap();
        let candidate = Todo { id: created.id, title: "New".into(), is_completed: true };
        let updated = service.update(created.id, candidate).await.unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "New");
        assert!(updated.is_completed);
        assert_eq!(service.get(created.id).await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn update_keeps_the_stored_id_whatever_the_candidate_carries() {
        let service = service();
        let created = service.create(CreateTodo { title: "Keep".into(), is_completed: false }).await.unwrap();
        let candidate = Todo { id: TodoId(999), title: "Renamed".into(), is_completed: true };
        let updated = service.update(created.id, candidate).await.unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert!(service.get(TodoId(999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_of_an_absent_id_is_a_no_op() {
        let service = service();
        service.create(CreateTodo { title: "Only".into(), is_completed: false }).await.unwrap();
        let candidate = Todo { id: TodoId(999), title: "Ghost".into(), is_completed: true };
        assert!(service.update(TodoId(999), candidate).await.unwrap().is_none());
        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Only");
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let service = service();
        let created = service.create(CreateTodo { title: "Gone".into(), is_completed: false }).await.unwrap();
        assert!(service.delete(created.id).await.unwrap());
        assert!(service.get(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_of_an_absent_id_returns_false_without_mutation() {
        let service = service();
        service.create(CreateTodo { title: "Stays".into(), is_completed: false }).await.unwrap();
        assert!(!service.delete(TodoId(999)).await.unwrap());
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn second_delete_returns_false() {
        let service = service();
        let created = service.create(CreateTodo { title: "Once".into(), is_completed: false }).await.unwrap();
        assert!(service.delete(created.id).await.unwrap());
        assert!(!service.delete(created.id).await.unwrap());
    }
}
