use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TodoId(pub i64);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    // Defaults to the unassigned id 0 when a payload omits it
    #[serde(default)]
    pub id: TodoId,
    pub title: String,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_camel_case_fields() {
        let todo = Todo { id: TodoId(1), title: "Test".into(), is_completed: false };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["isCompleted"], false);
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo { id: TodoId(42), title: "Roundtrip".into(), is_completed: true };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn todo_without_id_gets_the_unassigned_id() {
        let todo: Todo = serde_json::from_str(r#"{"title":"No id","isCompleted":true}"#).unwrap();
        assert_eq!(todo.id, TodoId(0));
        assert!(todo.is_completed);
    }

    #[test]
    fn create_todo_defaults_completion_to_false() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(input.title, "Buy milk");
        assert!(!input.is_completed);
    }

    #[test]
    fn create_todo_requires_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"isCompleted":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_todo_ignores_a_client_supplied_id() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"id":99,"title":"Ignore me","isCompleted":false}"#).unwrap();
        assert_eq!(input.title, "Ignore me");
    }
}
