//! Domain DTOs for the todo API.
//!
//! # Design
//! Both the server and the client serialize these exact types, so the wire
//! schema has a single definition. Partial updates go through `TodoPatch`,
//! whose fields are `Field<T>` values: a field is either explicitly `Set` or
//! `Unset`, and only `Set` fields are ever written.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single todo item as stored and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub content: String,
    pub done: bool,
}

/// Request payload for creating a new todo.
///
/// The server assigns the id; an `id` key in the JSON is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub content: String,
    #[serde(default)]
    pub done: bool,
}

impl NewTodo {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            done: false,
        }
    }
}

/// A patchable field with explicit presence.
///
/// `Unset` is skipped when serializing a `TodoPatch` and is what a missing
/// JSON key deserializes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Unset,
    Set(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    /// Overwrite `target` if this field is set.
    pub fn apply_to(self, target: &mut T) {
        if let Field::Set(value) = self {
            *target = value;
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Set(value) => value.serialize(serializer),
            Field::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Field::Set)
    }
}

/// Request payload for a partial update. Only `Set` fields are applied;
/// everything else keeps its stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub content: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub done: Field<bool>,
}

impl TodoPatch {
    /// A patch that only replaces `content`.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Field::Set(content.into()),
            done: Field::Unset,
        }
    }

    /// A patch that only replaces `done`.
    pub fn done(done: bool) -> Self {
        Self {
            content: Field::Unset,
            done: Field::Set(done),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_unset() && self.done.is_unset()
    }

    /// Merge this patch onto an existing record. The id is never touched.
    pub fn apply(self, todo: &mut Todo) {
        self.content.apply_to(&mut todo.content);
        self.done.apply_to(&mut todo.done);
    }
}

/// Body of every non-2xx response from the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> Todo {
        Todo {
            id: "1".to_string(),
            content: "buy milk".to_string(),
            done: false,
        }
    }

    #[test]
    fn new_todo_defaults_done_to_false() {
        let input: NewTodo = serde_json::from_str(r#"{"content":"buy milk"}"#).unwrap();
        assert_eq!(input.content, "buy milk");
        assert!(!input.done);
    }

    #[test]
    fn new_todo_rejects_missing_content() {
        let result: Result<NewTodo, _> = serde_json::from_str(r#"{"done":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn patch_missing_keys_are_unset() {
        let patch: TodoPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.content.is_unset());
        assert!(patch.done.is_unset());
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_present_keys_are_set() {
        let patch: TodoPatch = serde_json::from_str(r#"{"done":false}"#).unwrap();
        assert!(patch.content.is_unset());
        assert_eq!(patch.done, Field::Set(false));
    }

    #[test]
    fn patch_rejects_null_values() {
        let result: Result<TodoPatch, _> = serde_json::from_str(r#"{"done":null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let json = serde_json::to_value(TodoPatch::done(true)).unwrap();
        assert_eq!(json, serde_json::json!({ "done": true }));

        let json = serde_json::to_value(TodoPatch::content("walk dog")).unwrap();
        assert_eq!(json, serde_json::json!({ "content": "walk dog" }));
    }

    #[test]
    fn apply_done_keeps_content() {
        let mut todo = milk();
        TodoPatch::done(true).apply(&mut todo);
        assert_eq!(todo.content, "buy milk");
        assert!(todo.done);
        assert_eq!(todo.id, "1");
    }

    #[test]
    fn apply_content_keeps_done() {
        let mut todo = milk();
        todo.done = true;
        TodoPatch::content("buy oat milk").apply(&mut todo);
        assert_eq!(todo.content, "buy oat milk");
        assert!(todo.done);
    }

    #[test]
    fn apply_empty_patch_is_noop() {
        let mut todo = milk();
        TodoPatch::default().apply(&mut todo);
        assert_eq!(todo, milk());
    }
}
