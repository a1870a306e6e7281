//! Blog records and request payloads

use serde::{Deserialize, Serialize};

/// A single blog post held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: i32,
    pub title: String,
    pub body: String,
}

impl Blog {
    pub fn new(id: i32, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Body of POST and PUT requests.
///
/// `title` and `body` are required and must not be null. Any `id` sent by
/// the client is accepted but never used: the store assigns ids on create
/// and keeps the path id on update.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogPayload {
    #[serde(default)]
    pub id: Option<i32>,
    pub title: String,
    pub body: String,
}

impl BlogPayload {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Records loaded at startup when seeding is enabled
pub fn seed_blogs() -> Vec<Blog> {
    vec![
        Blog::new(1, "First Blog", "This is the content of the first blog."),
        Blog::new(2, "Second Blog", "This is the content of the second blog."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_ignores_client_id() {
        let payload: BlogPayload =
            serde_json::from_str(r#"{"id": 42, "title": "A", "body": "B"}"#).unwrap();
        assert_eq!(payload.id, Some(42));
        assert_eq!(payload.title, "A");
        assert_eq!(payload.body, "B");
    }

    #[test]
    fn test_payload_requires_title_and_body() {
        assert!(serde_json::from_str::<BlogPayload>(r#"{"title": "A"}"#).is_err());
        assert!(serde_json::from_str::<BlogPayload>(r#"{"body": "B"}"#).is_err());
        assert!(serde_json::from_str::<BlogPayload>(r#"{"title": null, "body": "B"}"#).is_err());
    }

    #[test]
    fn test_blog_json_shape() {
        let json = serde_json::to_value(Blog::new(7, "T", "B")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "title": "T", "body": "B"}));
    }
}
