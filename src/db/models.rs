use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted row type with a store-assigned integer identity.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Singular name used in logs and not-found errors.
    const NAME: &'static str;

    fn id(&self) -> Option<i64>;

    fn with_id(self, id: i64) -> Self;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Article {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
}

impl Article {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
        }
    }
}

impl Entity for Article {
    const NAME: &'static str = "article";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Member {
    pub id: Option<i64>,
    pub username: String,
    pub display_name: String,
}

impl Member {
    pub fn new(username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            display_name: display_name.into(),
        }
    }
}

impl Entity for Member {
    const NAME: &'static str = "member";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
