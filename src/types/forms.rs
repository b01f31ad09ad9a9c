//! Submitted form payloads and their conversion into entities.
//!
//! Fields arrive as raw strings. Text passes through untouched; only the
//! identity is coerced, and an empty identity counts as absent.

use serde::Deserialize;

use crate::db::models::{Article, Member};
use crate::error::AppError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArticleForm {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
}

impl ArticleForm {
    pub fn to_entity(&self) -> Result<Article, AppError> {
        Ok(Article {
            id: parse_identity(self.id.as_deref())?,
            title: self.title.clone(),
            content: self.content.clone(),
        })
    }

    /// Create path: any submitted id is discarded.
    pub fn to_new_entity(&self) -> Article {
        Article::new(self.title.clone(), self.content.clone())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MemberForm {
    pub id: Option<String>,
    pub username: String,
    pub display_name: String,
}

impl MemberForm {
    pub fn to_entity(&self) -> Result<Member, AppError> {
        Ok(Member {
            id: parse_identity(self.id.as_deref())?,
            username: self.username.clone(),
            display_name: self.display_name.clone(),
        })
    }

    pub fn to_new_entity(&self) -> Member {
        Member::new(self.username.clone(), self.display_name.clone())
    }
}

fn parse_identity(raw: Option<&str>) -> Result<Option<i64>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<i64>()
            .map(Some)
            .map_err(|e| AppError::InvalidForm(format!("id `{s}` is not an integer: {e}"))),
    }
}
