use crate::db::models::{Article, Entity};
use crate::db::repository::CrudRepository;
use crate::error::AppError;
use crate::types::forms::ArticleForm;
use std::sync::Arc;
use tracing::info;

/// Article use cases over an injected repository.
#[derive(Clone)]
pub struct ArticleService {
    repo: Arc<dyn CrudRepository<Article>>,
}

impl ArticleService {
    pub fn new(repo: Arc<dyn CrudRepository<Article>>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, form: &ArticleForm) -> Result<Article, AppError> {
        info!(?form, "create article");
        let article = form.to_new_entity();
        let saved = self.repo.save(article).await?;
        info!(?saved, "article saved");
        Ok(saved)
    }

    pub async fn show(&self, id: i64) -> Result<Option<Article>, AppError> {
        info!(id, "show article");
        self.repo.find_by_id(id).await
    }

    pub async fn index(&self) -> Result<Vec<Article>, AppError> {
        self.repo.find_all().await
    }

    pub async fn edit(&self, id: i64) -> Result<Option<Article>, AppError> {
        self.repo.find_by_id(id).await
    }

    /// Overwrite an existing article with the submitted fields.
    ///
    /// The form is written as-is, not merged with the stored row. A missing
    /// target leaves the store untouched and yields `AppError::NotFound`.
    pub async fn update(&self, form: &ArticleForm) -> Result<Article, AppError> {
        info!(?form, "update article");
        let article = form.to_entity()?;
        let id = article.id.ok_or(AppError::MissingIdentity)?;

        if self.repo.find_by_id(id).await?.is_none() {
            info!(id, "update target missing");
            return Err(AppError::not_found(Article::NAME, id));
        }
        let saved = self.repo.save(article).await?;
        info!(?saved, "article updated");
        Ok(saved)
    }

    /// Remove the article, returning what was deleted.
    pub async fn delete(&self, id: i64) -> Result<Article, AppError> {
        info!(id, "delete article requested");
        let target = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(Article::NAME, id))?;
        self.repo.delete(&target).await?;
        info!(?target, "article deleted");
        Ok(target)
    }
}
