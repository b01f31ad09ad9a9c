use crate::db::models::{Entity, Member};
use crate::db::repository::CrudRepository;
use crate::error::AppError;
use crate::types::forms::MemberForm;
use std::sync::Arc;
use tracing::info;

/// Member use cases. Members are never deleted through the web surface.
#[derive(Clone)]
pub struct MemberService {
    repo: Arc<dyn CrudRepository<Member>>,
}

impl MemberService {
    pub fn new(repo: Arc<dyn CrudRepository<Member>>) -> Self {
        Self { repo }
    }

    pub async fn join(&self, form: &MemberForm) -> Result<Member, AppError> {
        info!(?form, "create member");
        let saved = self.repo.save(form.to_new_entity()).await?;
        info!(?saved, "member saved");
        Ok(saved)
    }

    pub async fn show(&self, id: i64) -> Result<Option<Member>, AppError> {
        info!(id, "show member");
        self.repo.find_by_id(id).await
    }

    pub async fn index(&self) -> Result<Vec<Member>, AppError> {
        self.repo.find_all().await
    }

    pub async fn edit(&self, id: i64) -> Result<Option<Member>, AppError> {
        self.repo.find_by_id(id).await
    }

    pub async fn update(&self, form: &MemberForm) -> Result<Member, AppError> {
        info!(?form, "update member");
        let member = form.to_entity()?;
        let id = member.id.ok_or(AppError::MissingIdentity)?;

        if self.repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found(Member::NAME, id));
        }
        self.repo.save(member).await
    }
}
