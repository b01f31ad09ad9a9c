use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};

use crate::types::forms::MemberForm;
use crate::views::View;
use crate::{AppError, router::AppState};

/// GET /signup
pub async fn new_member_form() -> View {
    View::new("members/new")
}

/// POST /join -> redirects to the new member.
pub async fn join(
    State(state): State<AppState>,
    Form(form): Form<MemberForm>,
) -> Result<Redirect, AppError> {
    let saved = state.members.join(&form).await?;
    Ok(redirect_to_member(saved.id.unwrap_or_default()))
}

pub async fn show_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<View, AppError> {
    let member = state.members.show(id).await?;
    Ok(View::new("members/show").with("member", member))
}

pub async fn list_members(State(state): State<AppState>) -> Result<View, AppError> {
    let members = state.members.index().await?;
    Ok(View::new("members/index").with("memberList", members))
}

pub async fn edit_member_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<View, AppError> {
    let member = state.members.edit(id).await?;
    Ok(View::new("members/edit").with("member", member))
}

pub async fn update_member(
    State(state): State<AppState>,
    Form(form): Form<MemberForm>,
) -> Result<Redirect, AppError> {
    let saved = state.members.update(&form).await?;
    Ok(redirect_to_member(saved.id.unwrap_or_default()))
}

fn redirect_to_member(id: i64) -> Redirect {
    Redirect::to(&format!("/members/{id}"))
}
