use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use axum_extra::extract::cookie::PrivateCookieJar;

use crate::middleware::flash::{set_notice, take_notice};
use crate::types::forms::ArticleForm;
use crate::views::View;
use crate::{AppError, router::AppState};

pub const DELETED_NOTICE: &str = "Deleted!";

/// GET /articles/new
pub async fn new_article_form() -> View {
    View::new("articles/new")
}

/// POST /articles/create -> redirects to the new article.
pub async fn create_article(
    State(state): State<AppState>,
    Form(form): Form<ArticleForm>,
) -> Result<Redirect, AppError> {
    let saved = state.articles.create(&form).await?;
    Ok(redirect_to_article(saved.id.unwrap_or_default()))
}

/// GET /articles/{id}; a missing article renders with a null `article`.
pub async fn show_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<View, AppError> {
    let article = state.articles.show(id).await?;
    Ok(View::new("articles/show").with("article", article))
}

/// GET /articles, consuming any pending notice.
pub async fn list_articles(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> Result<(PrivateCookieJar, View), AppError> {
    let articles = state.articles.index().await?;
    let (jar, notice) = take_notice(jar);
    let view = View::new("articles/index")
        .with("articleList", articles)
        .with_notice(notice);
    Ok((jar, view))
}

/// GET /articles/{id}/edit
pub async fn edit_article_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<View, AppError> {
    let article = state.articles.edit(id).await?;
    Ok(View::new("articles/edit").with("article", article))
}

/// POST /articles/update -> redirects to the updated article, 404 when it does not exist.
pub async fn update_article(
    State(state): State<AppState>,
    Form(form): Form<ArticleForm>,
) -> Result<Redirect, AppError> {
    let saved = state.articles.update(&form).await?;
    Ok(redirect_to_article(saved.id.unwrap_or_default()))
}

/// GET /articles/{id}/delete -> redirects to the list with a one-time notice.
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: PrivateCookieJar,
) -> Result<(PrivateCookieJar, Redirect), AppError> {
    state.articles.delete(id).await?;
    Ok((set_notice(jar, DELETED_NOTICE), Redirect::to("/articles")))
}

fn redirect_to_article(id: i64) -> Redirect {
    Redirect::to(&format!("/articles/{id}"))
}
