use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use std::sync::Arc;

use crate::db::models::{Article, Member};
use crate::db::repository::CrudRepository;
use crate::db::sqlite::{SqliteArticleRepository, SqliteMemberRepository, SqlitePool};
use crate::handlers::{articles, members};
use crate::service::{ArticleService, MemberService};

#[derive(Clone)]
pub struct AppState {
    pub articles: ArticleService,
    pub members: MemberService,
    cookie_key: Key,
}

impl AppState {
    pub fn new(
        articles: Arc<dyn CrudRepository<Article>>,
        members: Arc<dyn CrudRepository<Member>>,
        cookie_key: Key,
    ) -> Self {
        Self {
            articles: ArticleService::new(articles),
            members: MemberService::new(members),
            cookie_key,
        }
    }

    /// State backed by the SQLite tables in `pool`, with a fresh cookie key.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self::new(
            Arc::new(SqliteArticleRepository::new(pool.clone())),
            Arc::new(SqliteMemberRepository::new(pool)),
            Key::generate(),
        )
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/articles", get(articles::list_articles))
        .route("/articles/new", get(articles::new_article_form))
        .route("/articles/create", post(articles::create_article))
        .route("/articles/update", post(articles::update_article))
        .route("/articles/{id}", get(articles::show_article))
        .route("/articles/{id}/edit", get(articles::edit_article_form))
        .route("/articles/{id}/delete", get(articles::delete_article))
        .route("/signup", get(members::new_member_form))
        .route("/join", post(members::join))
        .route("/members", get(members::list_members))
        .route("/members/update", post(members::update_member))
        .route("/members/{id}", get(members::show_member))
        .route("/members/{id}/edit", get(members::edit_member_form))
        .with_state(state)
}
