mod common;

use axum::http::{StatusCode, header};
use common::{TestApp, json_body, location};
use firstproject::db::{Article, CrudRepository, SqliteArticleRepository};

#[tokio::test]
async fn article_lifecycle_over_http() {
    let t = TestApp::spawn("article-lifecycle").await;

    let resp = t.post_form("/articles/create", "title=A&content=B").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/articles/1");

    let view = json_body(t.get("/articles/1").await).await;
    assert_eq!(view["template"], "articles/show");
    assert_eq!(view["model"]["article"]["id"], 1);
    assert_eq!(view["model"]["article"]["title"], "A");
    assert_eq!(view["model"]["article"]["content"], "B");

    let resp = t
        .post_form("/articles/update", "id=1&title=A2&content=B2")
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/articles/1");

    let view = json_body(t.get("/articles/1/edit").await).await;
    assert_eq!(view["template"], "articles/edit");
    assert_eq!(view["model"]["article"]["title"], "A2");
    assert_eq!(view["model"]["article"]["content"], "B2");

    let resp = t.get("/articles/1/delete").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/articles");

    let view = json_body(t.get("/articles/1").await).await;
    assert!(view["model"]["article"].is_null());

    let view = json_body(t.get("/articles").await).await;
    assert_eq!(view["model"]["articleList"], serde_json::json!([]));
}

#[tokio::test]
async fn update_of_missing_article_is_404_and_writes_nothing() {
    let t = TestApp::spawn("article-update-missing").await;

    let resp = t
        .post_form("/articles/update", "id=999&title=x&content=y")
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let repo = SqliteArticleRepository::new(t.pool.clone());
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_of_missing_article_is_404() {
    let t = TestApp::spawn("article-delete-missing").await;

    let resp = t.get("/articles/5/delete").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn delete_notice_is_shown_once() {
    let t = TestApp::spawn("article-notice").await;
    t.post_form("/articles/create", "title=A&content=B").await;

    let resp = t.get("/articles/1/delete").await;
    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("delete should set the notice cookie")
        .to_string();
    let cookie = set_cookie.split(';').next().unwrap();
    assert!(cookie.starts_with("msg="));

    let resp = t.get_with_cookie("/articles", Some(cookie)).await;
    let cleared = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("list should clear the notice cookie")
        .to_string();
    assert!(cleared.starts_with("msg="));
    let view = json_body(resp).await;
    assert_eq!(view["notice"], "Deleted!");

    let view = json_body(t.get("/articles").await).await;
    assert!(view.get("notice").is_none());
}

#[tokio::test]
async fn list_contains_each_surviving_article_once() {
    let t = TestApp::spawn("article-list").await;
    for title in ["one", "two", "three"] {
        t.post_form("/articles/create", &format!("title={title}&content=c"))
            .await;
    }
    t.get("/articles/2/delete").await;

    let view = json_body(t.get("/articles").await).await;
    let titles: Vec<_> = view["model"]["articleList"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["one", "three"]);
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let t = TestApp::spawn("article-create-id").await;

    let resp = t
        .post_form("/articles/create", "id=77&title=A&content=B")
        .await;
    assert_eq!(location(&resp), "/articles/1");

    let repo = SqliteArticleRepository::new(t.pool.clone());
    assert_eq!(repo.find_by_id(77).await.unwrap(), None);
}

#[tokio::test]
async fn non_integer_id_in_form_is_400() {
    let t = TestApp::spawn("article-bad-id").await;

    let resp = t
        .post_form("/articles/update", "id=abc&title=x&content=y")
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["error"]["code"], "INVALID_FORM");
}

#[tokio::test]
async fn new_form_renders_template() {
    let t = TestApp::spawn("article-new").await;
    let view = json_body(t.get("/articles/new").await).await;
    assert_eq!(view["template"], "articles/new");
}

#[tokio::test]
async fn sqlite_save_on_unknown_id_is_not_found() {
    let t = TestApp::spawn("article-repo").await;
    let repo = SqliteArticleRepository::new(t.pool.clone());

    let saved = repo.save(Article::new("A", "B")).await.unwrap();
    assert_eq!(saved.id, Some(1));

    let ghost = Article {
        id: Some(999),
        ..Article::new("x", "y")
    };
    assert!(repo.save(ghost).await.unwrap_err().is_not_found());
    assert_eq!(repo.find_all().await.unwrap(), vec![saved]);
}
