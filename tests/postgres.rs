//! Runs against a live database only when `TEST_DATABASE_URL` is set.

mod common;

use axum::{
    http::{Method, StatusCode},
    Router,
};
use common::send;
use cursos_api::{
    apply_migrations, build_app, connect, ensure_database_exists, registry, AppState, Settings,
};
use serde_json::json;

async fn postgres_app() -> Option<Router> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let settings = Settings {
        database_url: url,
        ..Settings::default()
    };
    ensure_database_exists(&settings.database_url).await.unwrap();
    let pool = connect(&settings).await.unwrap();
    apply_migrations(&pool, registry()).await.unwrap();
    Some(build_app(AppState::postgres(pool), &settings))
}

// Single entry point: table creation is not safe to run from parallel tests.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn crud_on_postgres() {
    let Some(app) = postgres_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    course_lifecycle(&app).await;
    user_limits_and_readiness(&app).await;
    concurrent_writes_never_fail(&app).await;
}

async fn course_lifecycle(app: &Router) {
    let app = app.clone();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/cursos/",
        Some(json!({"titulo": "Bancos de Dados", "aulas": 10, "horas": 40})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let item = format!("/api/v1/cursos/{}", created["id"]);

    let (status, fetched) = send(&app, Method::GET, &item, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, list) = send(&app, Method::GET, "/api/v1/cursos/", None).await;
    assert!(list.as_array().unwrap().iter().any(|c| c == &created));

    let (status, updated) = send(
        &app,
        Method::PUT,
        &item,
        Some(json!({"titulo": "Bancos de Dados II", "aulas": "12", "horas": 48})),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(updated["titulo"], "Bancos de Dados II");
    assert_eq!(updated["aulas"], 12);
    assert_eq!(updated["id"], created["id"]);

    assert_eq!(send(&app, Method::DELETE, &item, None).await.0, StatusCode::NO_CONTENT);
    let (status, body) = send(&app, Method::GET, &item, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Curso não encontrado.");
    assert_eq!(send(&app, Method::DELETE, &item, None).await.0, StatusCode::NOT_FOUND);
}

async fn user_limits_and_readiness(app: &Router) {
    let app = app.clone();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/usuarios/",
        Some(json!({"nome": "Ana", "email": "ana@example.com", "senha": "123456789"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/usuarios/",
        Some(json!({"nome": "Ana", "email": "ana@example.com", "senha": "12345678"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["senha"], "12345678");

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");

    let item = format!("/api/v1/usuarios/{}", created["id"]);
    assert_eq!(send(&app, Method::DELETE, &item, None).await.0, StatusCode::NO_CONTENT);
}

/// Interleaved deletes and updates on one row: each request either wins or sees 404.
async fn concurrent_writes_never_fail(app: &Router) {
    for round in 0..10 {
        let (status, created) = send(
            app,
            Method::POST,
            "/api/v1/cursos/",
            Some(json!({"titulo": format!("Concorrência {}", round), "aulas": 1, "horas": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let item = format!("/api/v1/cursos/{}", created["id"]);

        let tasks: Vec<_> = (0..10)
            .map(|n| {
                let app = app.clone();
                let item = item.clone();
                tokio::spawn(async move {
                    if n % 2 == 0 {
                        send(&app, Method::DELETE, &item, None).await.0
                    } else {
                        let body = json!({"titulo": "Atualizado", "aulas": n, "horas": n});
                        send(&app, Method::PUT, &item, Some(body)).await.0
                    }
                })
            })
            .collect();

        let mut deleted = 0;
        for task in tasks {
            let status = task.await.unwrap();
            assert!(
                [StatusCode::ACCEPTED, StatusCode::NO_CONTENT, StatusCode::NOT_FOUND].contains(&status),
                "unexpected status {}",
                status
            );
            if status == StatusCode::NO_CONTENT {
                deleted += 1;
            }
        }
        assert_eq!(deleted, 1);
        assert_eq!(send(app, Method::GET, &item, None).await.0, StatusCode::NOT_FOUND);
    }
}
