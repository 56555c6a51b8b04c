mod common;

use anyhow::Result;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

fn error_messages(body: &Value) -> Vec<(String, String, String)> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .map(|e| {
                    (
                        e["location"].as_str().unwrap_or_default().to_string(),
                        e["field"].as_str().unwrap_or_default().to_string(),
                        e["message"].as_str().unwrap_or_default().to_string(),
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

fn issue(location: &str, field: &str, message: &str) -> (String, String, String) {
    (location.to_string(), field.to_string(), message.to_string())
}

#[tokio::test]
async fn create_missing_fields_is_rejected_before_store() -> Result<()> {
    let server = common::spawn_server().await?;

    let cases = vec![
        (json!({"content": "c"}), vec![issue("body", "title", "Title is required.")]),
        (json!({"title": "t"}), vec![issue("body", "content", "Content is required.")]),
        (
            json!({}),
            vec![
                issue("body", "title", "Title is required."),
                issue("body", "content", "Content is required."),
            ],
        ),
        (
            json!({"title": "", "content": ""}),
            vec![
                issue("body", "title", "Title is required."),
                issue("body", "content", "Content is required."),
            ],
        ),
    ];

    for (payload, expected) in cases {
        let res = server
            .authed(Method::POST, server.posts_url())
            .json(&payload)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload {}", payload);

        let body = res.json::<Value>().await?;
        assert_eq!(body["success"], json!(false));
        assert_eq!(error_messages(&body), expected, "payload {}", payload);
    }

    assert_eq!(server.repository.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn create_with_empty_body_reports_required_fields() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.authed(Method::POST, server.posts_url()).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(
        error_messages(&body),
        vec![
            issue("body", "title", "Title is required."),
            issue("body", "content", "Content is required."),
        ]
    );
    assert_eq!(server.repository.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn published_must_be_boolean() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .authed(Method::POST, server.posts_url())
        .json(&json!({"title": "t", "content": "c", "published": "yes"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(
        error_messages(&body),
        vec![issue("body", "published", "Published must be a boolean.")]
    );
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_rejected() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .authed(Method::POST, server.posts_url())
        .header("Content-Type", "application/json")
        .body("{\"title\": ")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        error_messages(&body),
        vec![issue("body", "", "Request body must be valid JSON.")]
    );
    assert_eq!(server.repository.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn malformed_json_does_not_hide_params_issues() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .authed(Method::PUT, server.post_url("123"))
        .header("Content-Type", "application/json")
        .body("{\"title\": ")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(
        error_messages(&body),
        vec![
            issue("params", "postId", "Post ID is required."),
            issue("body", "", "Request body must be valid JSON."),
        ]
    );
    assert_eq!(server.repository.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn post_id_must_carry_uuid_version_and_variant() -> Result<()> {
    let server = common::spawn_server().await?;

    for id in [
        "6f1c2b8e-1d2a-0c55-9a0f-0b5e7d1f2a3c",
        "6f1c2b8e-1d2a-4c55-7a0f-0b5e7d1f2a3c",
    ] {
        let res = server.authed(Method::DELETE, server.post_url(id)).send().await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{} accepted", id);
        let body = res.json::<Value>().await?;
        assert_eq!(
            error_messages(&body),
            vec![issue("params", "postId", "Post ID is required.")]
        );
    }
    assert_eq!(server.repository.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn update_reports_params_and_body_together() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .authed(Method::PUT, server.post_url("123"))
        .json(&json!({"content": "c"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(
        error_messages(&body),
        vec![
            issue("params", "postId", "Post ID is required."),
            issue("body", "title", "Title is required."),
        ]
    );
    assert_eq!(server.repository.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn invalid_post_ids_are_rejected_before_store() -> Result<()> {
    let server = common::spawn_server().await?;

    for bad_id in ["1", "not-a-uuid", "6f1c2b8e1d2a4c559a0f0b5e7d1f2a3c"] {
        let res = server
            .authed(Method::PUT, server.post_url(bad_id))
            .json(&json!({"title": "t", "content": "c"}))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "update {}", bad_id);
        let body = res.json::<Value>().await?;
        assert_eq!(
            error_messages(&body),
            vec![issue("params", "postId", "Post ID is required.")]
        );

        let res = server.authed(Method::DELETE, server.post_url(bad_id)).send().await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "delete {}", bad_id);
    }

    assert_eq!(server.repository.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn delete_ignores_request_body() -> Result<()> {
    let server = common::spawn_server().await?;
    let id = Uuid::new_v4();

    // The body is not part of the delete schema, even when it is not JSON
    let res = server
        .authed(Method::DELETE, server.post_url(id))
        .body("definitely not json")
        .send()
        .await?;

    // Passed validation and reached the store, which does not know the id
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(server.repository.calls(), 1);
    Ok(())
}
