#![allow(clippy::unwrap_used)]

//! End-to-end API tests.
//!
//! Each test spawns the real router on an ephemeral port and talks to it
//! over HTTP — raw `reqwest` where the wire shape matters, the `hili-client`
//! SDK for typed flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use hili_client::{CreateEvent, CreateLink, CreateSocialLink, EventKind, HiliClient, LinkPosition, Platform, UpdateSocialLink};
use hili_server::build_app;
use hili_server::state::AppState;

async fn spawn(state: AppState) -> String {
    let app = build_app(Arc::new(state), None);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_empty() -> String {
    spawn(AppState::empty("ping".to_owned(), None)).await
}

fn parse_ts(value: &Value) -> DateTime<Utc> {
    value.as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn ping_returns_configured_message() {
    let base = spawn(AppState::empty("pong!".to_owned(), None)).await;
    let body: Value = reqwest::get(format!("{base}/api/ping"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "pong!");
}

#[tokio::test]
async fn seeded_state_serves_fixtures() {
    let base = spawn(AppState::seeded("ping".to_owned(), None)).await;
    let client = HiliClient::new(&base).unwrap();

    let events = client.events().await.unwrap();
    assert_eq!(events.len(), 5);
    assert_eq!(events[0].title, "Creator Spotlight Live");

    let links = client.links().await.unwrap();
    let positions: Vec<i64> = links.iter().map(|l| l.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);

    let social = client.social_links().await.unwrap();
    assert_eq!(social.len(), 3);
}

#[tokio::test]
async fn create_event_roundtrip() {
    let base = spawn_empty().await;
    let http = reqwest::Client::new();

    let resp = http
        .post(format!("{base}/api/events"))
        .json(&json!({
            "title": "Launch Party",
            "type": "event",
            "description": "One night only.",
            "tags": ["Live"],
            "ticketUrl": "https://example.com/tickets"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await.unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_owned();
    assert!(!id.is_empty());
    // Defaults applied for omitted optional fields.
    assert_eq!(created["data"]["gradient"], "from-primary/30 to-secondary/20");
    assert_eq!(created["data"]["icon"], "📺");

    let fetched: Value = http
        .get(format!("{base}/api/events/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["data"]["title"], "Launch Party");
    assert_eq!(fetched["data"]["type"], "event");
    assert_eq!(fetched["data"]["tags"], json!(["Live"]));
    assert_eq!(fetched["data"]["ticketUrl"], "https://example.com/tickets");
}

#[tokio::test]
async fn create_event_without_title_is_rejected() {
    let base = spawn_empty().await;
    let http = reqwest::Client::new();

    let resp = http
        .post(format!("{base}/api/events"))
        .json(&json!({"type": "series", "description": "No title"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["error"],
        "Missing required fields: title, type, description"
    );

    // Store length unchanged.
    let list: Value = reqwest::get(format!("{base}/api/events"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn create_event_with_unknown_type_is_rejected() {
    let base = spawn_empty().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/events"))
        .json(&json!({"title": "X", "type": "festival", "description": "Y"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid type 'festival'. Must be one of: series, event");
}

#[tokio::test]
async fn created_event_ids_are_unique() {
    let base = spawn_empty().await;
    let client = HiliClient::new(&base).unwrap();

    let mut ids = std::collections::HashSet::new();
    for i in 0..5 {
        let event = client
            .create_event(CreateEvent::new(format!("Show {i}"), EventKind::Series, "desc"))
            .await
            .unwrap();
        assert!(ids.insert(event.id));
    }
}

#[tokio::test]
async fn partial_update_touches_only_named_fields() {
    let base = spawn_empty().await;
    let http = reqwest::Client::new();

    let created: Value = http
        .post(format!("{base}/api/events"))
        .json(&json!({"title": "Original", "type": "series", "description": "Before"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_owned();
    let first_updated_at = parse_ts(&created["data"]["updatedAt"]);

    let updated: Value = http
        .put(format!("{base}/api/events/{id}"))
        .json(&json!({"description": "After"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["data"]["title"], "Original");
    assert_eq!(updated["data"]["description"], "After");
    assert!(parse_ts(&updated["data"]["updatedAt"]) >= first_updated_at);
}

#[tokio::test]
async fn update_can_clear_ticket_url_with_null() {
    let base = spawn_empty().await;
    let http = reqwest::Client::new();

    let created: Value = http
        .post(format!("{base}/api/events"))
        .json(&json!({
            "title": "T", "type": "event", "description": "D",
            "ticketUrl": "https://example.com/t"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_owned();

    let updated: Value = http
        .put(format!("{base}/api/events/{id}"))
        .json(&json!({"ticketUrl": null}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(updated["data"].get("ticketUrl").is_none());
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let base = spawn_empty().await;
    let client = HiliClient::new(&base).unwrap();

    let event = client
        .create_event(CreateEvent::new("Doomed", EventKind::Event, "bye"))
        .await
        .unwrap();
    let removed = client.delete_event(&event.id).await.unwrap();
    assert_eq!(removed.id, event.id);

    let err = client.event(&event.id).await.unwrap_err();
    assert!(err.is_status(404));
}

#[tokio::test]
async fn unknown_event_id_returns_404_with_error_body() {
    let base = spawn_empty().await;
    let resp = reqwest::get(format!("{base}/api/events/nope")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Event not found");
}

#[tokio::test]
async fn create_link_appends_at_next_position() {
    let base = spawn_empty().await;
    let client = HiliClient::new(&base).unwrap();

    let first = client
        .create_link(CreateLink {
            label: "First".to_owned(),
            url: "https://example.com/1".to_owned(),
            icon: None,
        })
        .await
        .unwrap();
    assert_eq!(first.position, 1);
    assert_eq!(first.icon.as_deref(), Some("🔗"));

    let test = client
        .create_link(CreateLink {
            label: "Test".to_owned(),
            url: "https://t.co".to_owned(),
            icon: None,
        })
        .await
        .unwrap();
    assert_eq!(test.position, 2);

    // The new link comes last when sorted by position.
    let links = client.links().await.unwrap();
    assert_eq!(links.last().unwrap().id, test.id);
}

#[tokio::test]
async fn create_link_requires_label_and_url() {
    let base = spawn_empty().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/links"))
        .json(&json!({"label": "No url"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Missing required fields: label, url");
}

#[tokio::test]
async fn reorder_changes_subsequent_list_order() {
    let base = spawn_empty().await;
    let client = HiliClient::new(&base).unwrap();

    let a = client
        .create_link(CreateLink {
            label: "A".to_owned(),
            url: "https://example.com/a".to_owned(),
            icon: None,
        })
        .await
        .unwrap();
    let b = client
        .create_link(CreateLink {
            label: "B".to_owned(),
            url: "https://example.com/b".to_owned(),
            icon: None,
        })
        .await
        .unwrap();

    let reordered = client
        .reorder_links(vec![
            LinkPosition { id: a.id.clone(), position: 5 },
            LinkPosition { id: b.id.clone(), position: 1 },
        ])
        .await
        .unwrap();
    assert_eq!(reordered[0].id, b.id);
    assert_eq!(reordered[1].id, a.id);

    let listed = client.links().await.unwrap();
    assert_eq!(listed[0].id, b.id);
}

#[tokio::test]
async fn reorder_skips_unknown_ids() {
    let base = spawn_empty().await;
    let client = HiliClient::new(&base).unwrap();

    let a = client
        .create_link(CreateLink {
            label: "A".to_owned(),
            url: "https://example.com/a".to_owned(),
            icon: None,
        })
        .await
        .unwrap();

    let reordered = client
        .reorder_links(vec![
            LinkPosition { id: "ghost".to_owned(), position: 1 },
            LinkPosition { id: a.id.clone(), position: 9 },
        ])
        .await
        .unwrap();
    assert_eq!(reordered.len(), 1);
    assert_eq!(reordered[0].position, 9);
}

#[tokio::test]
async fn reorder_rejects_non_array_body() {
    let base = spawn_empty().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/links/reorder"))
        .json(&json!({"links": "not an array"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Expected array of links with id and position");
}

#[tokio::test]
async fn duplicate_platform_is_rejected_and_store_unchanged() {
    let base = spawn_empty().await;
    let client = HiliClient::new(&base).unwrap();

    client
        .create_social_link(CreateSocialLink {
            platform: Platform::Twitter,
            url: "https://twitter.com/hili".to_owned(),
        })
        .await
        .unwrap();

    let err = client
        .create_social_link(CreateSocialLink {
            platform: Platform::Twitter,
            url: "https://twitter.com/other".to_owned(),
        })
        .await
        .unwrap_err();
    assert!(err.is_status(400));

    let social = client.social_links().await.unwrap();
    assert_eq!(social.len(), 1);
    assert_eq!(social[0].url, "https://twitter.com/hili");
}

#[tokio::test]
async fn invalid_platform_is_rejected() {
    let base = spawn_empty().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/social-media"))
        .json(&json!({"platform": "myspace", "url": "https://myspace.com/hili"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["error"],
        "Invalid platform. Must be one of: twitter, instagram, facebook, tiktok, youtube, linkedin"
    );
}

#[tokio::test]
async fn changing_platform_to_taken_value_is_rejected() {
    let base = spawn_empty().await;
    let client = HiliClient::new(&base).unwrap();

    client
        .create_social_link(CreateSocialLink {
            platform: Platform::Twitter,
            url: "https://twitter.com/hili".to_owned(),
        })
        .await
        .unwrap();
    let yt = client
        .create_social_link(CreateSocialLink {
            platform: Platform::Youtube,
            url: "https://youtube.com/@hili".to_owned(),
        })
        .await
        .unwrap();

    let err = client
        .update_social_link(
            &yt.id,
            UpdateSocialLink {
                platform: Some(Platform::Twitter),
                ..UpdateSocialLink::default()
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_status(400));

    // A url-only update on the same record still works.
    let updated = client
        .update_social_link(
            &yt.id,
            UpdateSocialLink {
                url: Some("https://youtube.com/@hiliproductions".to_owned()),
                ..UpdateSocialLink::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.url, "https://youtube.com/@hiliproductions");
}

#[tokio::test]
async fn admin_token_guards_mutations_but_not_reads() {
    let base = spawn(AppState::empty(
        "ping".to_owned(),
        Some("sekrit".to_owned()),
    ))
    .await;
    let http = reqwest::Client::new();

    // Reads stay public.
    let resp = http.get(format!("{base}/api/events")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    // Mutation without a token is rejected.
    let payload = json!({"title": "T", "type": "series", "description": "D"});
    let resp = http
        .post(format!("{base}/api/events"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    // Wrong token is rejected.
    let resp = http
        .post(format!("{base}/api/events"))
        .bearer_auth("wrong")
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    // Correct token goes through.
    let resp = http
        .post(format!("{base}/api/events"))
        .bearer_auth("sekrit")
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
}
