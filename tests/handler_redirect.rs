mod common;

use shorten_me::domain::repositories::LinkStore;
use std::collections::HashSet;

#[tokio::test]
async fn test_redirect_round_trip() {
    let (server, _store) = common::create_test_server();

    let created = server
        .post("/create")
        .add_header("Host", common::HOST)
        .add_header("Origin", common::ORIGIN)
        .form(&[("url", "https://example.com/target?q=1")])
        .await;
    created.assert_status_ok();

    let short_url = common::extract_short_url(&created.text());
    let path = short_url.strip_prefix("http://s.example.com").unwrap();

    let response = server.get(path).add_header("Host", common::HOST).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target?q=1");
}

#[tokio::test]
async fn test_distinct_urls_resolve_to_their_own_target() {
    let (server, store) = common::create_test_server();
    let mut created = Vec::new();

    for i in 0..10 {
        let target = format!("https://example.com/p{}", i);
        let response = server
            .post("/create")
            .add_header("Host", common::HOST)
            .add_header("Origin", common::ORIGIN)
            .form(&[("url", target.as_str())])
            .await;
        response.assert_status_ok();

        let short_url = common::extract_short_url(&response.text());
        let key = short_url
            .strip_prefix("http://s.example.com/")
            .unwrap()
            .to_string();
        created.push((key, target));
    }

    let keys: HashSet<_> = created.iter().map(|(key, _)| key.clone()).collect();
    assert_eq!(keys.len(), created.len());
    assert_eq!(store.len(), created.len());

    for (key, target) in &created {
        let response = server.get(&format!("/{}", key)).await;

        assert_eq!(response.status_code(), 302);
        assert_eq!(response.header("location"), target.as_str());
    }
}

#[tokio::test]
async fn test_redirect_stored_link() {
    let (server, store) = common::create_test_server();
    store
        .put_if_absent("abc123", "https://example.com/stored")
        .await
        .unwrap();

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/stored");
}

#[tokio::test]
async fn test_redirect_unknown_key_goes_home() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/ffffff").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_redirect_key_outside_hex_goes_home() {
    let (server, _store) = common::create_test_server();

    // Matches the route pattern but can never have been generated.
    let response = server.get("/zzzzzz").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_redirect_rejects_malformed_keys() {
    let (server, _store) = common::create_test_server();

    for path in ["/ABCDEF", "/abcde", "/abcdefg", "/abc-12"] {
        let response = server.get(path).await;
        response.assert_status_not_found();
    }
}

#[tokio::test]
async fn test_redirect_store_failure() {
    let server = common::create_failing_server();

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 503);
}
