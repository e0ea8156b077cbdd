//! HTTP protocol tests for the Unsplash client against a local fake provider.

mod common;

use std::time::Duration;

use common::fake_unsplash::{FakeUnsplashConfig, TEST_API_KEY, spawn_fake_unsplash};
use common::fixtures::{PhotoBuilder, lifestyle_photo, mouse_photo, search_body};
use imagery::config::ImageryConfig;
use imagery::unsplash::rate_limit::reset_rate_limit;
use imagery::unsplash::{
    ImageSource, RateLimitState, SourceError, UnsplashClient, format_rate_limit_info,
    rate_limit_info,
};
use serial_test::serial;

#[tokio::test]
async fn test_search_sends_expected_params_and_headers() {
    let fake = spawn_fake_unsplash(
        FakeUnsplashConfig::default().with_body(search_body(&[mouse_photo()])),
    )
    .await
    .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    let candidates = client.search("Wireless Mouse", "Electronics").await.unwrap();

    assert_eq!(candidates.len(), 1);
    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(
        request.param("query"),
        Some(
            "Wireless Mouse product shot isolated isolated white background studio product photography -people"
        )
    );
    assert_eq!(request.param("per_page"), Some("8"));
    assert_eq!(request.param("order_by"), Some("relevant"));
    assert_eq!(request.param("content_filter"), Some("high"));
    assert_eq!(request.param("orientation"), Some("squarish"));
    assert_eq!(request.param("color"), None);
    assert_eq!(
        request.authorization.as_deref(),
        Some(format!("Client-ID {TEST_API_KEY}").as_str())
    );
    assert_eq!(request.accept_version.as_deref(), Some("v1"));
}

#[tokio::test]
async fn test_search_maps_wire_fields() {
    let photo = PhotoBuilder::new("desk-lamp")
        .alt_description("a brass desk lamp")
        .tags(&["lamp", "home"])
        .likes(321)
        .photographer("Ada");
    let fake = spawn_fake_unsplash(FakeUnsplashConfig::default().with_body(search_body(&[photo])))
        .await
        .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    let candidates = client.search("Desk Lamp", "Home & Kitchen").await.unwrap();

    let candidate = &candidates[0];
    assert_eq!(candidate.id, "desk-lamp");
    assert_eq!(candidate.urls.regular, "https://images.unsplash.com/desk-lamp?w=1080");
    assert_eq!(candidate.description, None);
    assert_eq!(candidate.description_text(), "a brass desk lamp");
    assert_eq!(candidate.tags, vec!["lamp", "home"]);
    assert_eq!(candidate.likes, 321);
    assert_eq!(candidate.downloads, 10);
    assert_eq!(candidate.user.as_ref().map(|u| u.name.as_str()), Some("Ada"));
}

#[tokio::test]
async fn test_unauthorized_is_empty_without_retry() {
    let fake = spawn_fake_unsplash(FakeUnsplashConfig::default().with_status(401))
        .await
        .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    let candidates = client.search("Wireless Mouse", "Electronics").await.unwrap();

    assert!(candidates.is_empty());
    assert_eq!(fake.hits(), 1);
}

#[tokio::test]
async fn test_rate_limited_is_empty_without_retry() {
    let fake = spawn_fake_unsplash(FakeUnsplashConfig::default().with_status(429))
        .await
        .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    let candidates = client.search("Wireless Mouse", "Electronics").await.unwrap();

    assert!(candidates.is_empty());
    assert_eq!(fake.hits(), 1);
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let fake = spawn_fake_unsplash(FakeUnsplashConfig::default().with_status(500))
        .await
        .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    let err = client
        .search("Wireless Mouse", "Electronics")
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::Status { status: 500, .. }));
    assert!(!err.is_retryable());
    assert_eq!(fake.hits(), 1);

    assert!(client.fetch_candidates("Wireless Mouse", "Electronics").await.is_empty());
}

#[tokio::test]
async fn test_zero_results_is_empty() {
    let fake = spawn_fake_unsplash(FakeUnsplashConfig::default())
        .await
        .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    let candidates = client.search("Obscure Gizmo", "Electronics").await.unwrap();

    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_missing_results_field_is_empty() {
    let fake = spawn_fake_unsplash(
        FakeUnsplashConfig::default().with_body(serde_json::json!({ "total": 0 })),
    )
    .await
    .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    let candidates = client.search("Obscure Gizmo", "Electronics").await.unwrap();

    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let fake = spawn_fake_unsplash(FakeUnsplashConfig::default().with_raw_body("<html>oops"))
        .await
        .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    let err = client
        .search("Wireless Mouse", "Electronics")
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::Decode(_)));
    assert_eq!(fake.hits(), 1);
}

#[tokio::test]
async fn test_timeouts_retry_up_to_budget() {
    let fake = spawn_fake_unsplash(
        FakeUnsplashConfig::default().with_delay(Duration::from_millis(400)),
    )
    .await
    .unwrap();
    let config = ImageryConfig {
        request_timeout: Duration::from_millis(50),
        max_retries: 2,
        ..fake.client_config()
    };
    let client = UnsplashClient::new(&config);

    let err = client
        .search("Wireless Mouse", "Electronics")
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::Timeout { timeout_ms: 50 }));
    assert_eq!(fake.hits(), 3);
}

#[tokio::test]
async fn test_timeout_without_retries_is_single_attempt() {
    let fake = spawn_fake_unsplash(
        FakeUnsplashConfig::default().with_delay(Duration::from_millis(400)),
    )
    .await
    .unwrap();
    let config = ImageryConfig {
        request_timeout: Duration::from_millis(50),
        ..fake.client_config()
    };
    let client = UnsplashClient::new(&config);

    let result = client
        .search_with_retries("Wireless Mouse", "Electronics", 0)
        .await;

    assert!(matches!(result, Err(SourceError::Timeout { .. })));
    assert_eq!(fake.hits(), 1);
}

#[tokio::test]
async fn test_timeout_then_success_recovers() {
    let fake = spawn_fake_unsplash(
        FakeUnsplashConfig::default()
            .with_body(search_body(&[mouse_photo(), lifestyle_photo("busy")]))
            .with_delay(Duration::from_millis(400))
            .delay_first(1),
    )
    .await
    .unwrap();
    let config = ImageryConfig {
        request_timeout: Duration::from_millis(100),
        ..fake.client_config()
    };
    let client = UnsplashClient::new(&config);

    let candidates = client.search("Wireless Mouse", "Electronics").await.unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(fake.hits(), 2);
}

#[tokio::test]
async fn test_missing_key_sends_no_requests() {
    let fake = spawn_fake_unsplash(FakeUnsplashConfig::default())
        .await
        .unwrap();
    let config = ImageryConfig::default().with_base_url(fake.url());
    let client = UnsplashClient::new(&config);

    assert!(!client.is_enabled());
    let candidates = client.search("Wireless Mouse", "Electronics").await.unwrap();
    let again = client.search("Desk Lamp", "Home & Kitchen").await.unwrap();

    assert!(candidates.is_empty());
    assert!(again.is_empty());
    assert_eq!(fake.hits(), 0);
}

#[tokio::test]
#[serial]
async fn test_rate_limit_headers_are_recorded() {
    reset_rate_limit();
    let fake = spawn_fake_unsplash(
        FakeUnsplashConfig::default().with_rate_limit(50, 7, 1_700_000_000),
    )
    .await
    .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    client.search("Wireless Mouse", "Electronics").await.unwrap();

    let state = rate_limit_info();
    assert_eq!(
        state,
        RateLimitState {
            limit: 50,
            remaining: 7,
            reset_epoch: 1_700_000_000,
        }
    );
    assert!(state.is_low());
    assert_eq!(format_rate_limit_info(), "7/50 (14%) remaining");

    reset_rate_limit();
}

#[tokio::test]
#[serial]
async fn test_rate_limit_recorded_on_rejected_requests() {
    reset_rate_limit();
    let fake = spawn_fake_unsplash(
        FakeUnsplashConfig::default()
            .with_status(429)
            .with_rate_limit(50, 0, 1_700_000_600),
    )
    .await
    .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    client.search("Wireless Mouse", "Electronics").await.unwrap();

    assert_eq!(rate_limit_info().remaining, 0);
    assert_eq!(format_rate_limit_info(), "0/50 (0%) remaining");

    reset_rate_limit();
}

#[tokio::test]
#[serial]
async fn test_rate_limit_untouched_without_headers() {
    reset_rate_limit();
    let fake = spawn_fake_unsplash(FakeUnsplashConfig::default())
        .await
        .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    client.search("Wireless Mouse", "Electronics").await.unwrap();

    assert_eq!(rate_limit_info(), RateLimitState::INITIAL);
    assert_eq!(format_rate_limit_info(), "50/50 (100%) remaining");
}

#[tokio::test]
#[serial]
async fn test_refresh_rate_limit_reports_header_state() {
    reset_rate_limit();
    let fake = spawn_fake_unsplash(
        FakeUnsplashConfig::default().with_rate_limit(50, 42, 1_700_000_900),
    )
    .await
    .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    let state = client.refresh_rate_limit().await.unwrap();

    let expected = RateLimitState {
        limit: 50,
        remaining: 42,
        reset_epoch: 1_700_000_900,
    };
    assert_eq!(state, Some(expected));
    assert_eq!(rate_limit_info(), expected);
    assert_eq!(fake.hits(), 1);
    let request = &fake.requests()[0];
    assert_eq!(request.param("per_page"), Some("1"));
    assert_eq!(
        request.authorization.as_deref(),
        Some(format!("Client-ID {TEST_API_KEY}").as_str())
    );

    reset_rate_limit();
}

#[tokio::test]
#[serial]
async fn test_refresh_rate_limit_without_headers_is_none() {
    reset_rate_limit();
    let fake = spawn_fake_unsplash(FakeUnsplashConfig::default())
        .await
        .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    let state = client.refresh_rate_limit().await.unwrap();

    assert_eq!(state, None);
    assert_eq!(rate_limit_info(), RateLimitState::INITIAL);
    assert_eq!(fake.hits(), 1);
}

#[tokio::test]
#[serial]
async fn test_refresh_rate_limit_when_exhausted() {
    reset_rate_limit();
    let fake = spawn_fake_unsplash(
        FakeUnsplashConfig::default()
            .with_status(429)
            .with_rate_limit(50, 0, 1_700_001_200),
    )
    .await
    .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    let state = client.refresh_rate_limit().await.unwrap().unwrap();

    assert_eq!(state.remaining, 0);
    assert!(state.is_low());

    reset_rate_limit();
}

#[tokio::test]
#[serial]
async fn test_refresh_rate_limit_server_error_and_missing_key() {
    reset_rate_limit();
    let fake = spawn_fake_unsplash(
        FakeUnsplashConfig::default()
            .with_status(500)
            .with_rate_limit(50, 30, 1_700_001_500),
    )
    .await
    .unwrap();
    let client = UnsplashClient::new(&fake.client_config());

    let err = client.refresh_rate_limit().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 500, .. }));
    assert_eq!(rate_limit_info().remaining, 30);

    let keyless = UnsplashClient::new(&ImageryConfig::default().with_base_url(fake.url()));
    assert_eq!(keyless.refresh_rate_limit().await.unwrap(), None);
    assert_eq!(fake.hits(), 1);

    reset_rate_limit();
}
