//! Fetch lifecycle tests against a mock OctoFit API.
//!
//! Uses wiremock to simulate the backend, covering both response shapes
//! (bare array and pagination envelope), the failure taxonomy, and the
//! mount/unmount semantics of the lifecycle.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use octofit::fetch::{CollectionView, FetchController, FetchState, FetchStatus};
use octofit::{ApiClient, ClientConfig, EndpointResolver, Resource};

fn controller_for(server: &MockServer) -> FetchController {
    let resolver = EndpointResolver::with_base(server.uri());
    let client = ApiClient::new(
        resolver,
        ClientConfig {
            request_timeout_ms: 1000,
        },
    );
    FetchController::new(client)
}

async fn mount_collection(
    server: &MockServer,
    resource: Resource,
    response: ResponseTemplate,
) -> FetchState {
    Mock::given(method("GET"))
        .and(path(format!("/api/{}/", resource)))
        .respond_with(response)
        .mount(server)
        .await;

    let controller = controller_for(server);
    let mut handle = controller.load(resource);
    handle.settled().await
}

#[tokio::test]
async fn test_paginated_envelope_reaches_ready() {
    let server = MockServer::start().await;
    let body = json!({"count": 1, "next": null, "previous": null,
        "results": [{"id": 1, "name": "Run"}]});

    let state = mount_collection(&server, Resource::Activities, ResponseTemplate::new(200).set_body_json(body)).await;

    assert_eq!(state.status(), FetchStatus::Ready);
    assert_eq!(state.records().len(), 1);
    assert_eq!(state.records()[0].text("name"), Some("Run"));
    assert_eq!(state.error_message(), None);
}

#[tokio::test]
async fn test_bare_array_reaches_ready() {
    let server = MockServer::start().await;
    let body = json!([{"id": 2, "name": "Swim"}]);

    let state = mount_collection(&server, Resource::Activities, ResponseTemplate::new(200).set_body_json(body)).await;

    assert_eq!(state.status(), FetchStatus::Ready);
    assert_eq!(state.records().len(), 1);
    assert_eq!(state.records()[0].text("name"), Some("Swim"));
}

#[tokio::test]
async fn test_http_500_fails_with_status_in_message() {
    let server = MockServer::start().await;

    let state = mount_collection(&server, Resource::Leaderboard, ResponseTemplate::new(500)).await;

    assert_eq!(state.status(), FetchStatus::Failed);
    let message = state.error_message().unwrap();
    assert!(message.contains("500"), "message was {:?}", message);
    assert!(state.records().is_empty());
}

#[tokio::test]
async fn test_empty_results_is_ready_not_error() {
    let server = MockServer::start().await;
    let body = json!({"count": 0, "results": []});

    let state = mount_collection(&server, Resource::Teams, ResponseTemplate::new(200).set_body_json(body)).await;

    assert_eq!(state.status(), FetchStatus::Ready);
    assert!(state.records().is_empty());
    assert_eq!(state.error_message(), None);
}

#[tokio::test]
async fn test_unexpected_shape_degrades_to_empty_ready() {
    let server = MockServer::start().await;
    let body = json!({"detail": "unexpected"});

    let state = mount_collection(&server, Resource::Users, ResponseTemplate::new(200).set_body_json(body)).await;

    assert_eq!(state.status(), FetchStatus::Ready);
    assert!(state.records().is_empty());
}

#[tokio::test]
async fn test_invalid_json_body_fails() {
    let server = MockServer::start().await;

    let state = mount_collection(
        &server,
        Resource::Workouts,
        ResponseTemplate::new(200).set_body_string("<html>not json</html>"),
    )
    .await;

    assert_eq!(state.status(), FetchStatus::Failed);
    assert!(state.error_message().is_some());
}

#[tokio::test]
async fn test_connection_refused_fails() {
    // Grab a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let resolver = EndpointResolver::with_base(format!("http://127.0.0.1:{}", port));
    let client = ApiClient::new(resolver, ClientConfig::default());
    let controller = FetchController::new(client);

    let state = controller.load(Resource::Activities).settled().await;

    assert_eq!(state.status(), FetchStatus::Failed);
    assert!(state.error_message().is_some());
    assert_eq!(controller.stats().failed, 1);
}

#[tokio::test]
async fn test_timeout_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activities/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let resolver = EndpointResolver::with_base(server.uri());
    let client = ApiClient::new(
        resolver,
        ClientConfig {
            request_timeout_ms: 100,
        },
    );
    let controller = FetchController::new(client);

    let state = controller.load(Resource::Activities).settled().await;

    assert_eq!(state.status(), FetchStatus::Failed);
    assert_eq!(state.error_message(), Some("request timed out"));
}

#[tokio::test]
async fn test_loading_then_exactly_one_terminal_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activities/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 1}]))
                .set_delay(Duration::from_millis(150)),
        )
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let mut handle = controller.load(Resource::Activities);

    // The response is delayed, so the handle observes Loading first.
    assert_eq!(handle.status(), FetchStatus::Loading);
    assert!(handle.state().records().is_empty());

    let state = handle.settled().await;
    assert_eq!(state.status(), FetchStatus::Ready);

    // Terminal means terminal: the state does not change afterwards.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(handle.state(), state);
    assert_eq!(controller.stats().published, 1);
}

#[tokio::test]
async fn test_repeated_loads_reach_same_terminal_state() {
    let server = MockServer::start().await;
    let body = json!({"results": [{"id": 7, "name": "Row"}]});
    Mock::given(method("GET"))
        .and(path("/api/workouts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let first = controller.load(Resource::Workouts).settled().await;
    let second = controller.load(Resource::Workouts).settled().await;

    assert_eq!(first, second);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_stale_completion_after_unmount_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activities/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 1}]))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let handle = controller.load(Resource::Activities);

    // Unmount before the delayed response arrives.
    drop(handle);
    tokio::time::sleep(Duration::from_millis(300)).await;

    // The request completed on the wire but its effect was suppressed.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
    let stats = controller.stats();
    assert_eq!(stats.published, 0);
    assert_eq!(stats.stale, 1);
}

#[tokio::test]
async fn test_view_rebind_same_resource_does_not_refetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teams/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "Blue"}])))
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let mut view = CollectionView::mount(&controller, Resource::Teams);
    let state = view.settled().await;
    assert_eq!(state.status(), FetchStatus::Ready);

    // Re-render with the same binding: state stays Ready, no new request.
    view.bind(Resource::Teams);
    assert_eq!(view.state(), state);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_view_rebind_other_resource_starts_fresh_cycle() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teams/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "Blue"}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"username": "ada"}]))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let mut view = CollectionView::mount(&controller, Resource::Teams);
    view.settled().await;

    view.bind(Resource::Users);
    assert_eq!(view.resource(), Resource::Users);
    assert_eq!(view.state().status(), FetchStatus::Loading);

    let state = view.settled().await;
    assert_eq!(state.status(), FetchStatus::Ready);
    assert_eq!(state.records()[0].text("username"), Some("ada"));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_views_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activities/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/leaderboard/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"results": [{"user_name": "grace", "points": 300}]})),
        )
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let mut failing = CollectionView::mount(&controller, Resource::Activities);
    let mut healthy = CollectionView::mount(&controller, Resource::Leaderboard);

    // One view's error banner leaves the other untouched.
    assert_eq!(failing.settled().await.status(), FetchStatus::Failed);
    let state = healthy.settled().await;
    assert_eq!(state.status(), FetchStatus::Ready);
    assert_eq!(state.records()[0].text("user_name"), Some("grace"));
}
