use httpmock::prelude::*;
use package_self_service::domain::model::StatusPage;
use package_self_service::{
    HttpShippingService, InMemoryDirectory, StatusAggregator, SubmissionOrchestrator,
};
use std::sync::Arc;

/// End-to-end flow against a mocked shipping service: submit packages through
/// the orchestrator, then list them back through the aggregator sharing the
/// same directory.
#[tokio::test]
async fn test_submit_then_list_returns_only_locally_known_packages() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/shippingOrders");
        then.status(200).body("OK");
    });

    // The upstream also knows "Somebody Elses Box", which this instance never
    // submitted; reconciliation must drop it.
    let in_progress_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/shippingOrders")
            .query_param("status", "IN_PROGRESS")
            .query_param("offset", "1")
            .query_param("limit", "10");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"packageName": "Laptop", "orderStatus": "IN_PROGRESS"},
                {"packageName": "Somebody Elses Box", "orderStatus": "IN_PROGRESS"}
            ]));
    });
    let sent_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/shippingOrders")
            .query_param("status", "SENT");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"packageName": "Books", "orderStatus": "SENT"}
            ]));
    });
    let delivered_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/shippingOrders")
            .query_param("status", "DELIVERED");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let directory = Arc::new(InMemoryDirectory::with_seed());
    let orchestrator = SubmissionOrchestrator::new(
        directory.clone(),
        HttpShippingService::new(server.base_url()),
    );
    orchestrator
        .submit("Laptop", 2500.0, "AP001", "AP002")
        .await
        .unwrap();
    orchestrator
        .submit("Books", 900.0, "AP001", "AP003")
        .await
        .unwrap();

    let aggregator = StatusAggregator::new(
        directory,
        HttpShippingService::new(server.base_url()),
        StatusPage::default(),
    );
    let listed = aggregator.list_for_sender("AP001", None).await.unwrap();

    in_progress_mock.assert();
    sent_mock.assert();
    delivered_mock.assert();

    // Status enumeration order, remote-only names dropped.
    let names: Vec<&str> = listed.iter().map(|v| v.package_name.as_str()).collect();
    assert_eq!(names, vec!["Laptop", "Books"]);
}

#[tokio::test]
async fn test_status_filter_hits_only_that_status() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/shippingOrders");
        then.status(200).body("OK");
    });
    let sent_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/shippingOrders")
            .query_param("status", "SENT");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"packageName": "Books", "orderStatus": "SENT"}
            ]));
    });
    let in_progress_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/shippingOrders")
            .query_param("status", "IN_PROGRESS");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let directory = Arc::new(InMemoryDirectory::with_seed());
    let orchestrator = SubmissionOrchestrator::new(
        directory.clone(),
        HttpShippingService::new(server.base_url()),
    );
    orchestrator
        .submit("Books", 900.0, "AP001", "AP003")
        .await
        .unwrap();

    let aggregator = StatusAggregator::new(
        directory,
        HttpShippingService::new(server.base_url()),
        StatusPage::default(),
    );
    let listed = aggregator
        .list_for_sender("AP001", Some("sent"))
        .await
        .unwrap();

    sent_mock.assert();
    in_progress_mock.assert_hits(0);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].package_name, "Books");
}

#[tokio::test]
async fn test_details_passthrough_by_package_id() {
    let server = MockServer::start();
    let details_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/shippingOrders")
            .query_param("packageId", "PKG-77");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "packageId": "PKG-77",
                "packageName": "Laptop",
                "orderStatus": "DELIVERED",
                "actualDeliveryDateTime": "2026-08-30T14:02:00"
            }));
    });

    let aggregator = StatusAggregator::new(
        Arc::new(InMemoryDirectory::with_seed()),
        HttpShippingService::new(server.base_url()),
        StatusPage::default(),
    );

    // No reconciliation here: the package is not in the local ledger and is
    // still returned.
    let view = aggregator.package_details("PKG-77").await.unwrap().unwrap();

    details_mock.assert();
    assert_eq!(view.package_name, "Laptop");
    assert_eq!(view.order_status.as_deref(), Some("DELIVERED"));
    assert_eq!(
        view.actual_delivery_date_time.as_deref(),
        Some("2026-08-30T14:02:00")
    );
}
