use chrono::{TimeZone, Utc};
use serde_json::json;
use shared::{
    abstract_trait::{
        dashboard::service::{
            stats::DashboardStatsServiceTrait, topdrivers::TopDriversServiceTrait,
        },
        driver::repository::query::DynDriverQueryRepository,
        merchant::repository::query::DynMerchantQueryRepository,
        transaction::{
            repository::query::DynTransactionQueryRepository,
            service::query::DynTransactionQueryService,
        },
    },
    config::{HttpClientConfig, NearpayConfig, ProfileStoreConfig, StatsConfig},
    domain::{requests::FindTopDrivers, responses::ChangeDirection},
    errors::{RepositoryError, ServiceError},
    repository::{
        driver::query::DriverProfileRepository, merchant::query::MerchantProfileRepository,
        transaction::query::NearpayTransactionRepository,
    },
    service::{
        dashboard::{stats::DashboardStatsService, topdrivers::TopDriversService},
        transaction::query::TransactionQueryService,
    },
};
use std::{sync::Arc, time::Duration};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn stats_config() -> StatsConfig {
    StatsConfig {
        page_size: 100,
        max_pages: 50,
        fetch_timeout: Duration::from_secs(5),
        stats_timeout: Duration::from_secs(10),
    }
}

fn build_service(server: &MockServer, config: &StatsConfig) -> DashboardStatsService {
    let client = HttpClientConfig::new_client(config.fetch_timeout).unwrap();

    let nearpay = NearpayConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
    };
    let profile_store = ProfileStoreConfig {
        base_url: server.uri(),
    };

    let transaction_repo = Arc::new(NearpayTransactionRepository::new(client.clone(), nearpay))
        as DynTransactionQueryRepository;
    let transaction_query = Arc::new(TransactionQueryService::new(transaction_repo, config))
        as DynTransactionQueryService;
    let merchant_repo = Arc::new(MerchantProfileRepository::new(
        client.clone(),
        profile_store.clone(),
    )) as DynMerchantQueryRepository;
    let driver_repo = Arc::new(DriverProfileRepository::new(client, profile_store))
        as DynDriverQueryRepository;

    DashboardStatsService::new(
        transaction_query,
        merchant_repo,
        driver_repo,
        config.stats_timeout,
    )
}

fn tx(id: &str, status: &str, amount: f64, created_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "amount": amount,
        "currency": "SAR",
        "status": status,
        "created_at": created_at,
    })
}

async fn mount_transaction_pages(server: &MockServer) {
    let page_one = json!({
        "transactions": [
            tx("t1", "approved", 100.0, "2024-06-05T10:00:00Z"),
            tx("t2", "Declined by issuing bank", 50.0, "2024-06-06T11:00:00Z"),
            tx("t3", "accepted", 200.0, "2024-05-10T09:00:00Z"),
        ],
        "pages": { "current": 1, "total": 2 },
    });
    let page_two = json!({
        "transactions": [
            tx("t4", "Accepted", 25.0, "2024-06-20T15:00:00Z"),
            tx("t5", "pending", 10.0, "2024-06-21T16:00:00Z"),
            tx("t6", "APPROVED", 100.0, "2024-05-25T08:00:00Z"),
            tx("t7", "approved", 999.0, "not-a-timestamp"),
        ],
        "pages": { "current": 2, "total": 2 },
    });

    Mock::given(method("GET"))
        .and(path("/v1/transactions"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_one))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/transactions"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_two))
        .mount(server)
        .await;
}

async fn mount_profiles(server: &MockServer) {
    let merchants = json!([
        { "id": "m1", "name": "Souq One", "status": "active", "created_at": "2024-06-05T00:00:00Z" },
        { "id": "m2", "name": "Souq Two", "status": "active", "created_at": "2024-04-01T00:00:00Z" },
        { "id": "m3", "name": "Souq Three", "status": "suspended", "created_at": "2023-12-25T00:00:00Z" },
    ]);
    let drivers = json!([
        { "id": "d1", "name": "Driver One", "status": "active", "created_at": "2024-06-10T00:00:00Z", "transactions_count": 5 },
        { "id": "d2", "name": "Driver Two", "status": "active", "created_at": "2024-05-01T00:00:00Z", "transactions_count": 10 },
        { "id": "d3", "name": "Driver Three", "status": "active", "created_at": "2024-03-03T00:00:00Z", "transactions_count": 10 },
        { "id": "d4", "name": "Driver Four", "status": "active", "created_at": "junk", "transactions_count": 2 },
    ]);

    Mock::given(method("GET"))
        .and(path("/merchants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(merchants))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/drivers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(drivers))
        .mount(server)
        .await;
}

#[tokio::test]
async fn aggregates_all_pages_into_the_four_kpis() {
    let server = MockServer::start().await;
    mount_transaction_pages(&server).await;
    mount_profiles(&server).await;

    let config = stats_config();
    let service = build_service(&server, &config);

    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let stats = service.compute_at(now).await.unwrap();

    assert_eq!(stats.total_transactions, 7);
    assert_eq!(stats.total_merchants, 3);
    assert_eq!(stats.total_drivers, 4);
    // Every accepted amount counts toward the grand total, including t7
    // whose timestamp is junk and therefore lands in no month bucket.
    assert_eq!(stats.total_transaction_amount, 1424.0);

    // June: 4 transactions vs May: 2.
    assert_eq!(stats.transactions_change.magnitude, "100.0%");
    assert_eq!(stats.transactions_change.direction, ChangeDirection::Increase);

    // June accepted 125 vs May accepted 300.
    assert_eq!(stats.total_amount_change.magnitude, "58.3%");
    assert_eq!(stats.total_amount_change.direction, ChangeDirection::Decrease);

    // One June registration vs a base of two existing merchants.
    assert_eq!(stats.merchants_change.magnitude, "50.0%");
    assert_eq!(stats.merchants_change.direction, ChangeDirection::Decrease);

    // d4's junk timestamp keeps it out of both the bucket and the base.
    assert_eq!(stats.drivers_change.magnitude, "50.0%");
    assert_eq!(stats.drivers_change.direction, ChangeDirection::Decrease);
}

#[tokio::test]
async fn repeated_refreshes_over_the_same_snapshot_are_identical() {
    let server = MockServer::start().await;
    mount_transaction_pages(&server).await;
    mount_profiles(&server).await;

    let config = stats_config();
    let service = build_service(&server, &config);

    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let first = service.compute_at(now).await.unwrap();
    let second = service.compute_at(now).await.unwrap();

    assert_eq!(first.total_transaction_amount, second.total_transaction_amount);
    assert_eq!(first.total_transactions, second.total_transactions);
    assert_eq!(first.transactions_change, second.transactions_change);
    assert_eq!(first.total_amount_change, second.total_amount_change);
    assert_eq!(first.merchants_change, second.merchants_change);
    assert_eq!(first.drivers_change, second.drivers_change);
}

#[tokio::test]
async fn january_refresh_buckets_against_previous_december() {
    let server = MockServer::start().await;

    let page = json!({
        "transactions": [
            tx("jan", "approved", 10.0, "2024-01-10T00:00:00Z"),
            tx("dec", "approved", 40.0, "2023-12-31T23:59:59Z"),
            tx("nov", "approved", 70.0, "2023-11-30T00:00:00Z"),
        ],
        "pages": { "current": 1, "total": 1 },
    });
    Mock::given(method("GET"))
        .and(path("/v1/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/merchants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/drivers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let config = stats_config();
    let service = build_service(&server, &config);

    let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let stats = service.compute_at(now).await.unwrap();

    // 10 this January against 40 in December 2023; November stays out.
    assert_eq!(stats.total_amount_change.magnitude, "75.0%");
    assert_eq!(stats.total_amount_change.direction, ChangeDirection::Decrease);
}

#[tokio::test]
async fn a_failing_profile_listing_fails_the_whole_refresh() {
    let server = MockServer::start().await;
    mount_transaction_pages(&server).await;

    Mock::given(method("GET"))
        .and(path("/merchants"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/drivers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let config = stats_config();
    let service = build_service(&server, &config);

    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let err = service.compute_at(now).await.unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::UnexpectedStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn a_slow_upstream_surfaces_a_timeout() {
    let server = MockServer::start().await;

    let page = json!({
        "transactions": [tx("t1", "approved", 10.0, "2024-06-05T00:00:00Z")],
        "pages": { "current": 1, "total": 1 },
    });
    Mock::given(method("GET"))
        .and(path("/v1/transactions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page)
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let mut config = stats_config();
    config.stats_timeout = Duration::from_millis(50);
    let service = build_service(&server, &config);

    let err = service.get_stats().await.unwrap_err();
    assert!(matches!(err, ServiceError::Timeout));
}

#[tokio::test]
async fn top_drivers_ranks_against_the_busiest_driver() {
    let server = MockServer::start().await;
    mount_profiles(&server).await;

    let config = stats_config();
    let client = HttpClientConfig::new_client(config.fetch_timeout).unwrap();
    let driver_repo = Arc::new(DriverProfileRepository::new(
        client,
        ProfileStoreConfig {
            base_url: server.uri(),
        },
    )) as DynDriverQueryRepository;
    let service = TopDriversService::new(driver_repo);

    let response = service
        .get_top_drivers(FindTopDrivers { limit: 3 })
        .await
        .unwrap();

    let ranking = response.data;
    assert_eq!(ranking.len(), 3);
    // d2 and d3 tie on 10 and keep their upstream order.
    assert_eq!(ranking[0].driver_id, "d2");
    assert_eq!(ranking[1].driver_id, "d3");
    assert_eq!(ranking[2].driver_id, "d1");
    assert_eq!(ranking[0].percentage_activity, 100);
    assert_eq!(ranking[1].percentage_activity, 100);
    assert_eq!(ranking[2].percentage_activity, 50);
}
