use axum::handler::{Handler, HandlerWithoutStateExt};
use axum::http::{header, Method};
use axum::routing::{get, MethodRouter};
use axum::{middleware, Router};
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::data::db::ReportStore;
use crate::system::middleware::request_logger::request_logger;

/// GET route whose other methods answer with the 404 envelope
fn get_only<H, T>(handler: H) -> MethodRouter<ReportStore>
where
    H: Handler<T, ReportStore>,
    T: 'static,
{
    get(handler).fallback(handlers::fallback::not_found)
}

/// All application routes.
///
/// Unmatched paths get the fixed 404 envelope; with `static_dir` set they
/// first try a file from that directory.
pub fn configure_routes(store: ReportStore, static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let router = Router::new()
        .route("/health", get_only(handlers::fallback::health))
        // R001 Sales by region
        .route(
            "/api/reports/sales/regions",
            get_only(handlers::r001_sales_by_region::list_regions),
        )
        .route(
            "/api/reports/sales/regions/:region",
            get_only(handlers::r001_sales_by_region::sales_by_region),
        )
        // R002 Sales by channel
        .route(
            "/api/sales/channel",
            get_only(handlers::r002_sales_by_channel::sales_by_channel),
        )
        // R003 Agent performance
        .route(
            "/api/agent-performance",
            get_only(handlers::r003_agent_performance::agent_performance),
        )
        // D100 Overview dashboard
        .route(
            "/dashboard/sales-data",
            get_only(handlers::d100_overview::sales_data),
        )
        .route(
            "/dashboard/agent-performance",
            get_only(handlers::d100_overview::agent_performance),
        )
        .route(
            "/dashboard/customer-feedback",
            get_only(handlers::d100_overview::customer_feedback),
        )
        .route(
            "/dashboard/report-types",
            get_only(handlers::d100_overview::report_types),
        );

    let router = match static_dir {
        Some(dir) => {
            tracing::info!("Serving static files from {}", dir.display());
            router.fallback_service(
                ServeDir::new(dir).not_found_service(handlers::fallback::not_found.into_service()),
            )
        }
        None => router.fallback(handlers::fallback::not_found),
    };

    router
        .with_state(store)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed::{
        insert_agent_performance, insert_feedback, insert_report, insert_sale, AgentSeed,
        SaleSeed,
    };
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn sale<'a>(region: &'a str, salesperson: &'a str, channel: &'a str, amount: f64) -> SaleSeed<'a> {
        SaleSeed {
            region,
            salesperson,
            channel,
            amount,
        }
    }

    async fn empty_store() -> ReportStore {
        ReportStore::connect("sqlite::memory:").await.unwrap()
    }

    async fn store_with_sales(sales: &[SaleSeed<'_>]) -> ReportStore {
        let store = empty_store().await;
        store
            .with_db(|db| async move {
                for s in sales {
                    insert_sale(&db, s).await?;
                }
                Ok(())
            })
            .await
            .unwrap();
        store
    }

    /// A store whose tables were never created: every query fails
    async fn broken_store() -> ReportStore {
        ReportStore::open("sqlite::memory:").await.unwrap()
    }

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get_json(store: ReportStore, uri: &str) -> (StatusCode, Value) {
        send(configure_routes(store, None), Method::GET, uri).await
    }

    fn not_found_envelope() -> Value {
        json!({ "message": "Not Found", "status": 404, "type": "error" })
    }

    // ---- R001 regions ----

    #[tokio::test]
    async fn test_regions_are_distinct_and_sorted() {
        let store = store_with_sales(&[
            sale("North", "John Doe", "Online", 100.0),
            sale("South", "Amy Chen", "Retail", 200.0),
            sale("East", "Tom Becker", "Online", 300.0),
            sale("West", "Jane Smith", "Retail", 400.0),
            sale("North", "Jane Smith", "Retail", 500.0),
        ])
        .await;

        let (status, body) = get_json(store, "/api/reports/sales/regions").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["East", "North", "South", "West"]));
    }

    #[tokio::test]
    async fn test_regions_empty_collection() {
        let (status, body) = get_json(empty_store().await, "/api/reports/sales/regions").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_regions_store_failure() {
        let (status, body) = get_json(broken_store().await, "/api/reports/sales/regions").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error fetching sales regions");
    }

    #[tokio::test]
    async fn test_sales_by_region_grouped_by_salesperson() {
        let store = store_with_sales(&[
            sale("North", "John Doe", "Online", 600.0),
            sale("North", "John Doe", "Retail", 400.0),
            sale("North", "Jane Smith", "Online", 1500.0),
            sale("South", "Jane Smith", "Online", 9999.0),
        ])
        .await;

        let (status, body) = get_json(store, "/api/reports/sales/regions/North").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                { "salesperson": "Jane Smith", "totalSales": 1500.0 },
                { "salesperson": "John Doe", "totalSales": 1000.0 }
            ])
        );
    }

    #[tokio::test]
    async fn test_sales_by_unknown_region_is_empty() {
        let store = store_with_sales(&[sale("North", "John Doe", "Online", 600.0)]).await;
        let (status, body) = get_json(store, "/api/reports/sales/regions/unknown-region").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_region_name_is_percent_decoded() {
        let store = store_with_sales(&[sale("North East", "John Doe", "Online", 250.0)]).await;
        let (_, body) = get_json(store, "/api/reports/sales/regions/North%20East").await;
        assert_eq!(body, json!([{ "salesperson": "John Doe", "totalSales": 250.0 }]));
    }

    // ---- 404 envelope ----

    #[tokio::test]
    async fn test_unknown_routes_return_envelope() {
        for uri in [
            "/api/reports/sales/invalid-endpoint",
            "/api/reports/sales/regions/North/extra",
            "/api/reports/%7Bweird%7D?x=1",
            "/nothing-here",
        ] {
            let (status, body) = get_json(empty_store().await, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(body, not_found_envelope(), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_unknown_route_any_method() {
        let app = configure_routes(empty_store().await, None);
        let (status, body) = send(app, Method::POST, "/api/reports/sales/invalid-endpoint").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, not_found_envelope());
    }

    #[tokio::test]
    async fn test_wrong_method_on_known_route_is_not_found() {
        for (method, uri) in [
            (Method::POST, "/api/sales/channel"),
            (Method::DELETE, "/api/reports/sales/regions/North"),
            (Method::PUT, "/dashboard/report-types"),
        ] {
            let app = configure_routes(empty_store().await, None);
            let (status, body) = send(app, method, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(body, not_found_envelope());
        }
    }

    // ---- R002 channel ----

    #[tokio::test]
    async fn test_sales_by_channel_sums_amounts() {
        let store = store_with_sales(&[
            sale("North", "John Doe", "Online", 2000.0),
            sale("South", "Amy Chen", "Online", 3000.0),
            sale("East", "Tom Becker", "Retail", 1000.0),
            sale("West", "Jane Smith", "Retail", 2000.0),
        ])
        .await;

        let (status, body) = get_json(store, "/api/sales/channel").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                { "channel": "Online", "totalSales": 5000.0 },
                { "channel": "Retail", "totalSales": 3000.0 }
            ])
        );
    }

    #[tokio::test]
    async fn test_sales_by_channel_omits_internal_fields() {
        let store = store_with_sales(&[sale("North", "John Doe", "Online", 10.0)]).await;
        let (_, body) = get_json(store, "/api/sales/channel").await;
        let row = body[0].as_object().unwrap();
        let mut keys: Vec<&String> = row.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["channel", "totalSales"]);
    }

    #[tokio::test]
    async fn test_sales_by_channel_empty_collection() {
        let (status, body) = get_json(empty_store().await, "/api/sales/channel").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_sales_by_channel_store_failure() {
        let (status, body) = get_json(broken_store().await, "/api/sales/channel").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error fetching sales data by channel");
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("no such table"), "{}", error);
        assert_eq!(body.as_object().unwrap().len(), 2);
    }

    // ---- R003 agent performance ----

    async fn store_with_agents() -> ReportStore {
        let store = empty_store().await;
        store
            .with_db(|db| async move {
                for row in [
                    AgentSeed { agent: "Agent B", month: "January", resolution_time: 45.0, performance: 70.0 },
                    AgentSeed { agent: "Agent A", month: "January", resolution_time: 30.0, performance: 90.0 },
                    AgentSeed { agent: "Agent A", month: "February", resolution_time: 25.0, performance: 80.0 },
                ] {
                    insert_agent_performance(&db, &row).await?;
                }
                Ok(())
            })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_agent_performance_for_month() {
        let (status, body) =
            get_json(store_with_agents().await, "/api/agent-performance?month=January").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                { "agent": "Agent A", "month": "January", "resolutionTime": 30.0 },
                { "agent": "Agent B", "month": "January", "resolutionTime": 45.0 }
            ])
        );
    }

    #[tokio::test]
    async fn test_agent_performance_month_is_case_insensitive() {
        let (_, body) =
            get_json(store_with_agents().await, "/api/agent-performance?month=february").await;
        assert_eq!(
            body,
            json!([{ "agent": "Agent A", "month": "February", "resolutionTime": 25.0 }])
        );
    }

    #[tokio::test]
    async fn test_agent_performance_all_months() {
        let (_, body) = get_json(store_with_agents().await, "/api/agent-performance").await;
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_agent_performance_invalid_month() {
        let (status, body) =
            get_json(store_with_agents().await, "/api/agent-performance?month=Smarch").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "message": "Invalid month", "status": 400, "type": "error" })
        );
    }

    // ---- D100 dashboard ----

    #[tokio::test]
    async fn test_dashboard_sales_data() {
        let store = store_with_sales(&[
            sale("North", "John Doe", "Online", 100.0),
            sale("North", "Jane Smith", "Retail", 50.0),
            sale("South", "Amy Chen", "Retail", 70.0),
        ])
        .await;
        let (status, body) = get_json(store, "/dashboard/sales-data").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                { "region": "North", "totalAmount": 150.0 },
                { "region": "South", "totalAmount": 70.0 }
            ])
        );
    }

    #[tokio::test]
    async fn test_dashboard_agent_performance_averages() {
        let (_, body) = get_json(store_with_agents().await, "/dashboard/agent-performance").await;
        assert_eq!(
            body,
            json!([
                { "name": "Agent A", "averagePerformance": 85.0 },
                { "name": "Agent B", "averagePerformance": 70.0 }
            ])
        );
    }

    #[tokio::test]
    async fn test_dashboard_customer_feedback() {
        let store = empty_store().await;
        store
            .with_db(|db| async move {
                insert_feedback(&db, "Service", 4.0).await?;
                insert_feedback(&db, "Service", 5.0).await?;
                insert_feedback(&db, "Delivery", 3.0).await?;
                Ok(())
            })
            .await
            .unwrap();
        let (_, body) = get_json(store, "/dashboard/customer-feedback").await;
        assert_eq!(
            body,
            json!([
                { "feedbackType": "Delivery", "averagePerformance": 3.0 },
                { "feedbackType": "Service", "averagePerformance": 4.5 }
            ])
        );
    }

    #[tokio::test]
    async fn test_dashboard_report_types() {
        let store = empty_store().await;
        store
            .with_db(|db| async move {
                for report_type in ["Sales", "Agent", "Sales"] {
                    insert_report(&db, report_type).await?;
                }
                Ok(())
            })
            .await
            .unwrap();
        let (status, body) = get_json(store, "/dashboard/report-types").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "reportTypes": ["Agent", "Sales"], "reportCounts": [1, 2] })
        );
    }

    #[tokio::test]
    async fn test_dashboard_store_failure() {
        let (status, body) = get_json(broken_store().await, "/dashboard/report-types").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error fetching dashboard report types");
    }

    // ---- misc ----

    #[tokio::test]
    async fn test_health() {
        let app = configure_routes(empty_store().await, None);
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_static_dir_with_envelope_fallback() {
        let dir = std::env::temp_dir().join(format!("apre-static-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("app.js"), "console.log('apre');").unwrap();

        let app = configure_routes(empty_store().await, Some(dir.clone()));
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (status, body) = send(app, Method::GET, "/api/reports/sales/invalid-endpoint").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, not_found_envelope());

        let _ = std::fs::remove_dir_all(dir);
    }
}
