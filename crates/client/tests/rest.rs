//! REST client tests against a local mock server.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use fmp_client::{
    ApiErrorKind, Args, CacheConfig, Category, ClientConfig, FinancialModelingPrep, FmpError,
    MemoryCache, ResponseCache, RetryPolicy,
};

type Hits = Arc<AtomicUsize>;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api/", addr)
}

/// Answers every request with its own path and query.
async fn echo(
    State(hits): State<Hits>,
    uri: Uri,
    Query(query): Query<BTreeMap<String, String>>,
) -> Json<Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    Json(json!({ "path": uri.path(), "query": query }))
}

async fn echo_server() -> (String, Hits) {
    let hits = Hits::default();
    let router = Router::new().fallback(echo).with_state(hits.clone());
    (serve(router).await, hits)
}

fn config(base_url: &str, api_key: &str) -> ClientConfig {
    ClientConfig::new(api_key)
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(5))
}

#[derive(Debug, Deserialize)]
struct Echo {
    path: String,
    query: BTreeMap<String, String>,
}

#[tokio::test]
async fn test_company_profile_request() {
    let (base_url, _) = echo_server().await;
    let fmp = FinancialModelingPrep::with_config(config(&base_url, "key-1"));

    let echo: Echo = fmp
        .company_info()
        .call_as("company_profile", &Args::new().with("symbol", "AAPL"))
        .await
        .unwrap();

    assert_eq!(echo.path, "/api/v3/profile/AAPL");
    assert_eq!(echo.query.len(), 1);
    assert_eq!(echo.query.get("apikey").map(String::as_str), Some("key-1"));
}

#[tokio::test]
async fn test_intraday_chart_request() {
    let (base_url, _) = echo_server().await;
    let fmp = FinancialModelingPrep::with_config(config(&base_url, "key-1"));

    let echo: Echo = fmp
        .call_as(
            Category::Charts,
            "intraday_chart",
            &Args::new()
                .with("timeframe", "5min")
                .with("symbol", "AAPL")
                .with("from", "2023-01-01")
                .with("to", "2023-01-02"),
        )
        .await
        .unwrap();

    assert_eq!(echo.path, "/api/v3/historical-chart/5min/AAPL");
    assert_eq!(echo.query.get("from").map(String::as_str), Some("2023-01-01"));
    assert_eq!(echo.query.get("to").map(String::as_str), Some("2023-01-02"));
    assert_eq!(echo.query.get("apikey").map(String::as_str), Some("key-1"));
}

#[tokio::test]
async fn test_defaults_are_sent() {
    let (base_url, _) = echo_server().await;
    let fmp = FinancialModelingPrep::with_config(config(&base_url, "key-1"));

    let echo: Echo = fmp
        .sec_filings()
        .call_as("sec_filings", &Args::new().with("symbol", "TSLA"))
        .await
        .unwrap();

    assert_eq!(echo.path, "/api/v3/sec_filings/TSLA");
    assert_eq!(echo.query.get("page").map(String::as_str), Some("0"));
    assert_eq!(echo.query.get("type").map(String::as_str), Some("10-K"));
}

#[tokio::test]
async fn test_cache_ignores_api_key() {
    let (base_url, hits) = echo_server().await;
    let cache = Arc::new(MemoryCache::new(Duration::from_secs(60)));
    let first = FinancialModelingPrep::with_cache(config(&base_url, "key-1"), cache.clone());
    let second = FinancialModelingPrep::with_cache(config(&base_url, "key-2"), cache.clone());
    let args = Args::new().with("symbol", "MSFT");

    let a = first.call(Category::CompanyInfo, "company_profile", &args).await.unwrap();
    let b = second.call(Category::CompanyInfo, "company_profile", &args).await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(a, b);
    assert_eq!(cache.len(), 1);

    // Different parameters are a different entry.
    first
        .call(Category::CompanyInfo, "company_profile", &Args::new().with("symbol", "IBM"))
        .await
        .unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_disabled_cache_always_fetches() {
    let (base_url, hits) = echo_server().await;
    let fmp = FinancialModelingPrep::with_config(
        config(&base_url, "key-1").with_cache(CacheConfig::disabled()),
    );
    let args = Args::new().with("symbol", "MSFT");

    fmp.call(Category::CompanyInfo, "company_profile", &args).await.unwrap();
    fmp.call(Category::CompanyInfo, "company_profile", &args).await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_raw_get_sends_every_argument() {
    let (base_url, _) = echo_server().await;
    let fmp = FinancialModelingPrep::with_config(config(&base_url, "key-1"));

    let body = fmp
        .get("v4/some-new-endpoint", &Args::new().with("symbol", "AAPL").with("limit", 5))
        .await
        .unwrap();

    assert_eq!(body["path"], "/api/v4/some-new-endpoint");
    assert_eq!(body["query"]["symbol"], "AAPL");
    assert_eq!(body["query"]["limit"], "5");
    assert_eq!(body["query"]["apikey"], "key-1");
}

async fn invalid_key() -> Json<Value> {
    Json(json!({
        "Error Message": "Invalid API KEY. Please retry or visit our documentation to create one FREE https://financialmodelingprep.com/developer/docs"
    }))
}

#[tokio::test]
async fn test_invalid_key_is_auth_error() {
    let base_url = serve(Router::new().fallback(invalid_key)).await;
    let fmp = FinancialModelingPrep::with_config(config(&base_url, "bad"));
    let args = Args::new().with("symbol", "AAPL");

    let error = fmp
        .call(Category::CompanyInfo, "company_profile", &args)
        .await
        .unwrap_err();
    assert_eq!(error.api_kind(), Some(ApiErrorKind::Auth));
    assert!(!error.to_string().contains("apikey=bad"));

    // The raw path hands the body back untouched.
    let body = fmp.get("v3/profile/AAPL", &Args::new()).await.unwrap();
    assert!(body["Error Message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid API KEY"));
}

#[tokio::test]
async fn test_error_bodies_are_not_cached() {
    let hits = Hits::default();
    let router = Router::new()
        .fallback(|State(hits): State<Hits>| async move {
            hits.fetch_add(1, Ordering::SeqCst);
            Json(json!({ "Error Message": "Limit Reach . Please upgrade your plan" }))
        })
        .with_state(hits.clone());
    let base_url = serve(router).await;
    let fmp = FinancialModelingPrep::with_config(config(&base_url, "key-1"));

    for _ in 0..2 {
        let error = fmp.get("v3/quote/AAPL", &Args::new()).await.unwrap();
        assert!(error.get("Error Message").is_some());
    }
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert!(fmp.http().cache().unwrap().get("v3/quote/AAPL").is_none());
}

#[tokio::test]
async fn test_too_many_requests_is_rate_limit() {
    let router = Router::new().fallback(|| async { StatusCode::TOO_MANY_REQUESTS });
    let base_url = serve(router).await;
    let fmp = FinancialModelingPrep::with_config(config(&base_url, "key-1"));

    let error = fmp
        .call(Category::Quote, "full_quote", &Args::new().with("symbol", "AAPL"))
        .await
        .unwrap_err();
    assert_eq!(error.api_kind(), Some(ApiErrorKind::RateLimit));
}

#[tokio::test]
async fn test_html_error_page_is_classified() {
    let router = Router::new().fallback(|| async {
        (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>").into_response()
    });
    let base_url = serve(router).await;
    let fmp = FinancialModelingPrep::with_config(config(&base_url, "key-1"));

    let error = fmp
        .call(Category::CompanyInfo, "company_profile", &Args::new().with("symbol", "AAPL"))
        .await
        .unwrap_err();
    match error {
        FmpError::Api { kind, message } => {
            assert_eq!(kind, ApiErrorKind::Unknown);
            assert_eq!(message, "HTTP 502 Bad Gateway");
        }
        other => panic!("unexpected error: {other}"),
    }

    let body = fmp.get("v3/profile/AAPL", &Args::new()).await.unwrap();
    assert_eq!(body, json!("<html>Bad Gateway</html>"));
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let router = Router::new().fallback(|| async { "definitely not json" });
    let base_url = serve(router).await;
    let fmp = FinancialModelingPrep::with_config(config(&base_url, "key-1"));

    let error = fmp
        .call(Category::CompanyInfo, "company_profile", &Args::new().with("symbol", "AAPL"))
        .await
        .unwrap_err();
    match error {
        FmpError::Decode { endpoint, .. } => assert_eq!(endpoint, "v3/profile/AAPL"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_call_as_reports_shape_mismatch() {
    let (base_url, _) = echo_server().await;
    let fmp = FinancialModelingPrep::with_config(config(&base_url, "key-1"));

    let result: fmp_client::Result<Vec<String>> = fmp
        .call_as(Category::CompanyInfo, "company_profile", &Args::new().with("symbol", "AAPL"))
        .await;
    assert!(matches!(result, Err(FmpError::Decode { .. })));
}

#[tokio::test]
async fn test_rate_limit_is_retried() {
    let hits = Hits::default();
    let router = Router::new()
        .fallback(|State(hits): State<Hits>| async move {
            if hits.fetch_add(1, Ordering::SeqCst) < 2 {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({ "Error Message": "Limit Reach" })),
                )
            } else {
                (StatusCode::OK, Json(json!([{ "symbol": "AAPL", "price": 190.5 }])))
            }
        })
        .with_state(hits.clone());
    let base_url = serve(router).await;
    let fmp = FinancialModelingPrep::with_config(
        config(&base_url, "key-1").with_retry(RetryPolicy::exponential(3, Duration::from_millis(10))),
    );

    let body = fmp
        .quote()
        .call("full_quote", &Args::new().with("symbol", "AAPL"))
        .await
        .unwrap();

    assert_eq!(body[0]["symbol"], "AAPL");
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_auth_errors_are_not_retried() {
    let hits = Hits::default();
    let router = Router::new()
        .fallback(|State(hits): State<Hits>| async move {
            hits.fetch_add(1, Ordering::SeqCst);
            invalid_key().await
        })
        .with_state(hits.clone());
    let base_url = serve(router).await;
    let fmp = FinancialModelingPrep::with_config(
        config(&base_url, "bad").with_retry(RetryPolicy::exponential(3, Duration::from_millis(10))),
    );

    let error = fmp
        .quote()
        .call("full_quote", &Args::new().with("symbol", "AAPL"))
        .await
        .unwrap_err();

    assert_eq!(error.api_kind(), Some(ApiErrorKind::Auth));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let router = Router::new().fallback(|| async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Json(json!([]))
    });
    let base_url = serve(router).await;
    let fmp = FinancialModelingPrep::with_config(
        config(&base_url, "key-1").with_timeout(Duration::from_millis(100)),
    );

    let error = fmp
        .call(Category::CompanyInfo, "company_profile", &Args::new().with("symbol", "AAPL"))
        .await
        .unwrap_err();
    assert!(matches!(error, FmpError::Timeout { .. }));
}

#[tokio::test]
async fn test_cache_keys_do_not_alias_packed_values() {
    let (base_url, hits) = echo_server().await;
    let cache = Arc::new(MemoryCache::new(Duration::from_secs(60)));
    let fmp = FinancialModelingPrep::with_cache(config(&base_url, "key-1"), cache);

    let packed = fmp
        .get("v4/raw", &Args::new().with("a", "1&b=2"))
        .await
        .unwrap();
    let split = fmp
        .get("v4/raw", &Args::new().with("a", "1").with("b", "2"))
        .await
        .unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
    fmp.get("v4/raw", &Args::new().with("a", "1&b=2")).await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert_eq!(packed["query"]["a"], "1&b=2");
    assert_eq!(split["query"]["a"], "1");
    assert_eq!(split["query"]["b"], "2");
}
