//! Integration tests for the data sources
//!
//! Each test points a source at a one-shot HTTP responder on localhost (or at
//! a closed port) so no external network is touched.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use data_facade::{
    CpiCsv, DataError, FinancialModelingPrep, GdpPage, GdpSource, InflationSource,
    SourceConfig, StockSource,
};

/// Serve exactly one HTTP response and return the base URL.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}")
}

/// A localhost URL nothing listens on.
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

// ============================================================================
// Financial data API
// ============================================================================

#[test]
fn test_stock_closes_end_to_end() {
    let base = serve_once(
        "200 OK",
        r#"{"symbol":"AAPL","historical":[{"date":"2024-01-03","close":184.25},{"date":"2024-01-02","close":185.64}]}"#,
    );
    let config = SourceConfig::builder()
        .fmp_base_url(&format!("{base}/api/v3"))
        .fmp_api_key("test")
        .timeout_secs(5)
        .build()
        .unwrap();

    let series = FinancialModelingPrep::new(&config)
        .unwrap()
        .daily_closes("aapl")
        .unwrap();

    assert_eq!(series.values(), vec![185.64, 184.25]);
    assert_eq!(series.name(), "AAPL close");
}

#[test]
fn test_stock_http_error_status() {
    let base = serve_once("401 Unauthorized", r#"{"Error Message":"Invalid API KEY."}"#);
    let config = SourceConfig::builder()
        .fmp_base_url(&base)
        .fmp_api_key("test")
        .build()
        .unwrap();

    let err = FinancialModelingPrep::new(&config)
        .unwrap()
        .daily_closes("AAPL")
        .unwrap_err();

    match err {
        DataError::HttpStatus { status, url } => {
            assert_eq!(status, 401);
            assert!(!url.contains("apikey"), "credentials leaked into error: {url}");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn test_stock_transport_failure() {
    let config = SourceConfig::builder()
        .fmp_base_url(&closed_port_url())
        .fmp_api_key("test")
        .timeout_secs(2)
        .build()
        .unwrap();

    let err = FinancialModelingPrep::new(&config)
        .unwrap()
        .daily_closes("AAPL")
        .unwrap_err();
    assert!(matches!(err, DataError::RequestFailed(_)));
}

// ============================================================================
// CPI CSV
// ============================================================================

#[test]
fn test_cpi_end_to_end() {
    let base = serve_once(
        "200 OK",
        "DATE,CPIAUCSL\n2022-12-01,298.812\n2023-01-01,299.170\n",
    );
    let config = SourceConfig::builder()
        .cpi_csv_url(&format!("{base}/fredgraph.csv"))
        .build()
        .unwrap();

    let series = CpiCsv::new(&config).unwrap().cpi_series().unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(
        series.last().unwrap().date,
        chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
    );
}

#[test]
fn test_cpi_transport_failure() {
    let config = SourceConfig::builder()
        .cpi_csv_url(&format!("{}/cpi.csv", closed_port_url()))
        .timeout_secs(2)
        .build()
        .unwrap();

    let err = CpiCsv::new(&config).unwrap().cpi_series().unwrap_err();
    assert!(matches!(err, DataError::RequestFailed(_)));
}

// ============================================================================
// GDP page
// ============================================================================

#[test]
fn test_gdp_end_to_end() {
    let base = serve_once(
        "200 OK",
        r#"<html><body><span class="chart-output">2.8</span></body></html>"#,
    );
    let url = format!("{base}/news/schedule");
    let config = SourceConfig::builder().gdp_page_url(&url).build().unwrap();

    let reading = GdpPage::new(&config).unwrap().latest_gdp().unwrap();
    assert_eq!(reading.value, 2.8);
    assert_eq!(reading.source_url, url);
}

#[test]
fn test_gdp_server_error() {
    let base = serve_once("503 Service Unavailable", "down");
    let config = SourceConfig::builder().gdp_page_url(&base).build().unwrap();

    let err = GdpPage::new(&config).unwrap().latest_gdp().unwrap_err();
    assert!(matches!(err, DataError::HttpStatus { status: 503, .. }));
}

#[test]
fn test_gdp_transport_failure() {
    let config = SourceConfig::builder()
        .gdp_page_url(&closed_port_url())
        .timeout_secs(2)
        .build()
        .unwrap();

    let err = GdpPage::new(&config).unwrap().latest_gdp().unwrap_err();
    assert!(matches!(err, DataError::RequestFailed(_)));
}
