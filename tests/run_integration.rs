//! End-to-end runs against a local mock server standing in for the store.

use play_rank::config::EMPTY_RESULT_MESSAGE;
use play_rank::{evaluate_exit_code, report_outcome, run_scrape_to, Config, Limit, RankedEntry};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COLLECTION_PATH: &str = "/store/apps/collection/topgrossing";

const RANKING_PAGE: &str = r#"<html><body>
<div class="ULeU3b">
  <a class="Si6A0c Gy4nib" href="/store/apps/details?id=com.app.one" aria-label="One Game"><div class="j2FCNc">One</div></a>
  <a class="Si6A0c" href="/store/apps/details?id=com.app.one&amp;referrer=x">One again</a>
  <a class="Si6A0c" href="/store/apps/details?id=com.app.two" aria-label="Two &amp; Co"><span>2</span></a>
  <a class="Si6A0c" href="/store/apps/details?id=com.app.three">Three</a>
</div>
</body></html>"#;

async fn mount_page(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .and(query_param("hl", "ko"))
        .and(query_param("gl", "KR"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

fn config_for(server: &MockServer) -> Config {
    Config {
        endpoint: format!("{}{}", server.uri(), COLLECTION_PATH),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_run_csv_success() {
    let server = MockServer::start().await;
    mount_page(&server, RANKING_PAGE).await;

    let mut out = Vec::new();
    let report = run_scrape_to(config_for(&server), &mut out).await.unwrap();

    assert_eq!(report.extracted, 3);
    assert_eq!(report.emitted, 3);
    assert_eq!(evaluate_exit_code(&report), 0);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "rank,app_id,title\r\n1,com.app.one,One Game\r\n2,com.app.two,Two & Co\r\n3,com.app.three,\r\n"
    );
}

#[tokio::test]
async fn test_run_json_with_limit() {
    let server = MockServer::start().await;
    mount_page(&server, RANKING_PAGE).await;

    let config = Config {
        json: true,
        limit: Limit::Count(2),
        ..config_for(&server)
    };
    let mut out = Vec::new();
    let report = run_scrape_to(config, &mut out).await.unwrap();

    assert_eq!(report.extracted, 3);
    assert_eq!(report.emitted, 2);
    let parsed: Vec<RankedEntry> = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        parsed,
        vec![
            RankedEntry::new(1, "com.app.one", "One Game"),
            RankedEntry::new(2, "com.app.two", "Two & Co"),
        ]
    );
}

#[tokio::test]
async fn test_run_sends_category_when_given() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .and(query_param("category", "GAME"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RANKING_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        category: Some("GAME".to_string()),
        ..config_for(&server)
    };
    let report = run_scrape_to(config, std::io::sink()).await.unwrap();

    assert!(report.url.ends_with("?hl=ko&gl=KR&category=GAME"));
    assert_eq!(report.emitted, 3);
}

#[tokio::test]
async fn test_run_empty_page_is_soft_failure() {
    let server = MockServer::start().await;
    mount_page(&server, "<html><body><p>Nothing to see</p></body></html>").await;

    let mut out = Vec::new();
    let report = run_scrape_to(config_for(&server), &mut out).await.unwrap();

    assert_eq!(report.emitted, 0);
    assert_eq!(evaluate_exit_code(&report), 1);
    assert_eq!(String::from_utf8(out).unwrap(), "rank,app_id,title\r\n");

    let mut stderr = Vec::new();
    assert_eq!(report_outcome(&report, &mut stderr), 1);
    assert_eq!(
        String::from_utf8(stderr).unwrap(),
        format!("{EMPTY_RESULT_MESSAGE}\n")
    );
}

#[tokio::test]
async fn test_run_with_entries_writes_no_diagnostic() {
    let server = MockServer::start().await;
    mount_page(&server, RANKING_PAGE).await;

    let report = run_scrape_to(config_for(&server), std::io::sink()).await.unwrap();

    let mut stderr = Vec::new();
    assert_eq!(report_outcome(&report, &mut stderr), 0);
    assert!(stderr.is_empty());
}

#[tokio::test]
async fn test_run_empty_page_json_is_empty_array() {
    let server = MockServer::start().await;
    mount_page(&server, "").await;

    let config = Config {
        json: true,
        ..config_for(&server)
    };
    let mut out = Vec::new();
    let report = run_scrape_to(config, &mut out).await.unwrap();

    assert_eq!(evaluate_exit_code(&report), 1);
    assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
}

#[tokio::test]
async fn test_run_limit_zero_exits_with_empty_status() {
    let server = MockServer::start().await;
    mount_page(&server, RANKING_PAGE).await;

    let config = Config {
        limit: Limit::Count(0),
        ..config_for(&server)
    };
    let report = run_scrape_to(config, std::io::sink()).await.unwrap();

    assert_eq!(report.extracted, 3);
    assert_eq!(evaluate_exit_code(&report), 1);
}

#[tokio::test]
async fn test_run_transport_failure_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut out = Vec::new();
    let err = run_scrape_to(config_for(&server), &mut out)
        .await
        .expect_err("500 should abort the run");

    assert!(format!("{err:#}").contains("Failed to fetch ranking page"));
    assert!(out.is_empty(), "nothing is written when the fetch fails");
}
