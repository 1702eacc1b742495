//! End-to-end tests driving the real client against the mock server over a
//! local socket: the spec scenarios (Stockholm search, pagination windows,
//! lead batches) plus the auth behavior of the raw endpoints.

use prospector_client::{fetch_page, ProspectorClient, ProspectorError, SearchSession};
use prospector_core::types::{FilterCriteria, RawCompany};
use prospector_server::{build_app, AppState, BasicAuthState};

const CLIENT_ID: &str = "cid_test";
const CLIENT_SECRET: &str = "cs_test";

async fn spawn_server(companies: Vec<RawCompany>) -> String {
    let auth = BasicAuthState::new(Some(CLIENT_ID.to_string()), Some(CLIENT_SECRET.to_string()));
    let app = build_app(AppState::new(companies), auth);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server run");
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> ProspectorClient {
    ProspectorClient::direct(base_url, CLIENT_ID, CLIENT_SECRET, 10)
        .expect("client construction should not fail")
}

fn company(name: &str, org: &str, city: &str, employees: u32) -> RawCompany {
    RawCompany {
        name: name.to_string(),
        organisation_number: Some(org.to_string()),
        city: Some(city.to_string()),
        employees: Some(employees),
        ..RawCompany::default()
    }
}

fn five_company_fixture() -> Vec<RawCompany> {
    vec![
        company("Tech Solutions AB", "5567-0001", "Stockholm", 150),
        company("Green Energy Corp", "5567-0002", "Göteborg", 300),
        company("Design Studio Ltd", "5567-0003", "Malmö", 25),
        company("Finance Partners", "5567-0004", "Stockholm", 80),
        company("Healthcare Innovation", "5567-0005", "Linköping", 200),
    ]
}

fn thirty_company_fixture() -> Vec<RawCompany> {
    (1..=30)
        .map(|i| company(&format!("Company {i}"), &format!("5567-{i:04}"), "Stockholm", i))
        .collect()
}

#[tokio::test]
async fn stockholm_search_returns_exactly_the_two_matches() {
    let base_url = spawn_server(five_company_fixture()).await;
    let client = client(&base_url);

    let mut session = SearchSession::new(25);
    assert!(session.sign_in(&client).await.expect("login"));

    let criteria = FilterCriteria {
        city: "Stockholm".to_string(),
        ..FilterCriteria::default()
    };
    let results = session.search(&client, criteria).await.expect("search");

    assert_eq!(results.len(), 2);
    let names: Vec<_> = results.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Tech Solutions AB", "Finance Partners"]);
    assert_eq!(session.page().total_available, 2);
}

#[tokio::test]
async fn fetch_page_total_count_equals_page_length() {
    let base_url = spawn_server(five_company_fixture()).await;
    let client = client(&base_url);

    let criteria = FilterCriteria {
        city: "Stockholm".to_string(),
        ..FilterCriteria::default()
    };
    let page = fetch_page(&client, &criteria, 0, 25).await.expect("page");
    assert_eq!(page.total_count, 2);
    assert_eq!(page.companies.len(), 2);
}

#[tokio::test]
async fn pagination_windows_do_not_overlap() {
    let base_url = spawn_server(thirty_company_fixture()).await;
    let client = client(&base_url);
    let criteria = FilterCriteria::default();

    let first = fetch_page(&client, &criteria, 0, 25).await.expect("page 1");
    let second = fetch_page(&client, &criteria, 25, 25).await.expect("page 2");

    assert_eq!(first.companies.len(), 25);
    assert_eq!(second.companies.len(), 5);

    let first_ids: Vec<_> = first.companies.iter().map(|c| c.id.clone()).collect();
    assert!(second
        .companies
        .iter()
        .all(|c| !first_ids.contains(&c.id)));
}

#[tokio::test]
async fn session_next_page_advances_the_window() {
    let base_url = spawn_server(thirty_company_fixture()).await;
    let client = client(&base_url);

    let mut session = SearchSession::new(25);
    session.sign_in(&client).await.expect("login");
    session
        .search(&client, FilterCriteria::default())
        .await
        .expect("first page");
    assert_eq!(session.results().len(), 25);

    session.next_page(&client).await.expect("second page");
    assert_eq!(session.results().len(), 5);
    assert_eq!(session.page().skip, 25);
}

#[tokio::test]
async fn preview_reports_match_and_total_counts() {
    let base_url = spawn_server(five_company_fixture()).await;
    let client = client(&base_url);

    let criteria = FilterCriteria {
        city: "Stockholm".to_string(),
        ..FilterCriteria::default()
    };
    let preview = client
        .preview_filters(&prospector_core::query::to_clauses(&criteria))
        .await
        .expect("preview");
    assert_eq!(preview.preview_count, 2);
    assert_eq!(preview.total_available, 5);
}

#[tokio::test]
async fn lead_batch_reports_full_success() {
    let base_url = spawn_server(five_company_fixture()).await;
    let client = client(&base_url);

    let mut session = SearchSession::new(25);
    session.sign_in(&client).await.expect("login");
    session
        .search(&client, FilterCriteria::default())
        .await
        .expect("search");

    let (a, b) = (session.results()[0].clone(), session.results()[1].clone());
    session.select(a);
    session.select(b);

    let receipt = session.submit_leads(&client).await.expect("leads");
    assert!(receipt.success);
    assert_eq!(receipt.leads_created, 2);
}

#[tokio::test]
async fn wrong_credentials_are_rejected() {
    let base_url = spawn_server(five_company_fixture()).await;
    let client = ProspectorClient::direct(&base_url, CLIENT_ID, "wrong-secret", 10)
        .expect("client construction should not fail");

    let err = client.validate_login().await.unwrap_err();
    assert!(matches!(err, ProspectorError::AuthenticationRequired));
}

#[tokio::test]
async fn missing_or_malformed_auth_header_gets_401() {
    let base_url = spawn_server(five_company_fixture()).await;
    let raw = reqwest::Client::new();

    let response = raw
        .get(format!("{base_url}/api/insight/filters"))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 401);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["message"], "Authentication required");

    let response = raw
        .get(format!("{base_url}/api/insight/filters"))
        .header("authorization", "Bearer some-token")
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn landing_page_needs_no_auth() {
    let base_url = spawn_server(five_company_fixture()).await;
    let raw = reqwest::Client::new();

    let response = raw
        .get(format!("{base_url}/api/information/landingpage"))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert!(body["welcomeText"].as_str().unwrap().starts_with("Welcome"));
}

#[tokio::test]
async fn unknown_endpoint_returns_404_with_path() {
    let base_url = spawn_server(five_company_fixture()).await;
    let raw = reqwest::Client::new();

    let response = raw
        .get(format!("{base_url}/api/insight/unknown-thing"))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["message"], "API endpoint not found");
    assert_eq!(body["path"], "/api/insight/unknown-thing");
}
