use bitly_api::{Client, Error};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn load_json(name: &str) -> serde_json::Value {
    serde_json::from_str(&load_fixture(name)).unwrap()
}

fn client(server: &MockServer) -> Client {
    Client::new("u", "k").with_base_url(&server.uri())
}

#[tokio::test]
async fn shorten_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("shorten.json");

    Mock::given(method("GET"))
        .and(path("/shorten"))
        .and(query_param("version", "2.0.1"))
        .and(query_param("longUrl", "http://example.com/articles/42"))
        .and(query_param("login", "u"))
        .and(query_param("apiKey", "k"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .shorten("http://example.com/articles/42")
        .await;
    assert_eq!(result.unwrap(), "http://bit.ly/15DlK");
}

#[tokio::test]
async fn expand_short_url_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("expand.json");

    Mock::given(method("GET"))
        .and(path("/expand"))
        .and(query_param("shortUrl", "http://bit.ly/31IqMl"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).expand("http://bit.ly/31IqMl").await;
    assert_eq!(result.unwrap(), "http://example.com/articles/42");
}

#[tokio::test]
async fn expand_hash_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("expand.json");

    Mock::given(method("GET"))
        .and(path("/expand"))
        .and(query_param("hash", "31IqMl"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).expand("31IqMl").await;
    assert_eq!(result.unwrap(), "http://example.com/articles/42");
}

#[tokio::test]
async fn info_returns_results_unchanged() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("info.json");

    Mock::given(method("GET"))
        .and(path("/info"))
        .and(query_param("hash", "3j4ir4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let results = client(&mock_server).info("3j4ir4").await.unwrap();
    assert_eq!(
        serde_json::Value::Object(results),
        load_json("info.json")["results"]
    );
}

#[tokio::test]
async fn info_with_keys_narrows_request() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("info.json");

    Mock::given(method("GET"))
        .and(path("/info"))
        .and(query_param("shortUrl", "http://bit.ly/3j4ir4"))
        .and(query_param("keys", "htmlTitle,thumbnail"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let results = client(&mock_server)
        .info_with_keys("http://bit.ly/3j4ir4", &["htmlTitle", "thumbnail"])
        .await
        .unwrap();
    assert!(results.contains_key("3j4ir4"));
}

#[tokio::test]
async fn stats_returns_results_unchanged() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("stats.json");

    Mock::given(method("GET"))
        .and(path("/stats"))
        .and(query_param("hash", "31IqMl"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let results = client(&mock_server).stats("31IqMl").await.unwrap();
    assert_eq!(
        serde_json::Value::Object(results),
        load_json("stats.json")["results"]
    );
}

#[tokio::test]
async fn errors_returns_catalog() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("errors.json");

    Mock::given(method("GET"))
        .and(path("/errors"))
        .and(query_param("version", "2.0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let catalog = client(&mock_server).errors().await.unwrap();
    assert_eq!(catalog.as_array().map(|a| a.len()), Some(3));
}

#[tokio::test]
async fn api_error_returns_envelope() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("error_203.json");

    Mock::given(method("GET"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .shorten("http://example.com")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(203));
    let envelope = err.into_envelope();
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        load_json("error_203.json")
    );
}

#[tokio::test]
async fn server_error_is_no_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).stats("31IqMl").await;
    assert!(matches!(result, Err(Error::NoData)));
}

#[tokio::test]
async fn malformed_json_is_no_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/expand"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).expand("31IqMl").await;
    assert!(matches!(result, Err(Error::NoData)));
}

#[tokio::test]
async fn unreachable_host_is_no_data() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let result = Client::new("u", "k").with_base_url(&uri).errors().await;
    let err = result.unwrap_err();
    assert!(matches!(err, Error::NoData));
    assert_ne!(err.status_code(), Some(0));
}
